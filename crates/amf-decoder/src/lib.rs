#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod packet;
pub mod parser;
pub mod reference_table;

mod properties;

pub use config::{DecoderConfig, UnknownMarkerPolicy};
pub use decoder::ValueDecoder;
pub use error::{DecodeError, ParseFailure};
pub use packet::{DecodedPacket, PacketDecoder};
pub use parser::{AmfParser, Parsed};
pub use reference_table::ReferenceTable;
