#![warn(clippy::pedantic)]

pub mod error;
pub mod marker;
pub mod source;

pub use error::WireError;
pub use source::{ByteSource, LengthPrefix};
