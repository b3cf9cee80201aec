#![warn(clippy::pedantic)]

pub mod display;
pub mod marker;
pub mod packet;
pub mod value;

pub use marker::Marker;
pub use packet::{ContextHeader, Message, Packet};
pub use value::{Payload, Value};
