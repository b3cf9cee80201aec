use amf_wire::marker::UNKNOWN_LENGTH;
use serde::Serialize;

use crate::value::Value;

/// A NetConnection packet: the envelope Flash remoting wraps around AMF0
/// values.
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │ version         u16                              │
/// │ header-count    u16                              │
/// │ headers         ContextHeader * header-count     │
/// │ message-count   u16                              │
/// │ messages        Message * message-count          │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// Header and message counts are not stored separately; they are the
/// lengths of the two vectors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Packet {
    /// 0 for AMF0 clients, 3 for clients that may switch to AMF3.
    pub version: u16,
    pub headers: Vec<ContextHeader>,
    pub messages: Vec<Message>,
}

/// A packet header carrying one AMF0 value.
///
/// Object references inside `value` are local to this header.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContextHeader {
    pub name: String,
    pub must_understand: bool,
    /// Declared byte length of `value`; `None` when the sender wrote the
    /// unknown-length sentinel.
    pub length: Option<u32>,
    pub value: Value,
}

/// A remoting message: target and response addressing plus a body value.
///
/// Object references inside `body` are local to this message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Message {
    pub target_uri: String,
    pub response_uri: String,
    /// Declared byte length of `body`; `None` for the unknown-length
    /// sentinel.
    pub length: Option<u32>,
    pub body: Value,
}

impl Packet {
    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// First header named `name`.
    pub fn header(&self, name: &str) -> Option<&ContextHeader> {
        self.headers.iter().find(|h| h.name == name)
    }
}

/// Map a raw u32 length field to `None` when it holds the sentinel.
pub fn length_from_wire(raw: u32) -> Option<u32> {
    (raw != UNKNOWN_LENGTH).then_some(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::Marker;
    use crate::value::Payload;

    #[test]
    fn sentinel_length_is_unknown() {
        assert_eq!(length_from_wire(u32::MAX), None);
        assert_eq!(length_from_wire(0), Some(0));
        assert_eq!(length_from_wire(42), Some(42));
    }

    #[test]
    fn header_lookup_by_name() {
        let packet = Packet {
            version: 0,
            headers: vec![ContextHeader {
                name: "Credentials".into(),
                must_understand: false,
                length: None,
                value: Value::new(Marker::Null, Payload::Empty),
            }],
            messages: Vec::new(),
        };
        assert_eq!(packet.header_count(), 1);
        assert_eq!(packet.message_count(), 0);
        assert!(packet.header("Credentials").is_some());
        assert!(packet.header("credentials").is_none());
    }
}
