use amf_types::Marker;
use amf_wire::WireError;

/// Errors that can occur while decoding an AMF0 value.
///
/// Every variant is fatal to the decode session that raised it; nothing is
/// retried or skipped.
///
/// ```text
///   DecodeError
///   ├── ShortRead(WireError)   ← stream ended or the reader failed
///   ├── MalformedStream        ← missing OBJECT_END, bad UTF-8, limits,
///   │                            unknown marker under the Reject policy
///   ├── InvalidReference       ← backreference past the table end
///   ├── UnsupportedType        ← MOVIECLIP, UNSUPPORTED, RECORDSET
///   └── UnsupportedVersion     ← AVMPLUS_OBJECT (AMF3 switch)
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The byte source could not deliver the bytes a value needed.
    #[error("short read: {0}")]
    ShortRead(#[from] WireError),

    /// A structural rule of the format was violated.
    ///
    /// `offset` is the stream position of the offending byte or field.
    #[error("malformed stream at offset {offset}: {reason}")]
    MalformedStream { offset: usize, reason: String },

    /// A REFERENCE pointed at an index the table does not (yet) hold.
    ///
    /// Entries are added when a complex value finishes decoding, so a
    /// reference to an ancestor that is still open also lands here.
    #[error("invalid reference {index}: reference table holds {len} entries")]
    InvalidReference { index: u16, len: usize },

    /// A reserved or deliberately unimplemented marker.
    #[error("unsupported type marker {:#04x} ({})", .marker.wire_id(), .marker.label())]
    UnsupportedType { marker: Marker },

    /// The AVMPLUS_OBJECT marker: the rest of the value is AMF3.
    #[error("AMF3 (AVM+) encoded values are not supported")]
    UnsupportedVersion,
}

/// A failed [`AmfParser`](crate::AmfParser) or
/// [`PacketDecoder`](crate::PacketDecoder) call.
///
/// `bytes_read` counts every byte pulled from the reader before the
/// failure, so callers can point at where decoding stopped. No partial
/// value is returned.
#[derive(Debug, thiserror::Error)]
#[error("decode failed after {bytes_read} bytes")]
pub struct ParseFailure {
    pub bytes_read: usize,
    #[source]
    pub error: DecodeError,
}

impl ParseFailure {
    /// The underlying decode error.
    pub fn error(&self) -> &DecodeError {
        &self.error
    }

    pub fn into_error(self) -> DecodeError {
        self.error
    }
}
