use std::io::Read;

use amf_types::Value;
use amf_wire::ByteSource;
use tracing::debug;

use crate::config::DecoderConfig;
use crate::decoder::ValueDecoder;
use crate::error::{DecodeError, ParseFailure};

/// The result of a successful [`AmfParser`] call.
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │ Parsed                                           │
/// │   value:      Value  ← the decoded tree          │
/// │   bytes_read: usize  ← marker byte included      │
/// └──────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed {
    pub value: Value,

    /// Bytes pulled from the reader, including the leading marker.
    ///
    /// Bytes after the value are never read, so a caller can keep reading
    /// the same stream for the next value.
    pub bytes_read: usize,
}

/// Entry point for decoding one top-level AMF0 value.
///
/// Reads the leading marker byte, then hands off to a [`ValueDecoder`]
/// with a fresh [`ReferenceTable`](crate::ReferenceTable). Nothing
/// carries over between calls.
///
/// # Example
///
/// ```rust
/// use amf_decoder::AmfParser;
///
/// let bytes = [0x02, 0x00, 0x05, b'h', b'e', b'l', b'l', b'o'];
/// let parsed = AmfParser::parse_slice(&bytes).unwrap();
/// assert_eq!(parsed.value.as_str(), Some("hello"));
/// assert_eq!(parsed.bytes_read, 8);
/// ```
pub struct AmfParser;

impl AmfParser {
    /// Decode one value from `reader` with the default configuration.
    ///
    /// # Errors
    ///
    /// [`ParseFailure`] wrapping the [`DecodeError`] that stopped the
    /// session, with the number of bytes consumed up to that point.
    pub fn parse<R: Read>(reader: R) -> Result<Parsed, ParseFailure> {
        Self::parse_with_config(reader, &DecoderConfig::default())
    }

    /// Decode one value from an in-memory buffer.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_slice(bytes: &[u8]) -> Result<Parsed, ParseFailure> {
        Self::parse(bytes)
    }

    /// Decode one value from `reader` under `config`.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_with_config<R: Read>(
        reader: R,
        config: &DecoderConfig,
    ) -> Result<Parsed, ParseFailure> {
        let mut source = ByteSource::new(reader);
        match Self::parse_from_source(&mut source, config) {
            Ok(value) => Ok(Parsed {
                value,
                bytes_read: source.consumed(),
            }),
            Err(error) => Err(ParseFailure {
                bytes_read: source.consumed(),
                error,
            }),
        }
    }

    /// Decode one value from a source the caller keeps hold of.
    ///
    /// This is the primitive for layers that embed AMF0 values in a larger
    /// structure: the caller reads its own framing from `source`, calls
    /// this for each embedded value, and reads the byte count back from
    /// [`ByteSource::consumed`]. Each call still gets its own reference
    /// table.
    ///
    /// # Errors
    ///
    /// The [`DecodeError`] that stopped the session.
    pub fn parse_from_source<R: Read>(
        source: &mut ByteSource<R>,
        config: &DecoderConfig,
    ) -> Result<Value, DecodeError> {
        let start = source.consumed();
        let marker_byte = source.read_u8()?;
        let mut decoder = ValueDecoder::new(source, config);
        let result = decoder.decode(marker_byte);
        let bytes_read = decoder.bytes_read() - start;
        let references = decoder.references().len();
        let values = decoder.values_decoded();

        match &result {
            Ok(value) => debug!(
                marker = ?value.marker,
                bytes_read,
                references,
                values,
                "decoded value"
            ),
            Err(e) => debug!(error = %e, bytes_read, references, values, "decode failed"),
        }
        result
    }
}
