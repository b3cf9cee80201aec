use std::io::Read;

use amf_types::packet::length_from_wire;
use amf_types::{ContextHeader, Message, Packet};
use amf_wire::{ByteSource, LengthPrefix};
use tracing::{debug, trace};

use crate::config::DecoderConfig;
use crate::decoder::read_utf8;
use crate::error::{DecodeError, ParseFailure};
use crate::parser::AmfParser;

/// Initial capacity cap for the header and message vectors.
const ENTRY_PREALLOC_LIMIT: usize = 64;

/// The result of decoding a NetConnection packet.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedPacket {
    pub packet: Packet,
    pub bytes_read: usize,
}

/// Decoder for the NetConnection envelope around AMF0 values.
///
/// Wire layout (all integers big-endian):
///
/// ```text
///   version         u16
///   header-count    u16
///   ┌ header ──────────────────────────────────────────┐
///   │ name            u16 length + UTF-8               │
///   │ must-understand u8 (non-zero is true)            │
///   │ length          u32, 0xFFFFFFFF = unknown        │
///   │ value           AMF0 value                       │
///   └──────────────────────────────────────────────────┘  × header-count
///   message-count   u16
///   ┌ message ─────────────────────────────────────────┐
///   │ target-uri      u16 length + UTF-8               │
///   │ response-uri    u16 length + UTF-8               │
///   │ length          u32, 0xFFFFFFFF = unknown        │
///   │ body            AMF0 value                       │
///   └──────────────────────────────────────────────────┘  × message-count
/// ```
///
/// Every header value and message body is decoded by
/// [`AmfParser::parse_from_source`], so each gets its own reference
/// table. Declared lengths are recorded but not checked against the bytes
/// the value actually used. The version is recorded without validation.
pub struct PacketDecoder;

impl PacketDecoder {
    /// Decode a packet from `reader` with the default configuration.
    ///
    /// # Errors
    ///
    /// [`ParseFailure`] with the byte count reached before the failure.
    pub fn decode<R: Read>(reader: R) -> Result<DecodedPacket, ParseFailure> {
        Self::decode_with_config(reader, &DecoderConfig::default())
    }

    /// Decode a packet from `reader` under `config`.
    ///
    /// # Errors
    ///
    /// See [`decode`](Self::decode).
    pub fn decode_with_config<R: Read>(
        reader: R,
        config: &DecoderConfig,
    ) -> Result<DecodedPacket, ParseFailure> {
        let mut source = ByteSource::new(reader);
        match Self::decode_inner(&mut source, config) {
            Ok(packet) => Ok(DecodedPacket {
                packet,
                bytes_read: source.consumed(),
            }),
            Err(error) => Err(ParseFailure {
                bytes_read: source.consumed(),
                error,
            }),
        }
    }

    fn decode_inner<R: Read>(
        source: &mut ByteSource<R>,
        config: &DecoderConfig,
    ) -> Result<Packet, DecodeError> {
        let version = source.read_u16()?;

        // Sessions are separate for references but share one value budget.
        let mut session = config.clone();

        let header_count = usize::from(source.read_u16()?);
        let mut headers = Vec::with_capacity(header_count.min(ENTRY_PREALLOC_LIMIT));
        for _ in 0..header_count {
            let header = Self::decode_header(source, &session)?;
            session.max_values = session.max_values.saturating_sub(header.value.node_count());
            headers.push(header);
        }

        let message_count = usize::from(source.read_u16()?);
        let mut messages = Vec::with_capacity(message_count.min(ENTRY_PREALLOC_LIMIT));
        for _ in 0..message_count {
            let message = Self::decode_message(source, &session)?;
            session.max_values = session.max_values.saturating_sub(message.body.node_count());
            messages.push(message);
        }

        debug!(
            version,
            header_count,
            message_count,
            bytes_read = source.consumed(),
            values = config.max_values - session.max_values,
            "decoded packet"
        );
        Ok(Packet {
            version,
            headers,
            messages,
        })
    }

    fn decode_header<R: Read>(
        source: &mut ByteSource<R>,
        config: &DecoderConfig,
    ) -> Result<ContextHeader, DecodeError> {
        let name = read_utf8(source, LengthPrefix::U16)?;
        let must_understand = source.read_u8()? != 0;
        let length = length_from_wire(source.read_u32()?);
        trace!(%name, must_understand, ?length, "packet header");
        let value = AmfParser::parse_from_source(source, config)?;

        Ok(ContextHeader {
            name,
            must_understand,
            length,
            value,
        })
    }

    fn decode_message<R: Read>(
        source: &mut ByteSource<R>,
        config: &DecoderConfig,
    ) -> Result<Message, DecodeError> {
        let target_uri = read_utf8(source, LengthPrefix::U16)?;
        let response_uri = read_utf8(source, LengthPrefix::U16)?;
        let length = length_from_wire(source.read_u32()?);
        trace!(%target_uri, %response_uri, ?length, "packet message");
        let body = AmfParser::parse_from_source(source, config)?;

        Ok(Message {
            target_uri,
            response_uri,
            length,
            body,
        })
    }
}
