use std::io::Read;

use amf_types::{Marker, Value};
use amf_wire::LengthPrefix;
use amf_wire::marker::OBJECT_END;

use crate::decoder::{ValueDecoder, read_utf8};
use crate::error::DecodeError;

/// Decode a property list up to and including its end sentinel.
///
/// Wire layout, repeated until the sentinel:
///
/// ```text
///   ┌──────────────┬──────────┬─────────────────┐
///   │ key (u16 str)│ marker   │ payload          │
///   └──────────────┴──────────┴─────────────────┘
///   ┌──────────────┬──────────┐
///   │ 0x00 0x00    │ 0x09     │   ← empty key + OBJECT_END
///   └──────────────┴──────────┘
/// ```
///
/// Properties come back in wire order; duplicate keys are all kept.
pub(crate) fn decode_properties<R: Read>(
    decoder: &mut ValueDecoder<'_, R>,
) -> Result<Vec<Value>, DecodeError> {
    let mut properties = Vec::new();
    loop {
        let key = read_utf8(decoder.source(), LengthPrefix::U16)?;
        let marker_offset = decoder.bytes_read();
        let marker_byte = decoder.source().read_u8()?;

        if key.is_empty() {
            if marker_byte != OBJECT_END {
                return Err(DecodeError::MalformedStream {
                    offset: marker_offset,
                    reason: format!(
                        "expected object-end marker {OBJECT_END:#04x} after empty key, \
                         found {marker_byte:#04x}"
                    ),
                });
            }
            return Ok(properties);
        }

        properties.push(decoder.decode_value(Marker::from_wire_id(marker_byte), Some(key))?);
    }
}

#[cfg(test)]
mod tests {
    use amf_wire::ByteSource;

    use crate::config::DecoderConfig;
    use crate::decoder::ValueDecoder;
    use crate::error::DecodeError;

    fn decode_object(hex_str: &str) -> Result<amf_types::Value, DecodeError> {
        let bytes = hex::decode(hex_str).unwrap();
        let mut source = ByteSource::new(bytes.as_slice());
        let config = DecoderConfig::default();
        ValueDecoder::new(&mut source, &config).decode(0x03)
    }

    #[test]
    fn empty_list() {
        let value = decode_object("000009").unwrap();
        assert_eq!(value.properties().unwrap().len(), 0);
    }

    #[test]
    fn keeps_wire_order() {
        // { z: null, a: undefined }
        let value = decode_object("00017a0500016106000009").unwrap();
        let keys: Vec<_> = value
            .properties()
            .unwrap()
            .iter()
            .map(|p| p.name().unwrap())
            .collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn empty_key_without_object_end() {
        // empty key followed by NULL instead of 0x09
        let err = decode_object("000005").unwrap_err();
        match err {
            DecodeError::MalformedStream { offset, reason } => {
                assert_eq!(offset, 2);
                assert!(reason.contains("found 0x05"));
            }
            other => panic!("expected MalformedStream, got {other:?}"),
        }
    }

    #[test]
    fn missing_sentinel_is_short_read() {
        let err = decode_object("00017a05").unwrap_err();
        assert!(matches!(err, DecodeError::ShortRead(_)));
    }
}
