use std::io::Read;

use amf_types::{Marker, Payload, Value};
use amf_wire::{ByteSource, LengthPrefix};
use tracing::{debug, trace};

use crate::config::{DecoderConfig, UnknownMarkerPolicy};
use crate::error::DecodeError;
use crate::properties::decode_properties;
use crate::reference_table::ReferenceTable;

/// Initial capacity cap for strict-array element vectors. The declared
/// count is untrusted, so larger arrays grow as elements actually decode.
const ELEMENT_PREALLOC_LIMIT: usize = 1024;

/// Recursive-descent decoder for a single AMF0 decode session.
///
/// A `ValueDecoder` borrows a [`ByteSource`] and owns the session's
/// [`ReferenceTable`]. Given a marker byte, [`decode`](Self::decode) reads
/// the matching payload, recursing for nested values:
///
/// ```text
///   decode(marker)
///     ├── scalars / strings   → read fixed or length-prefixed payload
///     ├── keyed containers    → property list ↔ decode (recursive)
///     │                         then register in the reference table
///     ├── STRICT_ARRAY        → count, one shared marker, count payloads
///     ├── REFERENCE           → u16 index, copy marker + payload
///     └── rejected markers    → UnsupportedType / UnsupportedVersion
/// ```
///
/// Every value produced counts against
/// [`DecoderConfig::max_values`], including each value inside a copied
/// reference target.
///
/// Layers that need to feed values to the decoder one at a time (the
/// packet decoder) should go through
/// [`AmfParser::parse_from_source`](crate::AmfParser::parse_from_source),
/// which starts a fresh session per value.
pub struct ValueDecoder<'a, R> {
    source: &'a mut ByteSource<R>,
    config: &'a DecoderConfig,
    references: ReferenceTable,
    budget: ValueBudget,
    depth: usize,
}

impl<'a, R: Read> ValueDecoder<'a, R> {
    /// Start a session over `source` with an empty reference table.
    pub fn new(source: &'a mut ByteSource<R>, config: &'a DecoderConfig) -> Self {
        Self {
            source,
            config,
            references: ReferenceTable::new(),
            budget: ValueBudget {
                used: 0,
                limit: config.max_values,
            },
            depth: 0,
        }
    }

    /// Decode the payload that follows `marker_byte`.
    ///
    /// The marker byte itself must already have been consumed.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`]; the session should be abandoned afterwards.
    pub fn decode(&mut self, marker_byte: u8) -> Result<Value, DecodeError> {
        self.decode_value(Marker::from_wire_id(marker_byte), None)
    }

    /// The session's reference table.
    pub fn references(&self) -> &ReferenceTable {
        &self.references
    }

    /// Values produced so far, counting every copy made for a reference.
    pub fn values_decoded(&self) -> usize {
        self.budget.used
    }

    /// Bytes consumed from the underlying source so far.
    pub fn bytes_read(&self) -> usize {
        self.source.consumed()
    }

    pub(crate) fn source(&mut self) -> &mut ByteSource<R> {
        self.source
    }

    /// Decode one value of the given marker. `name` is the property key
    /// when the value fills a property slot.
    pub(crate) fn decode_value(
        &mut self,
        marker: Marker,
        name: Option<String>,
    ) -> Result<Value, DecodeError> {
        trace!(?marker, offset = self.source.consumed(), "decode value");
        self.budget.charge(1, self.source.consumed())?;

        let payload = match marker {
            Marker::Number => Payload::Number(self.source.read_f64()?),
            Marker::Boolean => Payload::Boolean(self.source.read_u8()? != 0),
            Marker::String => Payload::String(read_utf8(self.source, LengthPrefix::U16)?),
            Marker::LongString | Marker::XmlDocument => {
                Payload::String(read_utf8(self.source, LengthPrefix::U32)?)
            }
            Marker::Null | Marker::Undefined => Payload::Empty,
            Marker::Object => return self.decode_keyed(marker, name),
            Marker::EcmaArray => {
                // The count is advisory; OBJECT_END terminates the list.
                let _count = self.source.read_u32()?;
                return self.decode_keyed(marker, name);
            }
            Marker::TypedObject => {
                let class_name = read_utf8(self.source, LengthPrefix::U16)?;
                return self.decode_keyed(marker, Some(class_name));
            }
            Marker::StrictArray => Payload::Elements(self.decode_strict_array()?),
            Marker::Date => {
                // Timezone is reserved and ignored.
                let _timezone = self.source.read_u16()?;
                Payload::Number(self.source.read_f64()?)
            }
            Marker::Reference => return self.resolve_reference(name),
            Marker::Movieclip | Marker::Unsupported | Marker::Recordset => {
                return Err(DecodeError::UnsupportedType { marker });
            }
            Marker::AvmPlusObject => return Err(DecodeError::UnsupportedVersion),
            Marker::ObjectEnd | Marker::Unknown(_) => self.unrecognized(marker)?,
        };

        Ok(Value {
            marker,
            name,
            payload,
        })
    }

    /// Object, ECMA array and typed object: property list, then register.
    fn decode_keyed(&mut self, marker: Marker, name: Option<String>) -> Result<Value, DecodeError> {
        debug_assert!(marker.is_keyed_container());
        self.enter()?;
        let properties = decode_properties(self)?;
        self.depth -= 1;

        let value = Value {
            marker,
            name,
            payload: Payload::Properties(properties),
        };
        let index = self.references.register(value.clone());
        trace!(?marker, index, "registered reference");
        Ok(value)
    }

    fn decode_strict_array(&mut self) -> Result<Vec<Value>, DecodeError> {
        let count_offset = self.source.consumed();
        let count = usize::try_from(self.source.read_u32()?).unwrap_or(usize::MAX);
        if count > self.config.max_array_len {
            return Err(DecodeError::MalformedStream {
                offset: count_offset,
                reason: format!(
                    "strict array declares {count} elements, limit is {}",
                    self.config.max_array_len
                ),
            });
        }

        // One marker for every element.
        let element_marker = Marker::from_wire_id(self.source.read_u8()?);

        self.enter()?;
        let mut elements = Vec::with_capacity(count.min(ELEMENT_PREALLOC_LIMIT));
        for _ in 0..count {
            elements.push(self.decode_value(element_marker, None)?);
        }
        self.depth -= 1;
        Ok(elements)
    }

    fn resolve_reference(&mut self, name: Option<String>) -> Result<Value, DecodeError> {
        let offset = self.source.consumed();
        let index = self.source.read_u16()?;
        let target = self.references.resolve(index)?;
        // The reference itself is already counted.
        self.budget.charge(target.node_count() - 1, offset)?;
        trace!(index, marker = ?target.marker, "resolved reference");
        Ok(Value {
            marker: target.marker,
            name,
            payload: target.payload.clone(),
        })
    }

    fn unrecognized(&self, marker: Marker) -> Result<Payload, DecodeError> {
        match self.config.unknown_markers {
            UnknownMarkerPolicy::Lenient => {
                debug!(marker = marker.wire_id(), "unrecognized marker decoded as empty value");
                Ok(Payload::Empty)
            }
            UnknownMarkerPolicy::Reject => Err(DecodeError::MalformedStream {
                offset: self.source.consumed().saturating_sub(1),
                reason: format!("unrecognized marker {:#04x}", marker.wire_id()),
            }),
        }
    }

    fn enter(&mut self) -> Result<(), DecodeError> {
        if self.depth >= self.config.max_depth {
            return Err(DecodeError::MalformedStream {
                offset: self.source.consumed(),
                reason: format!("nesting exceeds depth limit {}", self.config.max_depth),
            });
        }
        self.depth += 1;
        Ok(())
    }
}

/// Running count of values produced in one session.
#[derive(Debug)]
struct ValueBudget {
    used: usize,
    limit: usize,
}

impl ValueBudget {
    fn charge(&mut self, count: usize, offset: usize) -> Result<(), DecodeError> {
        self.used = self.used.saturating_add(count);
        if self.used > self.limit {
            return Err(DecodeError::MalformedStream {
                offset,
                reason: format!("session exceeds value limit {}", self.limit),
            });
        }
        Ok(())
    }
}

/// Read a length-prefixed UTF-8 string.
///
/// # Errors
///
/// [`DecodeError::ShortRead`] on truncation, [`DecodeError::MalformedStream`]
/// if the bytes are not valid UTF-8.
pub(crate) fn read_utf8<R: Read>(
    source: &mut ByteSource<R>,
    prefix: LengthPrefix,
) -> Result<String, DecodeError> {
    let start = source.consumed();
    let bytes = source.read_prefixed(prefix)?;
    String::from_utf8(bytes).map_err(|e| DecodeError::MalformedStream {
        offset: start,
        reason: format!("string is not valid UTF-8: {e}"),
    })
}
