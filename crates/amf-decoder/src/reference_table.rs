use amf_types::Value;

use crate::error::DecodeError;

/// Append-only registry of completed complex values for one decode session.
///
/// Indices are handed out in the order keyed containers *finish* decoding.
/// A nested object therefore gets a lower index than the object holding
/// it, and a backreference to a still-open ancestor cannot resolve.
///
/// ```text
///   { a: { b: {} } }      finish order: b → 0, a → 1, outer → 2
/// ```
///
/// The table lives inside a single [`ValueDecoder`](crate::ValueDecoder)
/// and is dropped with it. It is never shared between sessions.
#[derive(Debug, Default)]
pub struct ReferenceTable {
    entries: Vec<Value>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed value and return its index.
    pub fn register(&mut self, value: Value) -> usize {
        self.entries.push(value);
        self.entries.len() - 1
    }

    /// Look up an entry by the index carried on the wire.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidReference`] if `index` is not below the
    /// current table length.
    pub fn resolve(&self, index: u16) -> Result<&Value, DecodeError> {
        self.entries
            .get(usize::from(index))
            .ok_or(DecodeError::InvalidReference {
                index,
                len: self.entries.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amf_types::{Marker, Payload};

    fn object(tag: &str) -> Value {
        Value::new(
            Marker::Object,
            Payload::Properties(vec![
                Value::new(Marker::String, Payload::String(tag.into())).with_name("tag"),
            ]),
        )
    }

    #[test]
    fn indices_follow_registration_order() {
        let mut table = ReferenceTable::new();
        assert!(table.is_empty());
        assert_eq!(table.register(object("first")), 0);
        assert_eq!(table.register(object("second")), 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve(1).unwrap(), &object("second"));
    }

    #[test]
    fn out_of_bounds_is_invalid_reference() {
        let mut table = ReferenceTable::new();
        assert!(matches!(
            table.resolve(0),
            Err(DecodeError::InvalidReference { index: 0, len: 0 })
        ));

        table.register(object("only"));
        assert!(table.resolve(0).is_ok());
        assert!(matches!(
            table.resolve(1),
            Err(DecodeError::InvalidReference { index: 1, len: 1 })
        ));
    }
}
