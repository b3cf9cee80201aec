use serde::Serialize;

use crate::marker::Marker;

/// One decoded AMF0 value.
///
/// `name` is set when the value sits in a property slot (the property key)
/// and, for `TypedObject`, holds the class name read from the wire. A
/// `TypedObject` in a property slot therefore reports its class name, not
/// the key it was stored under.
///
/// The decoder never emits a value with `Marker::Reference`: backreferences
/// are resolved into a copy of the referenced marker and payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Value {
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub payload: Payload,
}

/// Payload shapes, selected by the marker.
///
/// ```text
/// ┌────────────┬──────────────────────────────────────────┐
/// │ Variant    │ Markers                                  │
/// ├────────────┼──────────────────────────────────────────┤
/// │ Empty      │ Null, Undefined, unrecognized bytes      │
/// │ Number     │ Number, Date (epoch milliseconds)        │
/// │ Boolean    │ Boolean                                  │
/// │ String     │ String, LongString, XmlDocument          │
/// │ Elements   │ StrictArray                              │
/// │ Properties │ Object, EcmaArray, TypedObject           │
/// └────────────┴──────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Payload {
    #[default]
    Empty,
    Number(f64),
    Boolean(bool),
    String(String),
    Elements(Vec<Value>),
    Properties(Vec<Value>),
}

impl Value {
    /// Build an unnamed value.
    pub fn new(marker: Marker, payload: Payload) -> Self {
        Self {
            marker,
            name: None,
            payload,
        }
    }

    /// Attach a name (property key or class name).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The numeric payload of a Number or Date.
    pub fn as_number(&self) -> Option<f64> {
        match self.payload {
            Payload::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.payload {
            Payload::Boolean(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.payload {
            Payload::String(s) => Some(s),
            _ => None,
        }
    }

    /// Elements of a StrictArray, in wire order.
    pub fn elements(&self) -> Option<&[Value]> {
        match &self.payload {
            Payload::Elements(items) => Some(items),
            _ => None,
        }
    }

    /// Properties of a keyed container, in wire order, duplicates included.
    pub fn properties(&self) -> Option<&[Value]> {
        match &self.payload {
            Payload::Properties(props) => Some(props),
            _ => None,
        }
    }

    /// First property named `key`.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties()?
            .iter()
            .find(|p| p.name.as_deref() == Some(key))
    }

    pub fn is_empty_payload(&self) -> bool {
        matches!(self.payload, Payload::Empty)
    }

    /// Number of values in this tree, counting `self`.
    pub fn node_count(&self) -> usize {
        match &self.payload {
            Payload::Elements(children) | Payload::Properties(children) => {
                1 + children.iter().map(Value::node_count).sum::<usize>()
            }
            _ => 1,
        }
    }
}
