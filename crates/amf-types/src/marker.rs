use amf_wire::marker as wire;
use serde::Serialize;

/// AMF0 type markers.
///
/// Each variant maps to the wire byte listed in `amf_wire::marker`. Bytes
/// outside 0x00–0x11 are captured by `Unknown(u8)` so the decoder can make
/// an explicit decision about them instead of silently misreading them.
///
/// ```text
/// ┌───────────┬──────────────────────────────────────────────┐
/// │ Group     │ Variants                                     │
/// ├───────────┼──────────────────────────────────────────────┤
/// │ scalar    │ Number, Boolean, Date, Null, Undefined       │
/// │ string    │ String, LongString, XmlDocument              │
/// │ keyed     │ Object, EcmaArray, TypedObject               │
/// │ sequence  │ StrictArray                                  │
/// │ structure │ Reference, ObjectEnd                         │
/// │ rejected  │ Movieclip, Unsupported, Recordset, AvmPlus   │
/// └───────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Number,
    Boolean,
    String,
    Object,
    Movieclip,
    Null,
    Undefined,
    Reference,
    EcmaArray,
    ObjectEnd,
    StrictArray,
    Date,
    LongString,
    Unsupported,
    Recordset,
    XmlDocument,
    TypedObject,
    AvmPlusObject,
    /// A byte that is not an AMF0 marker. The raw value is kept.
    Unknown(u8),
}

impl Marker {
    /// Return the wire byte for this marker.
    pub fn wire_id(self) -> u8 {
        match self {
            Self::Number => wire::NUMBER,
            Self::Boolean => wire::BOOLEAN,
            Self::String => wire::STRING,
            Self::Object => wire::OBJECT,
            Self::Movieclip => wire::MOVIECLIP,
            Self::Null => wire::NULL,
            Self::Undefined => wire::UNDEFINED,
            Self::Reference => wire::REFERENCE,
            Self::EcmaArray => wire::ECMA_ARRAY,
            Self::ObjectEnd => wire::OBJECT_END,
            Self::StrictArray => wire::STRICT_ARRAY,
            Self::Date => wire::DATE,
            Self::LongString => wire::LONG_STRING,
            Self::Unsupported => wire::UNSUPPORTED,
            Self::Recordset => wire::RECORDSET,
            Self::XmlDocument => wire::XML_DOCUMENT,
            Self::TypedObject => wire::TYPED_OBJECT,
            Self::AvmPlusObject => wire::AVMPLUS_OBJECT,
            Self::Unknown(id) => id,
        }
    }

    /// Parse a wire byte into a [`Marker`].
    pub fn from_wire_id(id: u8) -> Self {
        match id {
            wire::NUMBER => Self::Number,
            wire::BOOLEAN => Self::Boolean,
            wire::STRING => Self::String,
            wire::OBJECT => Self::Object,
            wire::MOVIECLIP => Self::Movieclip,
            wire::NULL => Self::Null,
            wire::UNDEFINED => Self::Undefined,
            wire::REFERENCE => Self::Reference,
            wire::ECMA_ARRAY => Self::EcmaArray,
            wire::OBJECT_END => Self::ObjectEnd,
            wire::STRICT_ARRAY => Self::StrictArray,
            wire::DATE => Self::Date,
            wire::LONG_STRING => Self::LongString,
            wire::UNSUPPORTED => Self::Unsupported,
            wire::RECORDSET => Self::Recordset,
            wire::XML_DOCUMENT => Self::XmlDocument,
            wire::TYPED_OBJECT => Self::TypedObject,
            wire::AVMPLUS_OBJECT => Self::AvmPlusObject,
            other => Self::Unknown(other),
        }
    }

    /// True for markers whose payload is a property list. These are the
    /// values that get a slot in the reference table.
    pub fn is_keyed_container(self) -> bool {
        matches!(self, Self::Object | Self::EcmaArray | Self::TypedObject)
    }

    /// Uppercase label used by the tree renderer and the CLI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Object => "OBJECT",
            Self::Movieclip => "MOVIECLIP",
            Self::Null => "NULL",
            Self::Undefined => "UNDEFINED",
            Self::Reference => "REFERENCE",
            Self::EcmaArray => "ECMA_ARRAY",
            Self::ObjectEnd => "OBJECT_END",
            Self::StrictArray => "STRICT_ARRAY",
            Self::Date => "DATE",
            Self::LongString => "LONG_STRING",
            Self::Unsupported => "UNSUPPORTED",
            Self::Recordset => "RECORDSET",
            Self::XmlDocument => "XML_DOCUMENT",
            Self::TypedObject => "TYPED_OBJECT",
            Self::AvmPlusObject => "AVMPLUS_OBJECT",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}
