// Raw marker bytes as they appear on the wire. `amf-types` wraps these in
// the `Marker` enum; the constants live here so the byte-level code (the
// object-end check, the packet length sentinel) does not need the type
// layer.

/// Known AMF0 type markers.
///
/// ```text
/// ┌──────┬────────────────┬──────────────────────────────────────────┐
/// │ Byte │ Marker         │ Payload                                  │
/// ├──────┼────────────────┼──────────────────────────────────────────┤
/// │ 0x00 │ NUMBER         │ 8-byte big-endian IEEE-754 double        │
/// │ 0x01 │ BOOLEAN        │ 1 byte, non-zero is true                 │
/// │ 0x02 │ STRING         │ u16 length + UTF-8                       │
/// │ 0x03 │ OBJECT         │ property list                            │
/// │ 0x04 │ MOVIECLIP      │ reserved, not supported                  │
/// │ 0x05 │ NULL           │ none                                     │
/// │ 0x06 │ UNDEFINED      │ none                                     │
/// │ 0x07 │ REFERENCE      │ u16 reference table index                │
/// │ 0x08 │ ECMA_ARRAY     │ u32 count (ignored) + property list      │
/// │ 0x09 │ OBJECT_END     │ terminates a property list               │
/// │ 0x0A │ STRICT_ARRAY   │ u32 count + shared marker + values       │
/// │ 0x0B │ DATE           │ u16 timezone (ignored) + double millis   │
/// │ 0x0C │ LONG_STRING    │ u32 length + UTF-8                       │
/// │ 0x0D │ UNSUPPORTED    │ not supported                            │
/// │ 0x0E │ RECORDSET      │ reserved, not supported                  │
/// │ 0x0F │ XML_DOCUMENT   │ u32 length + UTF-8                       │
/// │ 0x10 │ TYPED_OBJECT   │ u16 class name + property list           │
/// │ 0x11 │ AVMPLUS_OBJECT │ switch to AMF3, not supported            │
/// └──────┴────────────────┴──────────────────────────────────────────┘
/// ```
pub const NUMBER: u8 = 0x00;
pub const BOOLEAN: u8 = 0x01;
pub const STRING: u8 = 0x02;
pub const OBJECT: u8 = 0x03;
pub const MOVIECLIP: u8 = 0x04;
pub const NULL: u8 = 0x05;
pub const UNDEFINED: u8 = 0x06;
pub const REFERENCE: u8 = 0x07;
pub const ECMA_ARRAY: u8 = 0x08;
pub const OBJECT_END: u8 = 0x09;
pub const STRICT_ARRAY: u8 = 0x0A;
pub const DATE: u8 = 0x0B;
pub const LONG_STRING: u8 = 0x0C;
pub const UNSUPPORTED: u8 = 0x0D;
pub const RECORDSET: u8 = 0x0E;
pub const XML_DOCUMENT: u8 = 0x0F;
pub const TYPED_OBJECT: u8 = 0x10;
pub const AVMPLUS_OBJECT: u8 = 0x11;

/// End of a property list: an empty u16-prefixed key followed by OBJECT_END.
pub const OBJECT_END_SENTINEL: [u8; 3] = [0x00, 0x00, OBJECT_END];

/// Packet header and message lengths use `(u32)-1` for "length unknown".
pub const UNKNOWN_LENGTH: u32 = u32::MAX;
