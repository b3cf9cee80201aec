//! Shared fixtures for the AMF integration tests, benches and the golden
//! generator.
//!
//! There is no encoder in the workspace, so test inputs are assembled byte
//! by byte with [`Fixture`]:
//!
//! ```rust
//! use amf_tests::Fixture;
//!
//! // { a: 1.0 }
//! let bytes = Fixture::new()
//!     .object_start()
//!     .key("a")
//!     .number(1.0)
//!     .object_end()
//!     .build();
//! assert_eq!(bytes.len(), 16);
//! ```
//!
//! Methods that emit a whole value (`number`, `string`, ...) write the
//! marker byte first. `key`, `utf8` and the raw integer helpers write bare
//! fields, for property keys, strict-array elements and packet framing.

use amf_wire::marker;

#[derive(Clone, Debug, Default)]
pub struct Fixture {
    bytes: Vec<u8>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    // ── Raw fields ────────────────────────────────────────────────────────

    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.bytes.push(v);
        self
    }

    pub fn u16(&mut self, v: u16) -> &mut Self {
        self.raw(&v.to_be_bytes())
    }

    pub fn u32(&mut self, v: u32) -> &mut Self {
        self.raw(&v.to_be_bytes())
    }

    pub fn f64(&mut self, v: f64) -> &mut Self {
        self.raw(&v.to_be_bytes())
    }

    /// u16 length + UTF-8, no marker.
    ///
    /// # Panics
    ///
    /// If `s` is longer than `u16::MAX` bytes.
    pub fn utf8(&mut self, s: &str) -> &mut Self {
        let len = u16::try_from(s.len()).expect("string too long for a u16 prefix");
        self.u16(len).raw(s.as_bytes())
    }

    /// u32 length + UTF-8, no marker.
    ///
    /// # Panics
    ///
    /// If `s` is longer than `u32::MAX` bytes.
    pub fn utf8_long(&mut self, s: &str) -> &mut Self {
        let len = u32::try_from(s.len()).expect("string too long for a u32 prefix");
        self.u32(len).raw(s.as_bytes())
    }

    /// A property key. Same encoding as [`utf8`](Self::utf8).
    pub fn key(&mut self, k: &str) -> &mut Self {
        self.utf8(k)
    }

    // ── Whole values ──────────────────────────────────────────────────────

    pub fn number(&mut self, n: f64) -> &mut Self {
        self.u8(marker::NUMBER).f64(n)
    }

    pub fn boolean(&mut self, b: bool) -> &mut Self {
        self.u8(marker::BOOLEAN).u8(u8::from(b))
    }

    pub fn string(&mut self, s: &str) -> &mut Self {
        self.u8(marker::STRING).utf8(s)
    }

    pub fn long_string(&mut self, s: &str) -> &mut Self {
        self.u8(marker::LONG_STRING).utf8_long(s)
    }

    pub fn xml(&mut self, s: &str) -> &mut Self {
        self.u8(marker::XML_DOCUMENT).utf8_long(s)
    }

    pub fn null(&mut self) -> &mut Self {
        self.u8(marker::NULL)
    }

    pub fn undefined(&mut self) -> &mut Self {
        self.u8(marker::UNDEFINED)
    }

    pub fn date(&mut self, millis: f64, timezone: u16) -> &mut Self {
        self.u8(marker::DATE).u16(timezone).f64(millis)
    }

    pub fn reference(&mut self, index: u16) -> &mut Self {
        self.u8(marker::REFERENCE).u16(index)
    }

    // ── Containers ────────────────────────────────────────────────────────

    pub fn object_start(&mut self) -> &mut Self {
        self.u8(marker::OBJECT)
    }

    pub fn ecma_array_start(&mut self, declared_count: u32) -> &mut Self {
        self.u8(marker::ECMA_ARRAY).u32(declared_count)
    }

    pub fn typed_object_start(&mut self, class_name: &str) -> &mut Self {
        self.u8(marker::TYPED_OBJECT).utf8(class_name)
    }

    /// Empty key + OBJECT_END.
    pub fn object_end(&mut self) -> &mut Self {
        self.raw(&marker::OBJECT_END_SENTINEL)
    }

    /// STRICT_ARRAY marker, count and the shared element marker. Element
    /// payloads follow without their own markers.
    pub fn strict_array_start(&mut self, count: u32, element_marker: u8) -> &mut Self {
        self.u8(marker::STRICT_ARRAY).u32(count).u8(element_marker)
    }

    // ── Packet framing ────────────────────────────────────────────────────

    /// Name, must-understand flag and length of a packet header. The
    /// header value follows.
    pub fn packet_header(
        &mut self,
        name: &str,
        must_understand: bool,
        length: Option<u32>,
    ) -> &mut Self {
        self.utf8(name)
            .u8(u8::from(must_understand))
            .u32(length.unwrap_or(marker::UNKNOWN_LENGTH))
    }

    /// Target, response and length of a packet message. The body follows.
    pub fn packet_message(
        &mut self,
        target: &str,
        response: &str,
        length: Option<u32>,
    ) -> &mut Self {
        self.utf8(target)
            .utf8(response)
            .u32(length.unwrap_or(marker::UNKNOWN_LENGTH))
    }
}

/// `{ a: 1.0 }`, the smallest non-empty object.
pub fn simple_object() -> Vec<u8> {
    Fixture::new()
        .object_start()
        .key("a")
        .number(1.0)
        .object_end()
        .build()
}

/// An object holding a nested object, a backreference to it, and a typed
/// object:
///
/// ```text
/// { a: { x: 1 }, b: ref 0, c: Point { x: 1, y: 2 } }
/// ```
pub fn nested_refs() -> Vec<u8> {
    Fixture::new()
        .object_start()
        .key("a")
        .object_start()
        .key("x")
        .number(1.0)
        .object_end()
        .key("b")
        .reference(0)
        .key("c")
        .typed_object_start("Point")
        .key("x")
        .number(1.0)
        .key("y")
        .number(2.0)
        .object_end()
        .object_end()
        .build()
}

/// A version-0 packet with one header and one message.
///
/// ```text
/// header  "auth" must-understand, length unknown, STRING "token"
/// message "svc.echo" → "/1", length 10, STRICT_ARRAY [ STRING "hi" ]
/// ```
pub fn echo_packet() -> Vec<u8> {
    Fixture::new()
        .u16(0)
        .u16(1)
        .packet_header("auth", true, None)
        .string("token")
        .u16(1)
        .packet_message("svc.echo", "/1", Some(10))
        .strict_array_start(1, marker::STRING)
        .utf8("hi")
        .build()
}
