//! The reference decoding scenarios, byte for byte, plus the reference
//! table behaviours they build on.

use amf_decoder::{AmfParser, DecodeError};
use amf_tests::{Fixture, nested_refs};
use amf_types::{Marker, Payload, Value};
use amf_wire::marker;

fn num(n: f64) -> Value {
    Value::new(Marker::Number, Payload::Number(n))
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
#[allow(clippy::approx_constant)]
fn scenario_a_number() {
    let mut bytes = vec![0x00];
    bytes.extend_from_slice(&3.14f64.to_be_bytes());

    let parsed = AmfParser::parse_slice(&bytes).unwrap();
    assert_eq!(parsed.value, num(3.14));
    assert_eq!(parsed.bytes_read, 9);
}

#[test]
fn scenario_b_string() {
    let bytes = [0x02, 0x00, 0x05, b'h', b'e', b'l', b'l', b'o'];

    let parsed = AmfParser::parse_slice(&bytes).unwrap();
    assert_eq!(
        parsed.value,
        Value::new(Marker::String, Payload::String("hello".into()))
    );
    assert_eq!(parsed.bytes_read, 8);
}

#[test]
fn scenario_c_object() {
    let mut bytes = vec![0x03, 0x00, 0x01, b'a', 0x00];
    bytes.extend_from_slice(&1.0f64.to_be_bytes());
    bytes.extend_from_slice(&[0x00, 0x00, 0x09]);

    let parsed = AmfParser::parse_slice(&bytes).unwrap();
    assert_eq!(
        parsed.value,
        Value::new(
            Marker::Object,
            Payload::Properties(vec![num(1.0).with_name("a")])
        )
    );
    assert_eq!(parsed.bytes_read, 16);
}

#[test]
fn scenario_d_dangling_reference() {
    let failure = AmfParser::parse_slice(&[0x07, 0x00, 0x00]).unwrap_err();
    assert!(matches!(
        failure.error(),
        DecodeError::InvalidReference { index: 0, len: 0 }
    ));
    assert_eq!(failure.bytes_read, 3);
}

// ── References ────────────────────────────────────────────────────────────────

#[test]
fn backreference_payload_is_deep_equal() {
    let parsed = AmfParser::parse_slice(&nested_refs()).unwrap();
    let a = parsed.value.property("a").unwrap();
    let b = parsed.value.property("b").unwrap();
    assert_eq!(b.marker, a.marker);
    assert_eq!(b.payload, a.payload);
    assert_eq!(b.name(), Some("b"));
}

#[test]
fn no_reference_marker_survives() {
    fn walk(value: &Value) {
        assert_ne!(value.marker, Marker::Reference);
        for child in value.elements().into_iter().chain(value.properties()).flatten() {
            walk(child);
        }
    }

    let parsed = AmfParser::parse_slice(&nested_refs()).unwrap();
    walk(&parsed.value);
}

#[test]
fn typed_object_in_slot_reports_class_name() {
    let parsed = AmfParser::parse_slice(&nested_refs()).unwrap();
    let props = parsed.value.properties().unwrap();
    assert_eq!(props[2].marker, Marker::TypedObject);
    assert_eq!(props[2].name(), Some("Point"));
    assert!(parsed.value.property("c").is_none());
}

#[test]
fn reference_inside_strict_array() {
    // { first: { k: "v" }, list: STRICT_ARRAY<REFERENCE> [0, 0] }
    let bytes = Fixture::new()
        .object_start()
        .key("first")
        .object_start()
        .key("k")
        .string("v")
        .object_end()
        .key("list")
        .strict_array_start(2, marker::REFERENCE)
        .u16(0)
        .u16(0)
        .object_end()
        .build();

    let parsed = AmfParser::parse_slice(&bytes).unwrap();
    let first = parsed.value.property("first").unwrap();
    let list = parsed.value.property("list").unwrap().elements().unwrap();
    assert_eq!(list.len(), 2);
    for item in list {
        assert_eq!(item.marker, Marker::Object);
        assert_eq!(item.name(), None);
        assert_eq!(item.payload, first.payload);
    }
}

#[test]
fn ecma_array_registers_like_object() {
    // { arr: ECMA[ "0": null ], again: ref 0 }
    let bytes = Fixture::new()
        .object_start()
        .key("arr")
        .ecma_array_start(1)
        .key("0")
        .null()
        .object_end()
        .key("again")
        .reference(0)
        .object_end()
        .build();

    let parsed = AmfParser::parse_slice(&bytes).unwrap();
    let again = parsed.value.property("again").unwrap();
    assert_eq!(again.marker, Marker::EcmaArray);
    assert_eq!(again.properties().unwrap()[0].name(), Some("0"));
}

#[test]
fn reference_to_open_ancestor_fails() {
    let bytes = Fixture::new()
        .object_start()
        .key("child")
        .object_start()
        .key("parent")
        .reference(1)
        .object_end()
        .object_end()
        .build();

    let failure = AmfParser::parse_slice(&bytes).unwrap_err();
    assert!(matches!(
        failure.error(),
        DecodeError::InvalidReference { index: 1, len: 0 }
    ));
}

// ── Strings ───────────────────────────────────────────────────────────────────

#[test]
fn long_string_and_xml_share_decode_path() {
    let text = "x".repeat(70_000);
    let long = AmfParser::parse_slice(&Fixture::new().long_string(&text).build()).unwrap();
    assert_eq!(long.value.marker, Marker::LongString);
    assert_eq!(long.value.as_str().map(str::len), Some(70_000));

    let xml = AmfParser::parse_slice(&Fixture::new().xml("<a/>").build()).unwrap();
    assert_eq!(xml.value.marker, Marker::XmlDocument);
    assert_eq!(xml.value.as_str(), Some("<a/>"));
}

#[test]
fn utf8_multibyte_string() {
    let parsed = AmfParser::parse_slice(&Fixture::new().string("héllo ✓").build()).unwrap();
    assert_eq!(parsed.value.as_str(), Some("héllo ✓"));
}
