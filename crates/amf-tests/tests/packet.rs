//! NetConnection packet decoding: envelope framing around AMF0 values.

use amf_decoder::{DecodeError, DecoderConfig, PacketDecoder};
use amf_tests::{Fixture, echo_packet};
use amf_types::Marker;
use amf_wire::marker;

#[test]
fn echo_packet_fields() {
    let bytes = echo_packet();
    let decoded = PacketDecoder::decode(bytes.as_slice()).unwrap();
    let packet = &decoded.packet;

    assert_eq!(packet.version, 0);
    assert_eq!(packet.header_count(), 1);
    assert_eq!(packet.message_count(), 1);

    let header = packet.header("auth").unwrap();
    assert!(header.must_understand);
    assert_eq!(header.length, None);
    assert_eq!(header.value.as_str(), Some("token"));

    let message = &packet.messages[0];
    assert_eq!(message.target_uri, "svc.echo");
    assert_eq!(message.response_uri, "/1");
    assert_eq!(message.length, Some(10));
    let items = message.body.elements().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].marker, Marker::String);
    assert_eq!(items[0].as_str(), Some("hi"));

    assert_eq!(decoded.bytes_read, bytes.len());
}

#[test]
fn amf3_version_is_recorded_not_validated() {
    let bytes = Fixture::new().u16(3).u16(0).u16(0).build();
    let decoded = PacketDecoder::decode(bytes.as_slice()).unwrap();
    assert_eq!(decoded.packet.version, 3);
}

#[test]
fn declared_lengths_are_not_enforced() {
    // message claims 999 bytes, body is a single NULL
    let bytes = Fixture::new()
        .u16(0)
        .u16(0)
        .u16(1)
        .packet_message("t", "r", Some(999))
        .null()
        .build();
    let decoded = PacketDecoder::decode(bytes.as_slice()).unwrap();
    assert_eq!(decoded.packet.messages[0].length, Some(999));
    assert_eq!(decoded.bytes_read, bytes.len());
}

#[test]
fn header_references_do_not_leak_into_messages() {
    // header value registers an object at index 0; the message body then
    // references index 0 in its own, empty table
    let bytes = Fixture::new()
        .u16(0)
        .u16(1)
        .packet_header("h", false, None)
        .object_start()
        .object_end()
        .u16(1)
        .packet_message("t", "r", None)
        .reference(0)
        .build();

    let failure = PacketDecoder::decode(bytes.as_slice()).unwrap_err();
    assert!(matches!(
        failure.error(),
        DecodeError::InvalidReference { index: 0, len: 0 }
    ));
    assert_eq!(failure.bytes_read, bytes.len());
}

#[test]
fn references_resolve_within_one_body() {
    let bytes = Fixture::new()
        .u16(0)
        .u16(0)
        .u16(1)
        .packet_message("t", "r", None)
        .strict_array_start(2, marker::OBJECT)
        .key("k")
        .boolean(true)
        .object_end()
        .key("again")
        .reference(0)
        .object_end()
        .build();

    let decoded = PacketDecoder::decode(bytes.as_slice()).unwrap();
    let items = decoded.packet.messages[0].body.elements().unwrap();
    let again = items[1].property("again").unwrap();
    assert_eq!(again.payload, items[0].payload);
}

#[test]
fn truncated_header_value() {
    let mut bytes = echo_packet();
    bytes.truncate(18);
    let failure = PacketDecoder::decode(bytes.as_slice()).unwrap_err();
    assert!(matches!(failure.error(), DecodeError::ShortRead(_)));
    assert_eq!(failure.bytes_read, 18);
}

#[test]
fn strict_policy_reaches_header_values() {
    let bytes = Fixture::new()
        .u16(0)
        .u16(1)
        .packet_header("h", false, Some(1))
        .u8(0x42)
        .u16(0)
        .build();

    assert!(PacketDecoder::decode(bytes.as_slice()).is_ok());
    let failure = PacketDecoder::decode_with_config(bytes.as_slice(), &DecoderConfig::strict())
        .unwrap_err();
    assert!(matches!(failure.error(), DecodeError::MalformedStream { .. }));
}

#[test]
fn packet_serializes_to_json() {
    let decoded = PacketDecoder::decode(echo_packet().as_slice()).unwrap();
    let json = serde_json::to_value(&decoded.packet).unwrap();
    assert_eq!(json["version"], 0);
    assert_eq!(json["headers"][0]["name"], "auth");
    assert_eq!(json["headers"][0]["length"], serde_json::Value::Null);
    assert_eq!(json["messages"][0]["body"]["marker"], "strict_array");
}
