//! Conformance tests: golden fixture files decoded and rendered to insta
//! snapshots.
//!
//! Each test reads a committed binary fixture from
//! `tests/golden/<name>/payload.amf`, decodes it, renders the tree with the
//! `Display` impls from `amf-types`, and compares the text against
//! `tests/snapshots/conformance__<name>.snap`.
//!
//! The fixtures are written by `src/bin/generate_golden.rs`. A diff in a
//! snapshot signals either a deliberate rendering change (accept via
//! `cargo insta review`) or a decoding regression.

use std::path::Path;

use amf_decoder::{AmfParser, PacketDecoder};
use insta::assert_snapshot;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Read `tests/golden/<fixture>/payload.amf`.
fn golden_payload(fixture: &str) -> Vec<u8> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir
        .join("tests/golden")
        .join(fixture)
        .join("payload.amf");
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

/// Decode a single value, require that it spans the payload, render it.
fn render(fixture: &str) -> String {
    let payload = golden_payload(fixture);
    let parsed = AmfParser::parse_slice(&payload)
        .unwrap_or_else(|e| panic!("decode failed for {fixture}: {e:?}"));
    assert_eq!(parsed.bytes_read, payload.len(), "{fixture}: trailing bytes");
    parsed.value.to_string()
}

// ── Values ────────────────────────────────────────────────────────────────────

#[test]
fn number() {
    let output = render("number");
    assert_snapshot!("number", output);
}

#[test]
fn string() {
    let output = render("string");
    assert_snapshot!("string", output);
}

#[test]
fn simple_object() {
    let output = render("simple_object");
    assert_snapshot!("simple_object", output);
}

#[test]
fn nested_refs() {
    let output = render("nested_refs");
    assert_snapshot!("nested_refs", output);
}

#[test]
fn mixed_array() {
    let output = render("mixed_array");
    assert_snapshot!("mixed_array", output);
}

#[test]
fn strict_array() {
    let output = render("strict_array");
    assert_snapshot!("strict_array", output);
}

#[test]
fn date() {
    let output = render("date");
    assert_snapshot!("date", output);
}

// ── Packet ────────────────────────────────────────────────────────────────────

#[test]
fn packet() {
    let payload = golden_payload("packet");
    let decoded = PacketDecoder::decode(payload.as_slice())
        .unwrap_or_else(|e| panic!("packet decode failed: {e:?}"));
    assert_eq!(decoded.bytes_read, payload.len());
    let output = decoded.packet.to_string();
    assert_snapshot!("packet", output);
}
