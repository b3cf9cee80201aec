#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: single-value parser entry point.
//
// Calls `AmfParser::parse_slice(data)` on arbitrary input bytes.
// Catches bugs in:
// - Marker dispatch, including unknown and reserved markers
// - Length-prefixed string reads and UTF-8 validation
// - Property list termination
// - Reference table bounds
// - Strict-array counts and nesting depth limits
fuzz_target!(|data: &[u8]| {
    match amf_decoder::AmfParser::parse_slice(data) {
        Ok(parsed) => assert!(parsed.bytes_read <= data.len()),
        Err(failure) => assert!(failure.bytes_read <= data.len()),
    }
});
