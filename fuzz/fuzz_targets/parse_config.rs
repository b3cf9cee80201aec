#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use amf_decoder::{AmfParser, DecoderConfig, UnknownMarkerPolicy};
use amf_wire::ByteSource;

#[derive(Debug, Arbitrary)]
struct Input {
    strict: bool,
    max_depth: u8,
    max_array_len: u16,
    max_values: u16,
    data: Vec<u8>,
}

// Fuzz target: parser under arbitrary limits and unknown-marker policy.
//
// Also decodes values back to back from one source, the way the packet
// decoder drives the parser, and checks the byte counter never runs past
// the input.
fuzz_target!(|input: Input| {
    let config = DecoderConfig {
        unknown_markers: if input.strict {
            UnknownMarkerPolicy::Reject
        } else {
            UnknownMarkerPolicy::Lenient
        },
        max_depth: usize::from(input.max_depth),
        max_array_len: usize::from(input.max_array_len),
        max_values: usize::from(input.max_values),
    };

    let mut source = ByteSource::new(input.data.as_slice());
    while AmfParser::parse_from_source(&mut source, &config).is_ok() {
        assert!(source.consumed() <= input.data.len());
    }
    assert!(source.consumed() <= input.data.len());
});
