#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: NetConnection packet decoder.
//
// Exercises header/message framing, the unknown-length sentinel, and one
// parser session per embedded value.
fuzz_target!(|data: &[u8]| {
    let _ = amf_decoder::PacketDecoder::decode(data);
});
