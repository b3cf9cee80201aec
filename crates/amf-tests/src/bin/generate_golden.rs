//! Golden fixture generator for the AMF conformance test suite.
//!
//! This binary creates all fixture files under `tests/golden/`. Run it
//! after changing any fixture definition to regenerate the committed
//! payloads. Snapshot files (`.snap`) are updated separately via `cargo
//! insta review` after running the conformance tests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p amf-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Directory                  | Contents                                     |
//! |----------------------------|----------------------------------------------|
//! | number                     | NUMBER 3.14                                  |
//! | string                     | STRING "hello"                               |
//! | simple_object              | `{ a: 1 }`                                   |
//! | nested_refs                | nested object, backreference, typed object   |
//! | mixed_array                | ECMA_ARRAY with string and boolean entries   |
//! | strict_array               | STRICT_ARRAY of three numbers                |
//! | date                       | DATE 1.7e12 ms, timezone 0                   |
//! | packet                     | one header, one message                      |
//! | edge_cases/unknown_marker  | lone 0x42 byte                               |
//! | edge_cases/trailing_data   | STRING "hello" + 2 extra bytes               |
//! | edge_cases/truncated       | `{ a: 1 }` cut inside the number             |

#![allow(clippy::pedantic)]
#![allow(clippy::approx_constant)]

use std::path::Path;

use amf_tests::{Fixture, echo_packet, nested_refs, simple_object};
use amf_wire::marker;

fn main() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let golden_dir = manifest_dir.join("tests/golden");

    write_fixture(&golden_dir, "number", &Fixture::new().number(3.14).build());
    write_fixture(&golden_dir, "string", &Fixture::new().string("hello").build());
    write_fixture(&golden_dir, "simple_object", &simple_object());
    write_fixture(&golden_dir, "nested_refs", &nested_refs());
    write_fixture(
        &golden_dir,
        "mixed_array",
        &Fixture::new()
            .ecma_array_start(2)
            .key("0")
            .string("zero")
            .key("1")
            .boolean(true)
            .object_end()
            .build(),
    );
    write_fixture(
        &golden_dir,
        "strict_array",
        &Fixture::new()
            .strict_array_start(3, marker::NUMBER)
            .f64(1.0)
            .f64(2.0)
            .f64(3.0)
            .build(),
    );
    write_fixture(
        &golden_dir,
        "date",
        &Fixture::new().date(1_700_000_000_000.0, 0).build(),
    );
    write_fixture(&golden_dir, "packet", &echo_packet());

    generate_edge_cases(&golden_dir);

    println!("All golden fixtures written to {}", golden_dir.display());
}

fn generate_edge_cases(golden_dir: &Path) {
    let edge = golden_dir.join("edge_cases");

    write_fixture(&edge, "unknown_marker", &[0x42]);

    let mut trailing = Fixture::new().string("hello").build();
    trailing.extend_from_slice(&[0xDE, 0xAD]);
    write_fixture(&edge, "trailing_data", &trailing);

    let full = simple_object();
    write_fixture(&edge, "truncated", &full[..10]);
}

fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) {
    let fixture_dir = dir.join(name);
    std::fs::create_dir_all(&fixture_dir).unwrap();
    let path = fixture_dir.join("payload.amf");
    std::fs::write(&path, bytes).unwrap();
    println!("  {} ({} bytes)", path.display(), bytes.len());
}
