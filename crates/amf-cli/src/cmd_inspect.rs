/// Implementation of `amf inspect`.
///
/// Decodes one AMF0 value and prints its tree, followed by a byte count.
///
/// # Output format
///
/// ```text
/// OBJECT {2}
///   name: STRING "alice"
///   scores: STRICT_ARRAY [2]
///     NUMBER 1
///     NUMBER 2.5
/// ---
/// 52 bytes decoded, 0 trailing
/// ```
use amf_decoder::{AmfParser, DecoderConfig};
use anyhow::{Context, Result};

use crate::InspectArgs;
use crate::input::{display_name, read_input};

/// Run the `amf inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or does not decode.
pub fn run(args: &InspectArgs, config: &DecoderConfig) -> Result<()> {
    let bytes = read_input(&args.file)?;

    let parsed = AmfParser::parse_with_config(bytes.as_slice(), config)
        .with_context(|| format!("failed to decode {}", display_name(&args.file)))?;

    println!("{}", parsed.value);
    println!("---");
    println!(
        "{} bytes decoded, {} trailing",
        parsed.bytes_read,
        bytes.len() - parsed.bytes_read
    );

    if args.show_hex {
        println!("Hex dump:");
        print!("{}", hex_dump(&bytes[..parsed.bytes_read]));
    }
    Ok(())
}

/// 16 bytes per line, offset-prefixed.
fn hex_dump(bytes: &[u8]) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    for (i, chunk) in bytes.chunks(16).enumerate() {
        let _ = write!(out, "  {:08x}:", i * 16);
        for b in chunk {
            let _ = write!(out, " {b:02x}");
        }
        out.push('\n');
    }
    out
}
