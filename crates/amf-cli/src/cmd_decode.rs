/// Implementation of `amf decode`.
///
/// Decodes one AMF0 value and writes it as JSON to stdout or `-o <file>`.
/// Each value serializes as `{ "marker", "name"?, "payload": { "kind",
/// "value"? } }`:
///
/// ```json
/// {
///   "marker": "object",
///   "payload": {
///     "kind": "properties",
///     "value": [
///       { "marker": "number", "name": "a",
///         "payload": { "kind": "number", "value": 1.0 } }
///     ]
///   }
/// }
/// ```
use std::fs;

use amf_decoder::{AmfParser, DecoderConfig};
use anyhow::{Context, Result};
use tracing::info;

use crate::DecodeArgs;
use crate::input::{display_name, read_input};

/// Run the `amf decode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or decoded, or the output
/// file cannot be written.
pub fn run(args: &DecodeArgs, config: &DecoderConfig) -> Result<()> {
    let bytes = read_input(&args.file)?;

    let parsed = AmfParser::parse_with_config(bytes.as_slice(), config)
        .with_context(|| format!("failed to decode {}", display_name(&args.file)))?;

    let json = if args.compact {
        serde_json::to_string(&parsed.value)
    } else {
        serde_json::to_string_pretty(&parsed.value)
    }
    .context("failed to serialize value")?;

    if let Some(path) = &args.output {
        fs::write(path, format!("{json}\n"))
            .with_context(|| format!("cannot write {}", path.display()))?;
        info!(path = %path.display(), bytes_read = parsed.bytes_read, "wrote JSON");
    } else {
        println!("{json}");
    }
    Ok(())
}
