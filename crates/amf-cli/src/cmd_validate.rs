/// Implementation of `amf validate`.
///
/// Decodes one AMF0 value and reports either a series of success
/// checkmarks (`✓`) or a diagnostic failure line (`✗`). A value that
/// decodes but leaves bytes unread is a failure: a standalone payload file
/// should hold exactly one value.
///
/// # Success output
///
/// ```text
/// ✓ Value: OBJECT with 3 properties
/// ✓ Length: 41 bytes, no trailing data
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error at byte 3: invalid reference 0: reference table holds 0 entries
/// ```
use amf_decoder::{AmfParser, DecodeError, DecoderConfig};
use amf_types::{Payload, Value};
use anyhow::{Result, anyhow};

use crate::ValidateArgs;
use crate::input::read_input;

/// Run the `amf validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, does not decode, or has
/// trailing bytes after the value.
pub fn run(args: &ValidateArgs, config: &DecoderConfig) -> Result<()> {
    let bytes = read_input(&args.file)?;

    match AmfParser::parse_with_config(bytes.as_slice(), config) {
        Ok(parsed) => {
            println!("✓ Value: {}", value_summary(&parsed.value));
            let trailing = bytes.len() - parsed.bytes_read;
            if trailing > 0 {
                println!(
                    "✗ Length: {} bytes decoded, {trailing} trailing byte{}",
                    parsed.bytes_read,
                    if trailing == 1 { "" } else { "s" }
                );
                return Err(anyhow!("validation failed"));
            }
            println!("✓ Length: {} bytes, no trailing data", parsed.bytes_read);
            Ok(())
        }

        Err(failure) => {
            println!(
                "✗ Error at byte {}: {}",
                failure.bytes_read,
                decode_error_diagnostic(failure.error())
            );
            Err(anyhow!("validation failed"))
        }
    }
}

fn value_summary(value: &Value) -> String {
    let label = value.marker.label();
    match &value.payload {
        Payload::Properties(props) => format!(
            "{label} with {} propert{}",
            props.len(),
            if props.len() == 1 { "y" } else { "ies" }
        ),
        Payload::Elements(items) => format!(
            "{label} with {} element{}",
            items.len(),
            if items.len() == 1 { "" } else { "s" }
        ),
        _ => label.to_string(),
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Human-readable diagnostic for a `DecodeError`.
///
/// ```text
/// ┌────────────────────┬──────────────────────────────────────────────┐
/// │ DecodeError        │ Diagnostic                                   │
/// ├────────────────────┼──────────────────────────────────────────────┤
/// │ ShortRead          │ "truncated input: <wire error>"              │
/// │ UnsupportedVersion │ "AMF3 payload (AVM+ marker 0x11)"            │
/// │ others             │ "<error Display>"                            │
/// └────────────────────┴──────────────────────────────────────────────┘
/// ```
fn decode_error_diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::ShortRead(inner) => format!("truncated input: {inner}"),
        DecodeError::UnsupportedVersion => "AMF3 payload (AVM+ marker 0x11)".to_string(),
        other => other.to_string(),
    }
}
