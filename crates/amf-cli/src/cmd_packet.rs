/// Implementation of `amf packet`.
///
/// Decodes a NetConnection packet and prints its headers and messages as a
/// tree, or as JSON with `--json`.
///
/// # Output format
///
/// ```text
/// PACKET v0 (1 header, 1 message)
/// header "auth" must_understand=true length=unknown
///   STRING "token"
/// message target="svc.echo" response="/1" length=10
///   STRICT_ARRAY [1]
///     STRING "hi"
/// ---
/// 52 bytes decoded
/// ```
use amf_decoder::{DecoderConfig, PacketDecoder};
use anyhow::{Context, Result};

use crate::PacketArgs;
use crate::input::{display_name, read_input};

/// Run the `amf packet` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a well-formed
/// packet.
pub fn run(args: &PacketArgs, config: &DecoderConfig) -> Result<()> {
    let bytes = read_input(&args.file)?;

    let decoded = PacketDecoder::decode_with_config(bytes.as_slice(), config)
        .with_context(|| format!("failed to decode packet {}", display_name(&args.file)))?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&decoded.packet).context("failed to serialize packet")?;
        println!("{json}");
    } else {
        println!("{}", decoded.packet);
        println!("---");
        println!("{} bytes decoded", decoded.bytes_read);
    }

    if decoded.bytes_read < bytes.len() {
        tracing::warn!(
            trailing = bytes.len() - decoded.bytes_read,
            "bytes left after packet"
        );
    }
    Ok(())
}
