/// AMF command-line tool: inspect, validate and convert AMF0 payloads and
/// NetConnection packets.
///
/// # Command overview
///
/// ```text
/// amf <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print the decoded value tree of an AMF0 payload
///   validate   Check that a file holds exactly one well-formed value
///   decode     Emit the decoded value tree as JSON
///   packet     Decode a NetConnection packet
///   help       Print help information
///
/// Global options:
///   -v, --verbose        Debug logging on stderr
///   --strict             Reject unrecognized type markers
///   --max-depth <N>      Nesting limit for objects and arrays
///   -h, --help           Print help
///   -V, --version        Print version
/// ```
///
/// Every command reads from a file path, or from stdin when the path is `-`.
///
/// # Exit codes
///
/// | Code | Meaning                                  |
/// |------|------------------------------------------|
/// | 0    | Success                                  |
/// | 1    | Error (I/O failure, malformed input ...) |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use amf_decoder::config::DEFAULT_MAX_DEPTH;
use amf_decoder::{DecoderConfig, UnknownMarkerPolicy};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_decode;
mod cmd_inspect;
mod cmd_packet;
mod cmd_validate;
mod input;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The AMF0 command-line tool.
#[derive(Parser)]
#[command(name = "amf", version, about = "AMF0 decoder CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overridden by `RUST_LOG` when set).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Fail on unrecognized type markers instead of decoding them as empty
    /// values.
    #[arg(long, global = true)]
    strict: bool,

    /// Maximum nesting depth of objects and arrays.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Cli {
    fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig {
            unknown_markers: if self.strict {
                UnknownMarkerPolicy::Reject
            } else {
                UnknownMarkerPolicy::Lenient
            },
            max_depth: self.max_depth,
            ..DecoderConfig::default()
        }
    }
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print the decoded value tree of an AMF0 payload.
    Inspect(InspectArgs),
    /// Check that a file holds exactly one well-formed AMF0 value.
    Validate(ValidateArgs),
    /// Emit the decoded value tree as JSON.
    Decode(DecodeArgs),
    /// Decode a NetConnection packet (headers and messages).
    Packet(PacketArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `amf inspect`.
///
/// ```text
/// ┌────────────┬───────────────────────────────────────────────────────┐
/// │ Flag       │ Effect                                                │
/// ├────────────┼───────────────────────────────────────────────────────┤
/// │ --show-hex │ Hex dump of the bytes the value occupied              │
/// └────────────┴───────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// AMF0 file to inspect, or `-` for stdin.
    pub file: PathBuf,

    /// Show a 16-byte-per-line hex dump of the decoded bytes.
    #[arg(long)]
    pub show_hex: bool,
}

/// Arguments for `amf validate`.
///
/// Decodes one value and requires that it spans the whole input. Exits
/// with code 0 on success and 1 on any problem.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// AMF0 file to validate, or `-` for stdin.
    pub file: PathBuf,
}

/// Arguments for `amf decode`.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// AMF0 file to decode, or `-` for stdin.
    pub file: PathBuf,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Single-line JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `amf packet`.
#[derive(clap::Args)]
pub struct PacketArgs {
    /// Packet file to decode, or `-` for stdin.
    pub file: PathBuf,

    /// Print the packet as JSON instead of a tree.
    #[arg(long)]
    pub json: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.decoder_config();
    let result = match &cli.command {
        Commands::Inspect(args) => cmd_inspect::run(args, &config),
        Commands::Validate(args) => cmd_validate::run(args, &config),
        Commands::Decode(args) => cmd_decode::run(args, &config),
        Commands::Packet(args) => cmd_packet::run(args, &config),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "amf=debug,amf_decoder=debug"
    } else {
        "amf=info,amf_decoder=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
