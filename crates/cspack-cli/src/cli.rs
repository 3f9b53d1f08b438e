//! CLI argument parsing using clap.
//!
//! There are no subcommands: running `cspack` with no arguments packs the
//! current directory into the default archive.

use clap::Parser;
use std::path::PathBuf;

/// Default archive filename, written into the packed directory.
pub const DEFAULT_ARCHIVE_NAME: &str = "cryptoscalp_project.zip";

#[derive(Parser)]
#[command(name = "cspack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output archive file path (default: cryptoscalp_project.zip)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory to pack (default: current directory)
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Additional exclude pattern (glob, can be repeated)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Compression level (0-9; 0 stores entries uncompressed)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression_level: Option<u8>,

    /// Follow symbolic links instead of skipping them
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Skip files larger than this size (supports K, M, G, T suffixes)
    #[arg(long, value_name = "SIZE", value_parser = parse_byte_size)]
    pub max_file_size: Option<u64>,

    /// Show packing statistics after completion
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}

/// Parse byte size with optional suffix (K, M, G, T)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('T') {
        (stripped, 1024_u64.pow(4))
    } else if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
}
