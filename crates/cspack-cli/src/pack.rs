//! Pack command implementation.

use crate::cli::Cli;
use crate::cli::DEFAULT_ARCHIVE_NAME;
use crate::error::convert_pack_error;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use cspack_core::PackConfig;
use std::path::PathBuf;

pub fn execute(args: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let root = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    // Default output stays a bare relative name so the completion line
    // reads the same from any working directory.
    let output = args.output.clone().unwrap_or_else(|| match &args.directory {
        Some(dir) => dir.join(DEFAULT_ARCHIVE_NAME),
        None => PathBuf::from(DEFAULT_ARCHIVE_NAME),
    });

    let mut config = PackConfig::default()
        .with_follow_symlinks(args.follow_symlinks)
        .with_max_file_size(args.max_file_size)
        .with_extra_excludes(args.exclude.iter().cloned());
    if let Some(level) = args.compression_level {
        config = config.with_compression_level(level);
    }

    formatter.format_start();

    let result = if !args.quiet && !args.json && CliProgress::should_show() {
        let mut progress = CliProgress::new("Packing");
        cspack_core::create_zip_with_progress(&output, &root, &config, &mut progress)
    } else {
        cspack_core::create_zip(&output, &root, &config)
    };

    let report = result.map_err(|e| convert_pack_error(e, &root, &output))?;

    formatter.format_creation_result(&output, &report)
}
