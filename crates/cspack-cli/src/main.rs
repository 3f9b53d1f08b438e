//! cspack - zips the CryptoScalp AI project directory for export.

mod cli;
mod error;
mod output;
mod pack;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let formatter = output::create_formatter(args.json, args.verbose, args.quiet);

    pack::execute(&args, &*formatter)
}
