//! # bookstream
//!
//! A command-line tool for inspecting and exporting book catalog XML files.
//!
//! ## Usage
//!
//! ```bash
//! # Print a human-readable listing of a catalog
//! bookstream inspect books.xml
//!
//! # Export a catalog as pretty-printed JSON
//! bookstream export books.xml -o books.json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
