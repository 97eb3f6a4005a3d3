use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod export;
mod inspect;

/// bookstream - Streaming Book Catalog Parser
#[derive(Parser)]
#[command(name = "bookstream")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a human-readable listing of a catalog file
    Inspect {
        /// Input catalog XML file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Export a catalog file as pretty-printed JSON
    Export {
        /// Input catalog XML file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output JSON file path (stdout when omitted)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Inspect { file } => inspect::run(file),
        Commands::Export { file, output } => export::run(file, output),
    }
}
