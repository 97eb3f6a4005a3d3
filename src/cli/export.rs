use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use bookstream::catalog::BookParser;

/// Export a catalog file as pretty-printed JSON
pub fn run(file: PathBuf, output: Option<PathBuf>) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    info!("Parsing catalog: {}", file.display());
    let books = BookParser::open(&file)
        .context("Failed to open catalog file")?
        .into_books();
    info!("Parsed {} books", books.len());

    let json = serde_json::to_string_pretty(&books).context("Failed to serialize catalog")?;

    match output {
        Some(path) => {
            std::fs::write(&path, json).context("Failed to write output file")?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
