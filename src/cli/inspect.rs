use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use bookstream::catalog::{Book, BookParser};

/// Print a human-readable listing of a catalog file
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    info!("Parsing catalog: {}", file.display());
    let parser = BookParser::open(&file).context("Failed to open catalog file")?;

    println!("Book Catalog");
    println!("============");
    println!("File: {}", file.display());
    println!("Books: {}", parser.book_count());

    for book in parser.books() {
        println!();
        print_book(book);
    }

    Ok(())
}

fn print_book(book: &Book) {
    println!("{}", book.title);

    if !book.publisher.is_empty() {
        println!("  Publisher: {}", book.publisher);
    }
    if let Some(date) = book.publication_date {
        println!("  Published: {}", date);
    }
    if !book.overview.is_empty() {
        println!("  Overview: {}", book.overview);
    }

    if let Some(authors) = book.authors.as_deref() {
        for author in authors {
            println!("  by {}", author.full_name());
        }
    }

    if let Some(links) = book.links.as_deref() {
        println!("  Available at:");
        for link in links {
            match link.book_url() {
                Some(url) => println!("    {}: {}", link.provider, url),
                None => println!("    {}: no link available", link.provider),
            }
        }
    }
}
