//! # bookstream - Streaming Book Catalog Parsing
//!
//! `bookstream` turns book catalog XML documents into typed [`catalog::Book`]
//! values in a single forward pass, without ever holding the document itself
//! in memory.
//!
//! ## Key Features
//!
//! - **Delegating parser**: A coordinator parses book records and hands the
//!   event stream to dedicated sub-parsers for the author and purchase link
//!   sections, which hand it back when their section closes.
//!
//! - **Bounded memory**: Input is tokenized incrementally; memory use scales
//!   with the accumulated results, not with document size.
//!
//! - **Partial results**: A malformed region stops parsing but keeps every
//!   book finalized before it, so callers always get the readable prefix.
//!
//! - **Typed model**: Books, authors, publication dates and purchase links
//!   come back as plain data types that serialize cleanly to JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use bookstream::catalog::BookParser;
//!
//! let document = br#"<books>
//!   <book>
//!     <title>Dune</title>
//!     <publisher>Chilton Books</publisher>
//!     <publication year="1965" month="8" day="1"/>
//!   </book>
//! </books>"#;
//!
//! let parser = BookParser::parse(document);
//! assert_eq!(parser.book_count(), 1);
//!
//! let book = &parser.books()[0];
//! assert_eq!(book.title, "Dune");
//! assert_eq!(book.publication_date.map(|d| d.year), Some(1965));
//! ```
//!
//! ## Catalog Format
//!
//! | Element | Captured as | Notes |
//! |---------|-------------|-------|
//! | `title` | [`catalog::Book::title`] | character data, chunks concatenated |
//! | `publisher` | [`catalog::Book::publisher`] | character data |
//! | `publication` | [`catalog::Book::publication_date`] | `year`/`month`/`day` attributes, all three required |
//! | `overview` | [`catalog::Book::overview`] | CDATA block |
//! | `name` / `surname` | [`catalog::Author`] | character data, inside `authors/author` |
//! | `link` | [`catalog::Link`] | `provider` attribute plus CDATA URI, inside `buy_links` |
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`catalog`]: Book data model and the delegating catalog parser
//! - [`sax`]: Push-based XML event stream and the sink trait parsers implement

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod sax;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::catalog::{Author, Book, BookParser, Link, PublicationDate};
    pub use crate::sax::{EventSink, EventSource, Flow, SaxError, XmlEvent};
}
