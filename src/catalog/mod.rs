//! # Book Catalog Module
//!
//! This module turns a book catalog XML document into [`Book`] values by
//! streaming it through a coordinator parser that hands dedicated document
//! sections off to specialised sub-parsers.
//!
//! ## Design Goals
//!
//! - **Streaming**: Process catalogs of any length without buffering the document
//! - **Single pass**: Every byte of input is visited exactly once
//! - **Partial results**: Books finalized before a malformed region survive it
//! - **Composable**: Section parsers own their grammar and report back on completion
//!
//! ## Catalog Structure
//!
//! ```text
//! books
//! └── book* (many)
//!     ├── title
//!     ├── publisher
//!     ├── publication (year/month/day attributes)
//!     ├── overview (CDATA)
//!     ├── authors
//!     │   └── author*
//!     │       ├── name
//!     │       └── surname
//!     └── buy_links
//!         └── link* (provider attribute, CDATA URI)
//! ```

mod models;
mod parser;

pub use models::{Author, Book, Link, PublicationDate};
pub use parser::{BookParser, DEFAULT_INPUT_BUFFER_SIZE};
