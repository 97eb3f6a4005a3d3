//! Data models for the book catalog.
//!
//! These records are plain data: they are filled in incrementally by the
//! parser and carry no parsing state of their own.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// A single author of a book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Given name, accumulated from character data
    pub name: String,

    /// Family name, accumulated from character data
    pub surname: String,
}

impl Author {
    /// Full display name, `"name surname"` with a single separating space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// A purchase link for a book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Store name, taken from the `provider` attribute; empty when the
    /// attribute is absent
    pub provider: String,

    /// Raw URI from the link's CDATA block, if one was present and
    /// decodable
    pub provider_uri: Option<String>,
}

impl Link {
    /// Resolve the stored URI into a validated URL.
    ///
    /// Returns `None` when no URI was captured or when it does not parse
    /// as an absolute URL. The raw string in [`Link::provider_uri`] is
    /// left untouched either way.
    pub fn book_url(&self) -> Option<Url> {
        self.provider_uri
            .as_deref()
            .and_then(|uri| Url::parse(uri).ok())
    }
}

/// Publication date as it appears in the document, an uninterpreted
/// `(year, month, day)` triple with no calendar validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationDate {
    /// Year component
    pub year: i32,

    /// Month component
    pub month: i32,

    /// Day component
    pub day: i32,
}

impl fmt::Display for PublicationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// One fully assembled book record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title, accumulated from character data
    pub title: String,

    /// Publisher name, accumulated from character data
    pub publisher: String,

    /// Publication date; present only when the `publication` tag carried
    /// all three of `year`, `month` and `day` as integers
    pub publication_date: Option<PublicationDate>,

    /// Overview text, taken from a CDATA block
    pub overview: String,

    /// Authors delivered by the authors section; `None` when the book
    /// had no such section
    pub authors: Option<Vec<Author>>,

    /// Purchase links delivered by the links section; `None` when the
    /// book had no such section
    pub links: Option<Vec<Link>>,
}

impl Book {
    /// Number of authors, zero when the section was absent
    pub fn author_count(&self) -> usize {
        self.authors.as_ref().map_or(0, Vec::len)
    }

    /// Number of purchase links, zero when the section was absent
    pub fn link_count(&self) -> usize {
        self.links.as_ref().map_or(0, Vec::len)
    }
}
