//! Streaming book catalog parser.
//!
//! One event stream is shared by cooperating parsers: [`BookParser`]
//! coordinates, and when it sees an `authors` or `buy_links` opening tag
//! it hands the stream to a section sub-parser, which keeps it until the
//! section's closing tag. The sub-parser hands back the accumulated
//! records with the stream, and the coordinator stores them on the book
//! in progress. At any instant exactly one parser is consuming events.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::error;

use crate::catalog::models::{Author, Book, Link, PublicationDate};
use crate::sax::{Attributes, EventSink, EventSource, Flow, SaxError, XmlEvent};

use authors::AuthorsParser;
use links::LinksParser;
use section::{SectionOutcome, SectionParser};

mod authors;
mod links;
mod section;


/// Default input buffer size for catalog parsing (64KB)
pub const DEFAULT_INPUT_BUFFER_SIZE: usize = 64 * 1024;

/// The sub-parser currently holding the event stream
#[derive(Debug)]
enum Section {
    Authors(AuthorsParser),
    Links(LinksParser),
}

/// Streaming parser for book catalog documents.
///
/// Parsing runs to completion inside the constructor; afterwards the
/// finalized books are available through [`BookParser::books`]. A
/// malformed document never surfaces as an error to the caller: the
/// failure is logged, the stream stops, and every book finalized before
/// that point is kept.
///
/// # Example
/// ```
/// use bookstream::catalog::BookParser;
///
/// let document = br#"<books>
///   <book>
///     <title>Dune</title>
///     <publisher>Chilton Books</publisher>
///   </book>
/// </books>"#;
///
/// let parser = BookParser::parse(document);
/// assert_eq!(parser.books()[0].title, "Dune");
/// ```
#[derive(Debug)]
pub struct BookParser {
    current_tag: Option<String>,
    current_book: Option<Book>,
    books: Vec<Book>,
    section: Option<Section>,
}

impl BookParser {
    fn new() -> Self {
        Self {
            current_tag: None,
            current_book: None,
            books: Vec::new(),
            section: None,
        }
    }

    /// Parse a catalog document held in memory
    pub fn parse(data: &[u8]) -> Self {
        let mut parser = Self::new();
        EventSource::from_bytes(data).run(&mut parser);
        parser
    }

    /// Parse a catalog document from a buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        let mut parser = Self::new();
        EventSource::new(reader).run(&mut parser);
        parser
    }

    /// Parse a catalog file with the default buffer size (64KB)
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open_with_buffer_size(path, DEFAULT_INPUT_BUFFER_SIZE)
    }

    /// Parse a catalog file with a custom input buffer size
    pub fn open_with_buffer_size<P: AsRef<Path>>(
        path: P,
        buffer_size: usize,
    ) -> std::io::Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::from_reader(BufReader::with_capacity(
            buffer_size,
            file,
        )))
    }

    /// Finalized books, in document order of their closing tags
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Consume the parser, returning the finalized books
    pub fn into_books(self) -> Vec<Book> {
        self.books
    }

    /// Number of finalized books
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    fn start_element(&mut self, name: &str, attributes: &Attributes) {
        match name {
            "book" => {
                self.current_book = Some(Book::default());
            }
            "authors" => {
                self.section = Some(Section::Authors(AuthorsParser::new()));
            }
            "buy_links" => {
                self.section = Some(Section::Links(LinksParser::new()));
            }
            "publication" => {
                if let Some(date) = publication_date(attributes) {
                    if let Some(book) = self.current_book.as_mut() {
                        book.publication_date = Some(date);
                    }
                }
            }
            _ => {
                self.current_tag = Some(name.to_string());
            }
        }
    }

    fn end_element(&mut self, name: &str) -> Flow {
        let flow = match name {
            "book" => {
                if let Some(book) = self.current_book.take() {
                    self.books.push(book);
                }
                Flow::Continue
            }
            // The closing catalog wrapper is the designed termination
            // point; anything after it is never parsed.
            "books" => Flow::Abort,
            _ => Flow::Continue,
        };
        self.current_tag = None;
        flow
    }

    fn characters(&mut self, text: &str) {
        if let Some(book) = self.current_book.as_mut() {
            match self.current_tag.as_deref() {
                Some("title") => book.title.push_str(text),
                Some("publisher") => book.publisher.push_str(text),
                _ => {}
            }
        }
    }

    fn cdata(&mut self, data: &[u8]) {
        // Overview replaces, rather than appends to, earlier content.
        // Routing follows the last opened tag; nesting depth is
        // deliberately not checked, and undecodable bytes are dropped.
        if self.current_tag.as_deref() != Some("overview") {
            return;
        }
        if let Ok(text) = std::str::from_utf8(data) {
            if let Some(book) = self.current_book.as_mut() {
                book.overview = text.to_string();
            }
        }
    }

    /// Route one event to the active section parser, taking the stream
    /// back when the section completes
    fn delegate(&mut self, section: Section, event: XmlEvent<'_>) -> Flow {
        match section {
            Section::Authors(mut parser) => match parser.handle(event) {
                SectionOutcome::Pending => self.section = Some(Section::Authors(parser)),
                SectionOutcome::Complete(authors) => self.authors_complete(authors),
            },
            Section::Links(mut parser) => match parser.handle(event) {
                SectionOutcome::Pending => self.section = Some(Section::Links(parser)),
                SectionOutcome::Complete(links) => self.links_complete(links),
            },
        }
        Flow::Continue
    }

    /// Completion hand-back from the authors section parser
    fn authors_complete(&mut self, authors: Vec<Author>) {
        if let Some(book) = self.current_book.as_mut() {
            book.authors = Some(authors);
        }
    }

    /// Completion hand-back from the links section parser
    fn links_complete(&mut self, links: Vec<Link>) {
        if let Some(book) = self.current_book.as_mut() {
            book.links = Some(links);
        }
    }
}

impl EventSink for BookParser {
    fn handle(&mut self, event: XmlEvent<'_>) -> Flow {
        // While a section sub-parser holds the stream, every event goes
        // to it and the coordinator's own routing stays idle.
        if let Some(section) = self.section.take() {
            return self.delegate(section, event);
        }

        match event {
            XmlEvent::StartElement { name, attributes } => {
                self.start_element(name, attributes);
                Flow::Continue
            }
            XmlEvent::EndElement { name } => self.end_element(name),
            XmlEvent::Characters { text } => {
                self.characters(text);
                Flow::Continue
            }
            XmlEvent::CData { data } => {
                self.cdata(data);
                Flow::Continue
            }
        }
    }

    fn parse_error(&mut self, error: &SaxError) {
        match self.section.as_mut() {
            Some(Section::Authors(parser)) => parser.parse_error(error),
            Some(Section::Links(parser)) => parser.parse_error(error),
            None => error!("book parsing error: {}", error),
        }
    }
}

/// Read the publication date from the tag's attributes.
///
/// All three of `year`, `month` and `day` must be present and parse as
/// integers; a partial date is discarded entirely.
fn publication_date(attributes: &Attributes) -> Option<PublicationDate> {
    let year = attributes.get("year")?.parse().ok()?;
    let month = attributes.get("month")?.parse().ok()?;
    let day = attributes.get("day")?.parse().ok()?;
    Some(PublicationDate { year, month, day })
}
