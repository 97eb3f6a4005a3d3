//! Integration tests for bookstream
//!
//! These tests drive the full pipeline from document bytes (in memory and
//! on disk) to finalized books.

use bookstream::catalog::{Book, BookParser, PublicationDate};
use std::fs;
use tempfile::tempdir;

/// A small but complete catalog exercising every element the parser knows.
const REFERENCE_CATALOG: &str = r#"<books>
  <book>
    <title>Dune</title>
    <publisher>Chilton Books</publisher>
    <publication year="1965" month="8" day="1"/>
    <overview><![CDATA[Set on the desert planet Arrakis, the story of the boy Paul Atreides.]]></overview>
    <authors>
      <author>
        <name>Frank</name>
        <surname>Herbert</surname>
      </author>
    </authors>
    <buy_links>
      <link provider="Amazon"><![CDATA[https://amazon.example/dune]]></link>
      <link provider="Waterstones"><![CDATA[https://waterstones.example/dune]]></link>
    </buy_links>
  </book>
  <book>
    <title>Good Omens</title>
    <publisher>Gollancz</publisher>
    <publication year="1990" month="5" day="10"/>
    <authors>
      <author>
        <name>Terry</name>
        <surname>Pratchett</surname>
      </author>
      <author>
        <name>Neil</name>
        <surname>Gaiman</surname>
      </author>
    </authors>
  </book>
  <book>
    <title>Untitled Draft</title>
  </book>
</books>"#;

#[test]
fn test_parse_reference_catalog() {
    let parser = BookParser::parse(REFERENCE_CATALOG.as_bytes());
    assert_eq!(parser.book_count(), 3);

    let dune = &parser.books()[0];
    assert_eq!(dune.title, "Dune");
    assert_eq!(dune.publisher, "Chilton Books");
    assert_eq!(
        dune.publication_date,
        Some(PublicationDate {
            year: 1965,
            month: 8,
            day: 1
        })
    );
    assert!(dune.overview.starts_with("Set on the desert planet"));
    assert_eq!(dune.author_count(), 1);
    assert_eq!(dune.link_count(), 2);

    let links = dune.links.as_deref().unwrap();
    assert_eq!(links[0].provider, "Amazon");
    assert_eq!(
        links[0].book_url().unwrap().as_str(),
        "https://amazon.example/dune"
    );
    assert_eq!(links[1].provider, "Waterstones");

    let omens = &parser.books()[1];
    let authors = omens.authors.as_deref().unwrap();
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].full_name(), "Terry Pratchett");
    assert_eq!(authors[1].full_name(), "Neil Gaiman");
    assert_eq!(omens.links, None);

    let draft = &parser.books()[2];
    assert_eq!(draft.title, "Untitled Draft");
    assert_eq!(draft.publication_date, None);
    assert_eq!(draft.authors, None);
    assert_eq!(draft.links, None);
}

#[test]
fn test_open_reads_catalog_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.xml");
    fs::write(&path, REFERENCE_CATALOG).unwrap();

    let parser = BookParser::open(&path).unwrap();
    assert_eq!(parser.book_count(), 3);
    assert_eq!(parser.books()[0].title, "Dune");
}

#[test]
fn test_open_missing_file_reports_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.xml");
    assert!(BookParser::open(&path).is_err());
}

#[test]
fn test_open_with_tiny_buffer_still_parses() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.xml");
    fs::write(&path, REFERENCE_CATALOG).unwrap();

    // A buffer far smaller than the document forces many refills.
    let parser = BookParser::open_with_buffer_size(&path, 16).unwrap();
    assert_eq!(parser.book_count(), 3);
    assert_eq!(parser.books()[1].title, "Good Omens");
}

#[test]
fn test_books_serialize_and_deserialize_as_json() {
    let books = BookParser::parse(REFERENCE_CATALOG.as_bytes()).into_books();

    let json = serde_json::to_string_pretty(&books).unwrap();
    assert!(json.contains("\"title\": \"Dune\""));

    let restored: Vec<Book> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, books);
}

#[test]
fn test_multibyte_text_survives_parsing() {
    let document = "<books><book>\
        <title>Cien años de soledad</title>\
        <publisher>Editorial Sudamericana</publisher>\
        <authors><author><name>Gabriel</name><surname>García Márquez</surname></author></authors>\
        </book></books>";

    let parser = BookParser::parse(document.as_bytes());
    let book = &parser.books()[0];
    assert_eq!(book.title, "Cien años de soledad");
    assert_eq!(
        book.authors.as_deref().unwrap()[0].full_name(),
        "Gabriel García Márquez"
    );
}

#[test]
fn test_entity_references_are_resolved_in_text() {
    let parser = BookParser::parse(
        b"<books><book><title>AT&amp;T &lt;Official&gt; History</title></book></books>",
    );
    assert_eq!(parser.books()[0].title, "AT&T <Official> History");
}

#[test]
fn test_entity_references_are_resolved_in_attributes() {
    let parser = BookParser::parse(
        b"<books><book><buy_links>\
          <link provider=\"Barnes &amp; Noble\"><![CDATA[https://bn.example/dune]]></link>\
          </buy_links></book></books>",
    );

    let links = parser.books()[0].links.as_deref().unwrap();
    assert_eq!(links[0].provider, "Barnes & Noble");
    assert_eq!(links[0].book_url().unwrap().as_str(), "https://bn.example/dune");
}

#[test]
fn test_large_catalog_parses_every_book() {
    let mut document = String::from("<books>");
    for i in 0..500 {
        document.push_str(&format!(
            "<book><title>Book {i}</title><publisher>House {i}</publisher>\
             <publication year=\"{}\" month=\"1\" day=\"1\"/></book>",
            1900 + (i % 100)
        ));
    }
    document.push_str("</books>");

    let parser = BookParser::parse(document.as_bytes());
    assert_eq!(parser.book_count(), 500);
    assert_eq!(parser.books()[0].title, "Book 0");
    assert_eq!(parser.books()[499].title, "Book 499");
    assert_eq!(
        parser.books()[499].publication_date,
        Some(PublicationDate {
            year: 1999,
            month: 1,
            day: 1
        })
    );
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog_with_books(count: usize) -> String {
        let mut document = String::from("<books>");
        for i in 0..count {
            document.push_str(&format!("<book><title>Book {i}</title></book>"));
        }
        document.push_str("</books>");
        document
    }

    proptest! {
        /// Every opened-and-closed book record ends up in the result list
        #[test]
        fn test_book_count_matches_document(count in 0usize..50) {
            let document = catalog_with_books(count);
            let parser = BookParser::parse(document.as_bytes());
            prop_assert_eq!(parser.book_count(), count);
        }

        /// Title text is carried through the parse unchanged
        #[test]
        fn test_title_text_preserved(title in "[A-Za-z][A-Za-z0-9 ]{0,30}[A-Za-z0-9]") {
            let document = format!("<books><book><title>{title}</title></book></books>");
            let parser = BookParser::parse(document.as_bytes());
            prop_assert_eq!(&parser.books()[0].title, &title);
        }

        /// All-integer publication attributes come back verbatim
        #[test]
        fn test_publication_attributes_preserved(
            year in -9999i32..9999,
            month in 0i32..99,
            day in 0i32..99,
        ) {
            let document = format!(
                "<books><book><publication year=\"{year}\" month=\"{month}\" day=\"{day}\"/></book></books>"
            );
            let parser = BookParser::parse(document.as_bytes());
            prop_assert_eq!(
                parser.books()[0].publication_date,
                Some(PublicationDate { year, month, day })
            );
        }

        /// Arbitrary input bytes must never panic the parser
        #[test]
        fn test_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            let _ = BookParser::parse(&bytes);
        }
    }
}
