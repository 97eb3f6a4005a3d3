use super::section::{SectionOutcome, SectionParser};
use crate::catalog::models::Author;
use crate::sax::XmlEvent;

/// Sub-parser for one `authors` section.
///
/// Character data is routed by the most recently opened tag, so text
/// split across several chunks concatenates in order. The author in
/// progress is appended only at its closing tag.
#[derive(Debug, Default)]
pub(crate) struct AuthorsParser {
    current_tag: Option<String>,
    authors: Vec<Author>,
    current_author: Option<Author>,
}

impl AuthorsParser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn start_element(&mut self, name: &str) {
        if name == "author" {
            self.current_author = Some(Author::default());
        }
        self.current_tag = Some(name.to_string());
    }

    fn end_element(&mut self, name: &str) -> SectionOutcome<Author> {
        let outcome = match name {
            "author" => {
                if let Some(author) = self.current_author.take() {
                    self.authors.push(author);
                }
                SectionOutcome::Pending
            }
            "authors" => SectionOutcome::Complete(std::mem::take(&mut self.authors)),
            _ => SectionOutcome::Pending,
        };
        self.current_tag = None;
        outcome
    }

    fn characters(&mut self, text: &str) {
        if let Some(author) = self.current_author.as_mut() {
            match self.current_tag.as_deref() {
                Some("name") => author.name.push_str(text),
                Some("surname") => author.surname.push_str(text),
                _ => {}
            }
        }
    }
}

impl SectionParser for AuthorsParser {
    type Output = Author;

    fn handle(&mut self, event: XmlEvent<'_>) -> SectionOutcome<Author> {
        match event {
            XmlEvent::StartElement { name, .. } => {
                self.start_element(name);
                SectionOutcome::Pending
            }
            XmlEvent::EndElement { name } => self.end_element(name),
            XmlEvent::Characters { text } => {
                self.characters(text);
                SectionOutcome::Pending
            }
            // Author records carry no CDATA content.
            XmlEvent::CData { .. } => SectionOutcome::Pending,
        }
    }
}
