use log::error;

use super::section::{SectionOutcome, SectionParser};
use crate::catalog::models::Link;
use crate::sax::{Attributes, SaxError, XmlEvent};

/// Sub-parser for one `buy_links` section.
///
/// The provider name is read atomically from the opening tag's
/// attributes; the URI arrives in a CDATA block. Links never accumulate
/// character data.
#[derive(Debug, Default)]
pub(crate) struct LinksParser {
    #[allow(dead_code)]
    current_tag: Option<String>,
    links: Vec<Link>,
    current_link: Option<Link>,
}

impl LinksParser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn start_element(&mut self, name: &str, attributes: &Attributes) {
        if name == "link" {
            let mut link = Link::default();
            if let Some(provider) = attributes.get("provider") {
                link.provider = provider.to_string();
            }
            self.current_link = Some(link);
        }
        self.current_tag = Some(name.to_string());
    }

    fn end_element(&mut self, name: &str) -> SectionOutcome<Link> {
        let outcome = match name {
            "link" => {
                if let Some(link) = self.current_link.take() {
                    self.links.push(link);
                }
                SectionOutcome::Pending
            }
            "buy_links" => SectionOutcome::Complete(std::mem::take(&mut self.links)),
            _ => SectionOutcome::Pending,
        };
        self.current_tag = None;
        outcome
    }

    fn cdata(&mut self, data: &[u8]) {
        // Each link holds exactly one CDATA block and no other text
        // content, so the URI always targets the link in progress.
        // Undecodable bytes leave the URI unset; the link survives.
        if let Ok(uri) = std::str::from_utf8(data) {
            if let Some(link) = self.current_link.as_mut() {
                link.provider_uri = Some(uri.to_string());
            }
        }
    }
}

impl SectionParser for LinksParser {
    type Output = Link;

    fn handle(&mut self, event: XmlEvent<'_>) -> SectionOutcome<Link> {
        match event {
            XmlEvent::StartElement { name, attributes } => {
                self.start_element(name, attributes);
                SectionOutcome::Pending
            }
            XmlEvent::EndElement { name } => self.end_element(name),
            // Links never accumulate character data; the URI arrives in
            // a CDATA block.
            XmlEvent::Characters { .. } => SectionOutcome::Pending,
            XmlEvent::CData { data } => {
                self.cdata(data);
                SectionOutcome::Pending
            }
        }
    }

    fn parse_error(&mut self, error: &SaxError) {
        error!("link section parsing error: {}", error);
    }
}
