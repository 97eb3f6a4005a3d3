//! Event vocabulary shared between the event source and its consumers.

use quick_xml::events::BytesStart;

use super::SaxError;

/// Attributes of an opening tag, in document order.
///
/// Values are stored with character references already resolved; lookups
/// are linear, which is fine for the handful of attributes a catalog tag
/// carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pairs: Vec<(String, String)>,
}

impl Attributes {
    /// Extract all attributes from an opening tag, resolving character
    /// references in the values
    pub(super) fn from_start(e: &BytesStart<'_>) -> Result<Self, SaxError> {
        let mut pairs = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|e| SaxError::Xml(quick_xml::Error::from(e)))?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr.unescape_value()?.to_string();
            pairs.push((key, value));
        }
        Ok(Self { pairs })
    }

    /// Look up an attribute value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over `(name, value)` pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes on the tag
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the tag carries no attributes
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(String, String)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// A single parse event delivered to the active [`EventSink`].
///
/// Self-closing tags are delivered as a start event immediately followed
/// by an end event, so consumers never need a separate empty-tag case.
#[derive(Debug, Clone, Copy)]
pub enum XmlEvent<'a> {
    /// An opening tag with its attributes
    StartElement {
        /// Tag name
        name: &'a str,
        /// Attributes in document order
        attributes: &'a Attributes,
    },
    /// A closing tag
    EndElement {
        /// Tag name
        name: &'a str,
    },
    /// A chunk of character data; a single text node may arrive in
    /// several chunks
    Characters {
        /// Decoded text chunk
        text: &'a str,
    },
    /// A CDATA block, delivered as raw bytes without any decoding
    CData {
        /// Raw CDATA content
        data: &'a [u8],
    },
}

/// Whether the event source should keep delivering events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Deliver the next event
    Continue,
    /// Stop the stream; no further events are delivered
    Abort,
}

/// The single active consumer of the event stream.
///
/// Exactly one sink receives events at any time. A sink that composes
/// further consumers internally (the catalog parser routes events to
/// per-section sub-parsers) is still one sink from the source's point
/// of view.
pub trait EventSink {
    /// Handle one parse event; return [`Flow::Abort`] to stop the stream
    fn handle(&mut self, event: XmlEvent<'_>) -> Flow;

    /// Called once when the tokenizer fails; the stream halts afterwards
    fn parse_error(&mut self, _error: &SaxError) {}
}
