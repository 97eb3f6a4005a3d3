/// Errors reported by the XML event source
#[derive(Debug, thiserror::Error)]
pub enum SaxError {
    /// Error from the underlying XML tokenizer
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// UTF-8 encoding error in tag names or text content
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
