//! Hand-off protocol between the coordinator and section sub-parsers.

use crate::sax::{SaxError, XmlEvent};

/// Result of feeding one event to a section parser
#[derive(Debug)]
pub(crate) enum SectionOutcome<T> {
    /// The section is still open; keep routing events here
    Pending,
    /// The section's closing tag was consumed; the accumulated records
    /// travel back to the owner and the sub-parser is spent
    Complete(Vec<T>),
}

/// A parser that owns the event stream for the duration of one document
/// section.
///
/// The coordinator routes every event to the active section parser until
/// it reports completion, then takes the stream back. Completion carries
/// the accumulated records, so the two never share mutable state.
pub(crate) trait SectionParser {
    /// Record type accumulated by this section
    type Output;

    /// Consume one event scoped to this section
    fn handle(&mut self, event: XmlEvent<'_>) -> SectionOutcome<Self::Output>;

    /// Called when the tokenizer fails while this section owns the
    /// stream; the stream halts afterwards
    fn parse_error(&mut self, _error: &SaxError) {}
}
