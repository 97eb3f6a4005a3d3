//! Streaming XML event layer built on quick-xml.
//!
//! This module turns the pull-based tokenizer into a push-based event
//! stream with a single swappable consumer, the shape the catalog
//! parser's delegate hand-off is built on. Nothing here knows about
//! books; the vocabulary is generic XML events.

pub use error::SaxError;
pub use events::{Attributes, EventSink, Flow, XmlEvent};
pub use source::EventSource;

mod error;
mod events;
mod source;
