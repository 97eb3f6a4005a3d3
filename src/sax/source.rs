use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{Attributes, EventSink, Flow, SaxError, XmlEvent};

/// Pull-based XML tokenizer wrapped as a push-based event source.
///
/// The source owns the tokenizer and pushes events, in document order,
/// into a single [`EventSink`] until end of input, an abort request, or
/// a parse error. It has no knowledge of the catalog vocabulary.
pub struct EventSource<R: BufRead> {
    reader: Reader<R>,
    finished: bool,
}

impl<R: BufRead> EventSource<R> {
    /// Create an event source over a buffered reader
    pub fn new(reader: R) -> Self {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        Self {
            reader: xml_reader,
            finished: false,
        }
    }

    /// Drive the stream to completion, pushing every event into `sink`.
    ///
    /// Delivery stops at end of input, when the sink returns
    /// [`Flow::Abort`], or when the tokenizer reports an error. Errors
    /// surface through [`EventSink::parse_error`] exactly once; the
    /// source never delivers anything after that.
    pub fn run(&mut self, sink: &mut dyn EventSink) {
        if self.finished {
            return;
        }

        let mut buf = Vec::new();
        loop {
            match self.reader.read_event_into(&mut buf) {
                Ok(Event::Eof) => break,
                Ok(event) => match dispatch(event, sink) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Abort) => break,
                    Err(error) => {
                        sink.parse_error(&error);
                        break;
                    }
                },
                Err(e) => {
                    sink.parse_error(&SaxError::Xml(e));
                    break;
                }
            }
            buf.clear();
        }

        self.finished = true;
    }
}

impl<'a> EventSource<&'a [u8]> {
    /// Create an event source over an in-memory document
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

/// Translate one tokenizer event into sink callbacks
fn dispatch(event: Event<'_>, sink: &mut dyn EventSink) -> Result<Flow, SaxError> {
    match event {
        Event::Start(e) => {
            let attributes = Attributes::from_start(&e)?;
            let name = e.name();
            let name = std::str::from_utf8(name.as_ref())?;
            Ok(sink.handle(XmlEvent::StartElement {
                name,
                attributes: &attributes,
            }))
        }
        Event::Empty(e) => {
            // A self-closing tag surfaces as a start immediately
            // followed by an end.
            let attributes = Attributes::from_start(&e)?;
            let name = e.name();
            let name = std::str::from_utf8(name.as_ref())?;
            match sink.handle(XmlEvent::StartElement {
                name,
                attributes: &attributes,
            }) {
                Flow::Continue => Ok(sink.handle(XmlEvent::EndElement { name })),
                Flow::Abort => Ok(Flow::Abort),
            }
        }
        Event::End(e) => {
            let name = e.name();
            let name = std::str::from_utf8(name.as_ref())?;
            Ok(sink.handle(XmlEvent::EndElement { name }))
        }
        Event::Text(t) => {
            let text = t.unescape()?;
            Ok(sink.handle(XmlEvent::Characters { text: &text }))
        }
        Event::CData(c) => {
            let data = c.into_inner();
            Ok(sink.handle(XmlEvent::CData { data: &data }))
        }
        // Declarations, comments, processing instructions and doctypes
        // carry no catalog content.
        _ => Ok(Flow::Continue),
    }
}
