//! Legacy dialect to HTML conversion.
//!
//! The dialect is the semi-XML markup long-form articles were authored in.
//! Conversion is a single streaming pass over the quick-xml event stream:
//!
//! - tags are renamed through [`tables::remap`] (`example` becomes `pre`,
//!   `link` becomes `a`, ...);
//! - `div1`/`div2`/`div3` emit nothing and set the level of nested `head`
//!   elements (`h2`/`h3`/`h4`);
//! - bare `example`/`center` elements get default attributes, and `table`,
//!   `acronym` and `a` are decorated;
//! - text is typographed unless it sits in a skip zone, where it is only
//!   escaped;
//! - self-closing elements are written as an explicit start/end pair.
//!
//! ```
//! use typomark::dialect::convert;
//!
//! let converted = convert("<div1><head>Title</head><p>a - b</p></div1>");
//! assert_eq!(converted.html, "<h2>Title</h2><p>a&nbsp;&mdash; b</p>");
//! ```
//!
//! Sections do not nest: closing any `divN` clears the level, so a `head`
//! following a closed inner section renders as a bare `h`.

pub mod link;
pub mod tables;

use std::mem;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesCData, BytesEnd, BytesRef, BytesStart, BytesText, Event};
use quick_xml::name::QName;

use crate::error::{Converted, Error, Result};
use crate::skip::{self, SkipZone};
use crate::typography::Typography;

use tables::{Attr, Mapping, SectionLevel};

/// Convert a dialect document into an HTML fragment.
///
/// Malformed input stops the conversion at the failing token; the returned
/// value still carries everything rendered before it.
pub fn convert(input: &str) -> Converted {
    log::debug!("converting dialect document ({} bytes)", input.len());
    Converter::new(input).run()
}

/// Per-call conversion state.
struct Converter<'i> {
    reader: Reader<&'i [u8]>,
    writer: Writer<Vec<u8>>,
    section: Option<SectionLevel>,
    skip: SkipZone,
    /// Pending character data, in escaped form.
    run: String,
}

impl<'i> Converter<'i> {
    fn new(input: &'i str) -> Self {
        Self {
            reader: Reader::from_str(input),
            writer: Writer::new(Vec::with_capacity(input.len() + input.len() / 8)),
            section: None,
            skip: SkipZone::new(),
            run: String::new(),
        }
    }

    fn run(mut self) -> Converted {
        let outcome = self.process();
        let flushed = self.flush_text();
        let error = outcome.err().or_else(|| flushed.err());

        let html = match String::from_utf8(self.writer.into_inner()) {
            Ok(html) => html,
            Err(e) => {
                let html = String::from_utf8_lossy(e.as_bytes()).into_owned();
                return Converted::partial(html, e.into());
            }
        };

        match error {
            None => Converted::ok(html),
            Some(error) => Converted::partial(html, error),
        }
    }

    fn process(&mut self) -> Result<()> {
        loop {
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(source) => {
                    let position = self.reader.error_position() as u64;
                    log::warn!("dialect decoding stopped at byte {position}: {source}");
                    return Err(Error::Xml { position, source });
                }
            };

            match event {
                Event::Start(e) => self.start(&e)?,
                Event::Empty(e) => {
                    self.start(&e)?;
                    self.end(&tag_name(e.name()))?;
                }
                Event::End(e) => self.end(&tag_name(e.name()))?,
                Event::Text(e) => self.text(&e),
                Event::GeneralRef(e) => self.reference(&e),
                Event::CData(e) => self.cdata(&e),
                Event::Eof => return Ok(()),
                directive => {
                    self.flush_text()?;
                    self.write(directive)?;
                }
            }
        }
    }

    fn start(&mut self, e: &BytesStart<'_>) -> Result<()> {
        self.flush_text()?;

        let source = tag_name(e.name());
        let output = match tables::remap(&source) {
            Some(Mapping::Section(level)) => {
                log::trace!("entering section {}", level.digit());
                self.section = Some(level);
                return Ok(());
            }
            Some(Mapping::Heading) => tables::heading(self.section),
            Some(Mapping::Rename(name)) => name.to_string(),
            None => source.clone(),
        };

        let mut attrs = attributes(e);
        if attrs.is_empty()
            && let Some(defaults) = tables::defaults(&source)
        {
            attrs = defaults.iter().map(|(k, v)| Attr::new(*k, *v)).collect();
        }
        let attrs = tables::decorate(&output, attrs);

        let mut elem = BytesStart::new(output);
        for attr in &attrs {
            elem.push_attribute((attr.key.as_bytes(), attr.value.as_bytes()));
        }
        self.write(Event::Start(elem))?;

        if skip::DIALECT.contains(&source) {
            self.skip.enter(&source);
        }
        Ok(())
    }

    fn end(&mut self, source: &str) -> Result<()> {
        self.flush_text()?;

        let output = match tables::remap(source) {
            Some(Mapping::Section(_)) => {
                self.section = None;
                return Ok(());
            }
            Some(Mapping::Heading) => tables::heading(self.section),
            Some(Mapping::Rename(name)) => name.to_string(),
            None => source.to_string(),
        };
        self.write(Event::End(BytesEnd::new(output)))?;

        self.skip.exit(source);
        Ok(())
    }

    fn text(&mut self, e: &BytesText<'_>) {
        let raw = String::from_utf8_lossy(e);
        if self.skip.is_active() {
            self.run.push_str(&partial_escape(&*raw));
        } else {
            self.run.push_str(&raw);
        }
    }

    fn reference(&mut self, e: &BytesRef<'_>) {
        self.run.push('&');
        self.run.push_str(&String::from_utf8_lossy(e));
        self.run.push(';');
    }

    fn cdata(&mut self, e: &BytesCData<'_>) {
        let raw = String::from_utf8_lossy(e);
        self.run.push_str(&partial_escape(&*raw));
    }

    /// Write the pending text run, typographed unless a skip zone is open.
    fn flush_text(&mut self) -> Result<()> {
        if self.run.is_empty() {
            return Ok(());
        }
        let run = mem::take(&mut self.run);
        let html = if self.skip.is_active() {
            run
        } else {
            Typography::dialect().apply(&run)
        };
        self.write(Event::Text(BytesText::from_escaped(html)))
    }

    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.writer.write_event(event).map_err(|e| {
            log::error!("failed to write converted markup: {e}");
            Error::Encode(e.to_string())
        })
    }
}

fn tag_name(name: QName<'_>) -> String {
    String::from_utf8_lossy(name.as_ref()).into_owned()
}

fn attributes(e: &BytesStart<'_>) -> Vec<Attr> {
    e.attributes()
        .filter_map(|attr| match attr {
            Ok(attr) => Some(Attr::new(
                String::from_utf8_lossy(attr.key.as_ref()),
                attr_value(&attr.value),
            )),
            Err(e) => {
                log::warn!("dropping malformed attribute: {e}");
                None
            }
        })
        .collect()
}

/// Attribute values keep their escaped source form. A raw `"` can only come
/// from a single-quoted value and is escaped for the double-quoted output.
fn attr_value(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).replace('"', "&quot;")
}
