//! Indented rendering of a compact document.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};

use crate::common::emit;
use crate::error::{OutputError, Result};

const INDENT: usize = 2;

/// Re-indent `document` with two spaces per level.
///
/// Elements holding text stay on one line and their text is copied as-is,
/// even when it is only whitespace. Whitespace-only text between elements is
/// treated as formatting and dropped. Elements with no content are written
/// self-closing.
pub fn pretty_print(document: &str) -> Result<String> {
    let mut reader = Reader::from_str(document);
    let mut printer = Printer::default();
    loop {
        let event = reader.read_event().map_err(|error| OutputError::Markup {
            position: reader.buffer_position() as u64,
            message: error.to_string(),
        })?;
        if matches!(event, Event::Eof) {
            break;
        }
        printer
            .push(event)
            .map_err(|message| OutputError::Markup {
                position: reader.buffer_position() as u64,
                message,
            })?;
    }
    printer.finish()
}

struct Printer<'a> {
    xml: Writer<Vec<u8>>,
    depth: usize,
    /// Start tag not yet written, so it can become self-closing.
    pending: Option<BytesStart<'a>>,
    /// Consecutive character content not yet written.
    text: Vec<Event<'a>>,
    /// The current element already holds inline text.
    inline: bool,
}

impl Default for Printer<'_> {
    fn default() -> Self {
        Self {
            xml: Writer::new(Vec::new()),
            depth: 0,
            pending: None,
            text: Vec::new(),
            inline: false,
        }
    }
}

impl<'a> Printer<'a> {
    fn push(&mut self, event: Event<'a>) -> std::result::Result<(), String> {
        match event {
            Event::Text(_) | Event::GeneralRef(_) | Event::CData(_) => {
                self.text.push(event);
                Ok(())
            }
            Event::Start(start) => {
                self.flush_text(false)?;
                self.flush_pending()?;
                self.line_break();
                self.pending = Some(start);
                self.depth += 1;
                self.inline = false;
                Ok(())
            }
            Event::End(end) => {
                // Text directly inside a leaf is content, blank or not.
                self.flush_text(self.pending.is_some())?;
                self.depth = self.depth.saturating_sub(1);
                let result = if let Some(start) = self.pending.take() {
                    emit(&mut self.xml, Event::Empty(start))
                } else {
                    if !self.inline {
                        self.line_break();
                    }
                    emit(&mut self.xml, Event::End(end))
                };
                self.inline = false;
                result
            }
            other => {
                self.flush_text(false)?;
                self.flush_pending()?;
                self.line_break();
                emit(&mut self.xml, other)
            }
        }
    }

    fn flush_pending(&mut self) -> std::result::Result<(), String> {
        match self.pending.take() {
            Some(start) => emit(&mut self.xml, Event::Start(start)),
            None => Ok(()),
        }
    }

    fn flush_text(&mut self, keep_blank: bool) -> std::result::Result<(), String> {
        if self.text.is_empty() {
            return Ok(());
        }
        let formatting = self.text.iter().all(|event| match event {
            Event::Text(text) => text.iter().all(u8::is_ascii_whitespace),
            _ => false,
        });
        let text = std::mem::take(&mut self.text);
        if formatting && !keep_blank {
            return Ok(());
        }
        self.flush_pending()?;
        for event in text {
            emit(&mut self.xml, event)?;
        }
        self.inline = true;
        Ok(())
    }

    fn line_break(&mut self) {
        let out = self.xml.get_mut();
        if !out.is_empty() {
            out.push(b'\n');
            out.extend(std::iter::repeat_n(b' ', self.depth * INDENT));
        }
    }

    fn finish(mut self) -> Result<String> {
        self.flush_text(false)
            .and_then(|()| self.flush_pending())
            .map_err(|message| OutputError::Markup {
                position: 0,
                message,
            })?;
        let mut out = self.xml.into_inner();
        out.push(b'\n');
        String::from_utf8(out).map_err(|error| OutputError::Markup {
            position: error.utf8_error().valid_up_to() as u64,
            message: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_nested_elements() {
        let compact = r#"<?xml version="1.0" encoding="UTF-8"?><SAMPLE_SET><SAMPLE alias="S1"><TITLE>Soil sample</TITLE><SAMPLE_ATTRIBUTES><SAMPLE_ATTRIBUTE><TAG>depth_m</TAG><VALUE>1.2</VALUE></SAMPLE_ATTRIBUTE></SAMPLE_ATTRIBUTES></SAMPLE></SAMPLE_SET>"#;
        let pretty = pretty_print(compact).expect("pretty");
        insta::assert_snapshot!(pretty, @r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <SAMPLE_SET>
          <SAMPLE alias="S1">
            <TITLE>Soil sample</TITLE>
            <SAMPLE_ATTRIBUTES>
              <SAMPLE_ATTRIBUTE>
                <TAG>depth_m</TAG>
                <VALUE>1.2</VALUE>
              </SAMPLE_ATTRIBUTE>
            </SAMPLE_ATTRIBUTES>
          </SAMPLE>
        </SAMPLE_SET>
        "#);
    }

    #[test]
    fn keeps_text_with_entities_intact() {
        let pretty = pretty_print("<A><B> x &amp; y </B></A>").expect("pretty");
        assert_eq!(pretty, "<A>\n  <B> x &amp; y </B>\n</A>\n");
    }

    #[test]
    fn collapses_empty_elements() {
        let pretty = pretty_print("<A><VALUE></VALUE></A>").expect("pretty");
        assert_eq!(pretty, "<A>\n  <VALUE/>\n</A>\n");
    }

    #[test]
    fn keeps_blank_leaf_text() {
        let pretty = pretty_print("<A><VALUE>   </VALUE></A>").expect("pretty");
        assert_eq!(pretty, "<A>\n  <VALUE>   </VALUE>\n</A>\n");
        assert_eq!(pretty_print(&pretty).expect("pretty again"), pretty);
    }

    #[test]
    fn reindents_already_indented_input() {
        let once = pretty_print("<A><B>1</B><C/></A>").expect("pretty");
        let twice = pretty_print(&once).expect("pretty again");
        assert_eq!(once, twice);
    }
}
