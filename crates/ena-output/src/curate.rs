//! Reconciles generic serializer output with the sample schema.
//!
//! Generic ordered-structure serializers wrap every sequence entry in an
//! `<item>` element and, when the root name is given as `SAMPLE alias="X"`,
//! repeat the attribute text in the closing tag (`</SAMPLE alias="X">`).
//! [`curate`] removes both artifacts and copies everything else through
//! byte-for-byte, so content is never escaped or unescaped a second time.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, Event};
use tracing::trace;

use crate::common::{GENERIC_ITEM, emit};
use crate::error::{OutputError, Result};

/// Strip generic `<item>` wrappers and bare any attributed closing tags.
///
/// Running it on its own output changes nothing.
pub fn curate(markup: &str) -> Result<String> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().check_end_names = false;
    let mut xml = Writer::new(Vec::new());
    let mut removed = 0usize;

    loop {
        let event = reader.read_event().map_err(|error| OutputError::Markup {
            position: reader.buffer_position() as u64,
            message: error.to_string(),
        })?;
        let written = match event {
            Event::Eof => break,
            Event::Start(start) if start.name().as_ref() == GENERIC_ITEM.as_bytes() => {
                removed += 1;
                continue;
            }
            Event::Empty(empty) if empty.name().as_ref() == GENERIC_ITEM.as_bytes() => {
                removed += 1;
                continue;
            }
            Event::End(end) => match closing_name(&end) {
                Some(name) if name == GENERIC_ITEM => continue,
                Some(name) if name.len() != end.name().as_ref().len() => {
                    emit(&mut xml, Event::End(BytesEnd::new(name)))
                }
                _ => emit(&mut xml, Event::End(end)),
            },
            other => emit(&mut xml, other),
        };
        written.map_err(|message| OutputError::Markup {
            position: reader.buffer_position() as u64,
            message,
        })?;
    }

    trace!(removed, "curated markup");
    String::from_utf8(xml.into_inner()).map_err(|error| OutputError::Markup {
        position: error.utf8_error().valid_up_to() as u64,
        message: error.to_string(),
    })
}

/// Element name of a closing tag, ignoring any attribute-like text after it.
fn closing_name<'e>(end: &'e BytesEnd<'_>) -> Option<&'e str> {
    let raw = end.name().into_inner();
    let name = raw
        .split(u8::is_ascii_whitespace)
        .next()
        .unwrap_or(raw);
    std::str::from_utf8(name).ok()
}
