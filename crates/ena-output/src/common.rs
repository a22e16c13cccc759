//! Element names and shared writer helpers.

use std::borrow::Cow;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Root element of the aggregate document.
pub const SAMPLE_SET: &str = "SAMPLE_SET";
pub const SAMPLE: &str = "SAMPLE";
/// Attribute of `SAMPLE` carrying the identifier.
pub const ALIAS: &str = "alias";
pub const TITLE: &str = "TITLE";
pub const SAMPLE_NAME: &str = "SAMPLE_NAME";
pub const SAMPLE_ATTRIBUTES: &str = "SAMPLE_ATTRIBUTES";
pub const SAMPLE_ATTRIBUTE: &str = "SAMPLE_ATTRIBUTE";
pub const TAG: &str = "TAG";
pub const VALUE: &str = "VALUE";

/// Wrapper generic serializers put around each sequence entry.
pub const GENERIC_ITEM: &str = "item";

pub const XML_VERSION: &str = "1.0";
pub const XML_ENCODING: &str = "UTF-8";

/// Write an event, flattening the writer error to its message.
pub(crate) fn emit<'a, W: Write>(
    xml: &mut Writer<W>,
    event: impl Into<Event<'a>>,
) -> Result<(), String> {
    xml.write_event(event).map_err(|error| error.to_string())
}

/// Write the `<?xml version="1.0" encoding="UTF-8"?>` declaration.
pub(crate) fn write_declaration<W: Write>(xml: &mut Writer<W>) -> Result<(), String> {
    emit(
        xml,
        Event::Decl(BytesDecl::new(XML_VERSION, Some(XML_ENCODING), None)),
    )
}

/// Escape element text. Carriage returns become `&#13;` so parsers do not
/// fold them into line feeds.
pub(crate) fn escape_text(text: &str) -> Cow<'_, str> {
    escape_chars(escape(text), &['\r'])
}

/// Escape an attribute value. Tabs and line breaks are written as character
/// references, since attribute normalization turns them into spaces.
pub(crate) fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape_chars(escape(value), &['\r', '\n', '\t'])
}

fn escape_chars<'a>(escaped: Cow<'a, str>, chars: &[char]) -> Cow<'a, str> {
    if !escaped.contains(chars) {
        return escaped;
    }
    let mut out = String::with_capacity(escaped.len() + 8);
    for ch in escaped.chars() {
        if chars.contains(&ch) {
            out.push_str(&format!("&#{};", u32::from(ch)));
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Write a simple text element.
pub(crate) fn write_text_element<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), String> {
    emit(xml, Event::Start(BytesStart::new(name)))?;
    if !text.is_empty() {
        emit(xml, Event::Text(BytesText::from_escaped(escape_text(text))))?;
    }
    emit(xml, Event::End(BytesEnd::new(name)))
}
