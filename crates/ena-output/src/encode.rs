//! Single-sample document encoding.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use ena_model::SampleRecord;

use crate::common::{
    ALIAS, SAMPLE, SAMPLE_ATTRIBUTE, SAMPLE_ATTRIBUTES, SAMPLE_NAME, TAG, TITLE, VALUE, emit,
    escape_attribute, write_declaration, write_text_element,
};
use crate::error::{OutputError, Result};

/// Encode one sample as a standalone document.
///
/// The output is compact (no whitespace between elements) and starts with
/// its own XML declaration. Text and the alias are escaped exactly once.
pub fn encode_sample(record: &SampleRecord) -> Result<String> {
    let serialization = |message: String| OutputError::Serialization {
        alias: record.alias.clone(),
        message,
    };
    let mut xml = Writer::new(Vec::new());
    write_declaration(&mut xml).map_err(serialization)?;
    write_sample(&mut xml, record).map_err(serialization)?;
    String::from_utf8(xml.into_inner()).map_err(|error| serialization(error.to_string()))
}

fn write_sample<W: Write>(
    xml: &mut Writer<W>,
    record: &SampleRecord,
) -> std::result::Result<(), String> {
    let mut sample = BytesStart::new(SAMPLE);
    let alias = escape_attribute(&record.alias);
    sample.push_attribute(Attribute::from((ALIAS.as_bytes(), alias.as_bytes())));
    emit(xml, Event::Start(sample))?;

    write_text_element(xml, TITLE, &record.title)?;

    if let Some(name) = &record.sample_name {
        emit(xml, Event::Start(BytesStart::new(SAMPLE_NAME)))?;
        for (element, value) in name.fields() {
            write_text_element(xml, element, value)?;
        }
        emit(xml, Event::End(BytesEnd::new(SAMPLE_NAME)))?;
    }

    if !record.attributes.is_empty() {
        emit(xml, Event::Start(BytesStart::new(SAMPLE_ATTRIBUTES)))?;
        for attribute in &record.attributes {
            emit(xml, Event::Start(BytesStart::new(SAMPLE_ATTRIBUTE)))?;
            write_text_element(xml, TAG, &attribute.tag)?;
            write_text_element(xml, VALUE, &attribute.value)?;
            emit(xml, Event::End(BytesEnd::new(SAMPLE_ATTRIBUTE)))?;
        }
        emit(xml, Event::End(BytesEnd::new(SAMPLE_ATTRIBUTES)))?;
    }

    emit(xml, Event::End(BytesEnd::new(SAMPLE)))
}
