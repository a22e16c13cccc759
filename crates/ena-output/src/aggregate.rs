//! Merging per-sample documents into one `SAMPLE_SET`.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use tracing::{debug, info_span};

use ena_model::SampleRecord;

use crate::common::{SAMPLE_SET, emit, write_declaration};
use crate::curate::curate;
use crate::encode::encode_sample;
use crate::error::{OutputError, Result};

/// Combine per-sample documents into a single `SAMPLE_SET` document.
///
/// Each document loses its own XML declaration; the remaining fragments are
/// concatenated verbatim, in input order, inside one `SAMPLE_SET` element
/// under a single declaration.
pub fn aggregate<I, S>(documents: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut xml = Writer::new(Vec::new());
    let set_error = |message: String| OutputError::Serialization {
        alias: SAMPLE_SET.to_string(),
        message,
    };
    write_declaration(&mut xml).map_err(set_error)?;
    emit(&mut xml, Event::Start(BytesStart::new(SAMPLE_SET))).map_err(set_error)?;

    let mut count = 0usize;
    for (index, document) in documents.into_iter().enumerate() {
        let fragment = fragment_body(document.as_ref(), index)?;
        check_fragment(fragment, index)?;
        xml.get_mut().extend_from_slice(fragment.as_bytes());
        count += 1;
    }

    emit(&mut xml, Event::End(BytesEnd::new(SAMPLE_SET))).map_err(set_error)?;
    debug!(samples = count, "aggregated sample documents");
    String::from_utf8(xml.into_inner()).map_err(|error| set_error(error.to_string()))
}

/// Encode, curate and aggregate records into a compact `SAMPLE_SET` document.
pub fn render_sample_set(records: &[SampleRecord]) -> Result<String> {
    let span = info_span!("render", samples = records.len());
    let _guard = span.enter();

    let mut documents = Vec::with_capacity(records.len());
    for record in records {
        let document = curate(&encode_sample(record)?)?;
        documents.push(document);
    }
    aggregate(&documents)
}

/// The document with its leading declaration and following whitespace removed.
fn fragment_body(document: &str, index: usize) -> Result<&str> {
    let trimmed = document.trim_start_matches('\u{feff}').trim_start();
    let body = match trimmed.strip_prefix("<?xml") {
        Some(rest) => {
            let end = rest.find("?>").ok_or_else(|| OutputError::Fragment {
                index,
                reason: "unterminated XML declaration".to_string(),
            })?;
            rest[end + 2..].trim_start()
        }
        None => trimmed,
    };
    if body.trim().is_empty() {
        return Err(OutputError::Fragment {
            index,
            reason: "document has no root element".to_string(),
        });
    }
    Ok(body)
}

/// A fragment must be exactly one balanced element with nothing but
/// whitespace around it, and carry no further declarations.
fn check_fragment(fragment: &str, index: usize) -> Result<()> {
    let invalid = |reason: String| OutputError::Fragment { index, reason };
    let mut reader = Reader::from_str(fragment);
    let mut depth = 0usize;
    let mut roots = 0usize;
    loop {
        let event = reader
            .read_event()
            .map_err(|error| invalid(error.to_string()))?;
        match event {
            Event::Eof => break,
            Event::Decl(_) => return Err(invalid("nested XML declaration".to_string())),
            Event::Start(_) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Empty(_) if depth == 0 => roots += 1,
            Event::Text(text) if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) => {
                return Err(invalid("text outside the root element".to_string()));
            }
            Event::GeneralRef(_) | Event::CData(_) if depth == 0 => {
                return Err(invalid("text outside the root element".to_string()));
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(invalid("unclosed element".to_string()));
    }
    if roots != 1 {
        return Err(invalid(format!("expected one root element, found {roots}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const S1: &str = r#"<?xml version="1.0" encoding="UTF-8"?><SAMPLE alias="S1"><TITLE>A</TITLE></SAMPLE>"#;
    const S2: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<SAMPLE alias="S2"><TITLE>B</TITLE></SAMPLE>"#;

    #[test]
    fn wraps_fragments_in_order() {
        let set = aggregate([S1, S2]).expect("aggregate");
        insta::assert_snapshot!(set, @r#"<?xml version="1.0" encoding="UTF-8"?><SAMPLE_SET><SAMPLE alias="S1"><TITLE>A</TITLE></SAMPLE><SAMPLE alias="S2"><TITLE>B</TITLE></SAMPLE></SAMPLE_SET>"#);
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let set = aggregate(Vec::<String>::new()).expect("aggregate");
        assert_eq!(
            set,
            r#"<?xml version="1.0" encoding="UTF-8"?><SAMPLE_SET></SAMPLE_SET>"#
        );
    }

    #[test]
    fn accepts_fragments_without_declaration() {
        let set = aggregate([r#"<SAMPLE alias="S3"><TITLE>C</TITLE></SAMPLE>"#]).expect("aggregate");
        assert_eq!(set.matches("<?xml").count(), 1);
        assert!(set.contains(r#"<SAMPLE_SET><SAMPLE alias="S3">"#));
    }

    #[test]
    fn rejects_doubled_declaration() {
        let doubled = format!("{S1}{S1}");
        let err = aggregate([doubled.as_str()]).unwrap_err();
        assert!(matches!(err, OutputError::Fragment { index: 0, .. }));
    }

    #[test]
    fn rejects_empty_document() {
        let err = aggregate([S1, r#"<?xml version="1.0"?>"#]).unwrap_err();
        assert!(matches!(err, OutputError::Fragment { index: 1, .. }));
    }

    #[test]
    fn rejects_two_roots() {
        let err = aggregate(["<SAMPLE/><SAMPLE/>"]).unwrap_err();
        assert!(matches!(err, OutputError::Fragment { index: 0, .. }));
    }

    #[test]
    fn rejects_references_outside_the_root() {
        let err = aggregate(["&amp;<SAMPLE/>"]).unwrap_err();
        assert!(matches!(err, OutputError::Fragment { index: 0, .. }));
        let err = aggregate(["<SAMPLE/><![CDATA[x]]>"]).unwrap_err();
        assert!(matches!(err, OutputError::Fragment { index: 0, .. }));
    }
}
