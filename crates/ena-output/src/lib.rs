//! ENA sample XML generation.
//!
//! This crate turns [`ena_model::SampleRecord`]s into a sample submission
//! document:
//!
//! - **Encoding** ([`encode_sample`]): one standalone `SAMPLE` document per record
//! - **Curation** ([`curate`]): removes generic-serializer artifacts such as
//!   `<item>` wrappers and attributed closing tags
//! - **Aggregation** ([`aggregate`]): merges documents under one `SAMPLE_SET`
//!   with a single XML declaration
//! - **Writing** ([`pretty_print`], [`write_sample_set`]): two-space indented
//!   UTF-8 output

mod aggregate;
mod common;
mod curate;
mod encode;
mod error;
mod pretty;
mod writer;

pub use aggregate::{aggregate, render_sample_set};
pub use common::{
    ALIAS, GENERIC_ITEM, SAMPLE, SAMPLE_ATTRIBUTE, SAMPLE_ATTRIBUTES, SAMPLE_NAME, SAMPLE_SET,
    TAG, TITLE, VALUE,
};
pub use curate::curate;
pub use encode::encode_sample;
pub use error::{OutputError, Result};
pub use pretty::pretty_print;
pub use writer::{DEFAULT_OUTPUT, write_sample_set};
