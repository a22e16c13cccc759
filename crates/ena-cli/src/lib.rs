//! Library components of the `ena-sample-xml` command-line tool.

pub mod logging;
pub mod pipeline;
