//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ena_core::RowPolicy;
use ena_ingest::IngestOptions;
use ena_model::{ColumnRoleMap, Role};
use ena_output::DEFAULT_OUTPUT;

#[derive(Parser)]
#[command(
    name = "ena-sample-xml",
    version,
    about = "Create an XML file to submit sample objects to the ENA",
    long_about = "Create an XML file to submit sample objects to the ENA.\n\n\
                  Reads a delimited metadata table (first line as header, one line per\n\
                  sample) and writes one <SAMPLE> per row inside a <SAMPLE_SET>.\n\
                  Columns not bound to a field become <SAMPLE_ATTRIBUTE> entries."
)]
pub struct Cli {
    /// Path to the metadata table (tab-delimited unless --delimiter is given).
    ///
    /// Each header must be unique. One column holds the unique sample name,
    /// one the title; any other column is added as a sample attribute.
    #[arg(long = "table", visible_alias = "table-fp", value_name = "PATH")]
    pub table: PathBuf,

    /// Column holding the sample alias.
    #[arg(short = 'n', long = "name", value_name = "COLUMN")]
    pub name: String,

    /// Column holding the <TITLE> field.
    #[arg(long = "title", value_name = "COLUMN")]
    pub title: String,

    /// Column holding the <TAXON_ID> field.
    #[arg(long = "taxon-id", value_name = "COLUMN")]
    pub taxon_id: Option<String>,

    /// Column holding the <SCIENTIFIC_NAME> field.
    #[arg(short = 's', long = "scientific-name", value_name = "COLUMN")]
    pub scientific_name: Option<String>,

    /// Column holding the <COMMON_NAME> field.
    #[arg(short = 'c', long = "common-name", value_name = "COLUMN")]
    pub common_name: Option<String>,

    /// Path to output file.
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Field delimiter: a single ASCII character, or `tab`.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = "tab", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Skip rows whose field count differs from the header instead of failing.
    #[arg(long = "skip-malformed")]
    pub skip_malformed: bool,

    /// Build and validate the document without writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn roles(&self) -> ColumnRoleMap {
        ColumnRoleMap::new(&self.name, &self.title)
            .with_optional(Role::TaxonId, self.taxon_id.clone())
            .with_optional(Role::ScientificName, self.scientific_name.clone())
            .with_optional(Role::CommonName, self.common_name.clone())
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions::default().with_delimiter(self.delimiter)
    }

    pub fn row_policy(&self) -> RowPolicy {
        if self.skip_malformed {
            RowPolicy::Skip
        } else {
            RowPolicy::FailFast
        }
    }
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() && *byte != b'\n' && *byte != b'"' => Ok(*byte),
            _ => Err(format!(
                "expected a single ASCII character or `tab`, got '{value}'"
            )),
        },
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
