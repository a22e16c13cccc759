//! Sample record construction.

use tracing::{debug, info, info_span, warn};

use ena_model::{ColumnRoleMap, SampleAttribute, SampleName, SampleRecord, SampleTable};

use crate::error::{CoreError, Result};
use crate::plan::ColumnPlan;
use crate::resolve::{ResolvedRow, resolve_row};

/// How rows whose field count differs from the header are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Abort the run on the first malformed row.
    #[default]
    FailFast,
    /// Log the row, record it in the report and continue.
    Skip,
}

/// A row left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

/// Counters for one build run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub rows_read: usize,
    pub skipped: Vec<SkippedRow>,
}

impl BuildReport {
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub records: Vec<SampleRecord>,
    pub report: BuildReport,
}

/// Build the `SAMPLE` record for one resolved row.
///
/// `SAMPLE_NAME` is omitted when none of its parts resolved, and attributes
/// keep the header order of their columns.
pub fn build_record(resolved: &ResolvedRow<'_>) -> SampleRecord {
    SampleRecord {
        alias: resolved.identifier.to_string(),
        title: resolved.title.to_string(),
        sample_name: SampleName::from_parts(
            resolved.taxon_id.map(str::to_string),
            resolved.scientific_name.map(str::to_string),
            resolved.common_name.map(str::to_string),
        ),
        attributes: resolved
            .attributes
            .iter()
            .map(|(tag, value)| SampleAttribute::new(*tag, *value))
            .collect(),
    }
}

/// Build one record per table row, in table order.
///
/// Column roles are resolved once for the whole table before any row is
/// read. Missing identifier or title values always abort; malformed rows
/// follow `policy`.
pub fn build_records(
    table: &SampleTable,
    roles: &ColumnRoleMap,
    policy: RowPolicy,
) -> Result<BuildOutcome> {
    let span = info_span!("build", rows = table.len());
    let _guard = span.enter();

    let plan = ColumnPlan::new(&table.headers, roles)?;
    let mut records = Vec::with_capacity(table.len());
    let mut report = BuildReport {
        rows_read: table.len(),
        skipped: Vec::new(),
    };

    for row in &table.rows {
        match resolve_row(&plan, row) {
            Ok(resolved) => {
                let record = build_record(&resolved);
                debug!(
                    line = row.line,
                    has_sample_name = record.sample_name.is_some(),
                    attributes = record.attributes.len(),
                    "built sample"
                );
                records.push(record);
            }
            Err(error @ CoreError::MalformedRow { .. }) if policy == RowPolicy::Skip => {
                warn!(line = row.line, %error, "skipping row");
                report.skipped.push(SkippedRow {
                    line: row.line,
                    reason: error.to_string(),
                });
            }
            Err(error) => return Err(error),
        }
    }

    info!(
        samples = records.len(),
        skipped = report.skipped.len(),
        "built sample records"
    );
    Ok(BuildOutcome { records, report })
}
