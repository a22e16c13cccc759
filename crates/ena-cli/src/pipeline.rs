//! Table-to-sample-set pipeline: ingest, build, render, write.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ena_core::{RowPolicy, SkippedRow, build_records};
use ena_ingest::{IngestOptions, read_sample_table};
use ena_model::ColumnRoleMap;
use ena_output::{render_sample_set, write_sample_set};

/// Everything needed for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub table: PathBuf,
    pub roles: ColumnRoleMap,
    pub ingest: IngestOptions,
    pub policy: RowPolicy,
    pub output: PathBuf,
    /// Build and render everything but do not write the output file.
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub table: PathBuf,
    /// Output path, `None` on a dry run.
    pub output: Option<PathBuf>,
    pub rows_read: usize,
    pub samples: usize,
    pub skipped: Vec<SkippedRow>,
}

impl ConvertResult {
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

pub fn convert(request: &ConvertRequest) -> Result<ConvertResult> {
    let span = info_span!("convert", table = %request.table.display());
    let _guard = span.enter();

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let start = Instant::now();
    let table = read_sample_table(&request.table, &request.ingest)
        .with_context(|| format!("read table {}", request.table.display()))?;

    // =========================================================================
    // Stage 2: Build sample records
    // =========================================================================
    let outcome = build_records(&table, &request.roles, request.policy)
        .context("build sample records")?;

    // =========================================================================
    // Stage 3: Render and write
    // =========================================================================
    let document = render_sample_set(&outcome.records).context("render sample set")?;
    let output = if request.dry_run {
        info!("dry run, skipping output");
        None
    } else {
        write_sample_set(&request.output, &document)
            .with_context(|| format!("write {}", request.output.display()))?;
        Some(request.output.clone())
    };

    info!(
        samples = outcome.records.len(),
        skipped = outcome.report.skipped.len(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    Ok(ConvertResult {
        table: request.table.clone(),
        output,
        rows_read: outcome.report.rows_read,
        samples: outcome.records.len(),
        skipped: outcome.report.skipped,
    })
}
