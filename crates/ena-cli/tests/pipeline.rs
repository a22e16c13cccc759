//! End-to-end conversion from a table on disk to a written sample set.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use ena_cli::pipeline::{ConvertRequest, convert};
use ena_core::{CoreError, RowPolicy};
use ena_ingest::{IngestError, IngestOptions};
use ena_model::{ColumnRoleMap, Role};

fn write_table(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("samples.tsv");
    fs::write(&path, contents).expect("write table");
    path
}

fn request(table: PathBuf, output: PathBuf) -> ConvertRequest {
    ConvertRequest {
        table,
        roles: ColumnRoleMap::new("name", "title").with_taxon_id("taxon_id"),
        ingest: IngestOptions::default(),
        policy: RowPolicy::FailFast,
        output,
        dry_run: false,
    }
}

#[test]
fn converts_soil_samples() {
    let dir = TempDir::new().expect("temp dir");
    let table = write_table(
        dir.path(),
        "name\ttitle\ttaxon_id\tdepth_m\nS1\tSoil sample\t9606\t1.2\nS2\tSoil sample\t9606\t1.2\n",
    );
    let output = dir.path().join("sample.xml");

    let result = convert(&request(table, output.clone())).expect("convert");
    assert_eq!(result.rows_read, 2);
    assert_eq!(result.samples, 2);
    assert!(!result.has_skipped());
    assert_eq!(result.output.as_deref(), Some(output.as_path()));

    let written = fs::read_to_string(&output).expect("read output");
    insta::assert_snapshot!(written, @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <SAMPLE_SET>
      <SAMPLE alias="S1">
        <TITLE>Soil sample</TITLE>
        <SAMPLE_NAME>
          <TAXON_ID>9606</TAXON_ID>
        </SAMPLE_NAME>
        <SAMPLE_ATTRIBUTES>
          <SAMPLE_ATTRIBUTE>
            <TAG>depth_m</TAG>
            <VALUE>1.2</VALUE>
          </SAMPLE_ATTRIBUTE>
        </SAMPLE_ATTRIBUTES>
      </SAMPLE>
      <SAMPLE alias="S2">
        <TITLE>Soil sample</TITLE>
        <SAMPLE_NAME>
          <TAXON_ID>9606</TAXON_ID>
        </SAMPLE_NAME>
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
fn creates_missing_output_directories() {
    let dir = TempDir::new().expect("temp dir");
    let table = write_table(dir.path(), "name\ttitle\ttaxon_id\nS1\tA\t9606\n");
    let output = dir.path().join("submission").join("xml").join("sample.xml");

    convert(&request(table, output.clone())).expect("convert");
    assert!(output.is_file());
}

#[test]
fn dry_run_leaves_no_file() {
    let dir = TempDir::new().expect("temp dir");
    let table = write_table(dir.path(), "name\ttitle\ttaxon_id\nS1\tA\t9606\n");
    let output = dir.path().join("sample.xml");
    let mut request = request(table, output.clone());
    request.dry_run = true;

    let result = convert(&request).expect("convert");
    assert_eq!(result.samples, 1);
    assert!(result.output.is_none());
    assert!(!output.exists());
}

#[test]
fn skip_policy_drops_short_rows() {
    let dir = TempDir::new().expect("temp dir");
    let table = write_table(
        dir.path(),
        "name\ttitle\ttaxon_id\nS1\tA\t9606\nS2\tB\nS3\tC\t9606\n",
    );
    let output = dir.path().join("sample.xml");
    let mut request = request(table, output.clone());
    request.policy = RowPolicy::Skip;

    let result = convert(&request).expect("convert");
    assert_eq!(result.rows_read, 3);
    assert_eq!(result.samples, 2);
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].line, 3);

    let written = fs::read_to_string(&output).expect("read output");
    assert!(written.contains(r#"<SAMPLE alias="S1">"#));
    assert!(!written.contains(r#"<SAMPLE alias="S2">"#));
    assert!(written.contains(r#"<SAMPLE alias="S3">"#));
}

#[test]
fn short_row_fails_by_default() {
    let dir = TempDir::new().expect("temp dir");
    let table = write_table(dir.path(), "name\ttitle\ttaxon_id\nS1\tA\n");
    let output = dir.path().join("sample.xml");

    let error = convert(&request(table, output.clone())).expect_err("malformed row");
    assert_eq!(
        error.downcast_ref::<CoreError>(),
        Some(&CoreError::MalformedRow {
            line: 2,
            expected: 3,
            found: 2,
        })
    );
    assert!(!output.exists());
}

#[test]
fn missing_role_column_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let table = write_table(dir.path(), "name\ttitle\nS1\tA\n");
    let output = dir.path().join("sample.xml");

    let error = convert(&request(table, output)).expect_err("missing column");
    assert_eq!(
        error.downcast_ref::<CoreError>(),
        Some(&CoreError::MissingRoleColumn {
            role: Role::TaxonId,
            column: "taxon_id".to_string(),
        })
    );
}

#[test]
fn missing_table_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let table = dir.path().join("absent.tsv");
    let output = dir.path().join("sample.xml");

    let error = convert(&request(table, output)).expect_err("missing table");
    assert!(matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::FileNotFound { .. })
    ));
    assert!(format!("{error:#}").contains("absent.tsv not found"));
}

#[test]
fn comma_delimited_table() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("samples.csv");
    fs::write(&path, "name,title,taxon_id,site\nS1,A,9606,\"north, upper\"\n").expect("write");
    let output = dir.path().join("sample.xml");
    let mut request = request(path, output.clone());
    request.ingest = IngestOptions::default().with_delimiter(b',');

    convert(&request).expect("convert");
    let written = fs::read_to_string(&output).expect("read output");
    assert!(written.contains("<VALUE>north, upper</VALUE>"));
}

#[test]
fn blank_cells_keep_their_whitespace() {
    let dir = TempDir::new().expect("temp dir");
    let table = write_table(dir.path(), "name\ttitle\ttaxon_id\tnote\nS1\tA\t9606\t  \n");
    let output = dir.path().join("sample.xml");

    convert(&request(table, output.clone())).expect("convert");
    let written = fs::read_to_string(&output).expect("read output");
    assert!(written.contains("<TAG>note</TAG>"));
    assert!(written.contains("<VALUE>  </VALUE>"));
}
