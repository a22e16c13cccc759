//! In-memory sample table.

use serde::{Deserialize, Serialize};

/// One data line of the input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// 1-based line number in the source file.
    pub line: u64,
    /// Raw cell values, positionally aligned with [`SampleTable::headers`].
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Header plus rows, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl SampleTable {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate a row as `(column, value)` pairs in header order.
    ///
    /// Pairs stop at the shorter of the header and the row.
    pub fn cells<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(row.fields.iter().map(String::as_str))
    }
}
