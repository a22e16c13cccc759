use thiserror::Error;

use ena_model::{ModelError, Role};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("header '{column}' appears more than once")]
    DuplicateHeader { column: String },
    #[error("column '{column}' bound to {role} is not in the table header")]
    MissingRoleColumn { role: Role, column: String },
    #[error("line {line}: no value in column '{column}' for {role}")]
    MissingValue {
        line: u64,
        role: Role,
        column: String,
    },
    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
