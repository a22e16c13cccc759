use thiserror::Error;

use crate::role::Role;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("no column name given for {role}")]
    EmptyColumnName { role: Role },
    #[error("column '{column}' is bound to both --{first} and --{second}")]
    DuplicateRoleColumn {
        column: String,
        first: Role,
        second: Role,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
