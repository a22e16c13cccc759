//! Table-wide column classification.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use ena_model::{ColumnRoleMap, Role};

use crate::error::{CoreError, Result};

/// What a header column feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Consumed by a role.
    Role(Role),
    /// Written as a `SAMPLE_ATTRIBUTE`.
    Attribute,
}

/// Classification of every header column, computed once per table.
///
/// Every column maps to exactly one [`ColumnKind`]; a column bound to a role
/// is never also an attribute.
#[derive(Debug, Clone)]
pub struct ColumnPlan {
    headers: Vec<String>,
    kinds: Vec<ColumnKind>,
    positions: BTreeMap<Role, usize>,
}

impl ColumnPlan {
    /// Classify `headers` against `roles`.
    ///
    /// Fails on duplicate header names and on any bound column that is not
    /// in the header, optional roles included.
    pub fn new(headers: &[String], roles: &ColumnRoleMap) -> Result<Self> {
        roles.validate()?;

        let mut seen = HashSet::with_capacity(headers.len());
        for header in headers {
            if !seen.insert(header.as_str()) {
                return Err(CoreError::DuplicateHeader {
                    column: header.clone(),
                });
            }
        }

        let mut positions = BTreeMap::new();
        for (role, column) in roles.bindings() {
            let index = headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| CoreError::MissingRoleColumn {
                    role,
                    column: column.to_string(),
                })?;
            positions.insert(role, index);
        }

        let mut kinds = vec![ColumnKind::Attribute; headers.len()];
        for (role, index) in &positions {
            kinds[*index] = ColumnKind::Role(*role);
        }
        debug!(
            columns = headers.len(),
            roles = positions.len(),
            attributes = headers.len() - positions.len(),
            "classified columns"
        );

        Ok(Self {
            headers: headers.to_vec(),
            kinds,
            positions,
        })
    }

    /// Number of columns every row must have.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Kind of the column at `index`.
    pub fn kind(&self, index: usize) -> Option<ColumnKind> {
        self.kinds.get(index).copied()
    }

    pub fn kinds(&self) -> &[ColumnKind] {
        &self.kinds
    }

    /// Column position bound to `role`.
    pub fn position(&self, role: Role) -> Option<usize> {
        self.positions.get(&role).copied()
    }

    /// Attribute columns as `(index, name)` in header order.
    pub fn attribute_columns(&self) -> impl Iterator<Item = (usize, &str)> {
        self.headers
            .iter()
            .zip(&self.kinds)
            .enumerate()
            .filter(|(_, (_, kind))| **kind == ColumnKind::Attribute)
            .map(|(index, (name, _))| (index, name.as_str()))
    }
}
