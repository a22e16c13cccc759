//! Column roles and the role-to-column binding supplied on the command line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Semantic purpose a table column can be bound to.
///
/// Variant order is the order roles are reported in and the order the
/// `SAMPLE_NAME` sub-fields are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sample alias, written as the `alias` attribute of `SAMPLE`.
    Identifier,
    /// Short description, written as `TITLE`.
    Title,
    /// NCBI taxonomy identifier (`SAMPLE_NAME/TAXON_ID`).
    TaxonId,
    /// Scientific name (`SAMPLE_NAME/SCIENTIFIC_NAME`).
    ScientificName,
    /// Common name (`SAMPLE_NAME/COMMON_NAME`).
    CommonName,
}

impl Role {
    /// Every role, in binding order.
    pub const ALL: [Role; 5] = [
        Role::Identifier,
        Role::Title,
        Role::TaxonId,
        Role::ScientificName,
        Role::CommonName,
    ];

    /// Roles that make up the `SAMPLE_NAME` group, in element order.
    pub const SAMPLE_NAME: [Role; 3] = [Role::TaxonId, Role::ScientificName, Role::CommonName];

    /// Identifier and title must be bound and non-empty for every sample.
    pub fn is_mandatory(self) -> bool {
        matches!(self, Role::Identifier | Role::Title)
    }

    /// Snake-case name, matching the command-line option that binds the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Identifier => "name",
            Role::Title => "title",
            Role::TaxonId => "taxon_id",
            Role::ScientificName => "scientific_name",
            Role::CommonName => "common_name",
        }
    }

    /// Element written for this role, `None` for the identifier which is an attribute.
    pub fn element_name(self) -> Option<&'static str> {
        match self {
            Role::Identifier => None,
            Role::Title => Some("TITLE"),
            Role::TaxonId => Some("TAXON_ID"),
            Role::ScientificName => Some("SCIENTIFIC_NAME"),
            Role::CommonName => Some("COMMON_NAME"),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binding of roles to table column names.
///
/// Identifier and title are always bound; the `SAMPLE_NAME` roles are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoleMap {
    pub identifier: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxon_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
}

impl ColumnRoleMap {
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            taxon_id: None,
            scientific_name: None,
            common_name: None,
        }
    }

    #[must_use]
    pub fn with_taxon_id(self, column: impl Into<String>) -> Self {
        self.with_optional(Role::TaxonId, Some(column.into()))
    }

    #[must_use]
    pub fn with_scientific_name(self, column: impl Into<String>) -> Self {
        self.with_optional(Role::ScientificName, Some(column.into()))
    }

    #[must_use]
    pub fn with_common_name(self, column: impl Into<String>) -> Self {
        self.with_optional(Role::CommonName, Some(column.into()))
    }

    /// Bind (or unbind, with `None`) an optional role.
    ///
    /// Mandatory roles are fixed at construction and are left untouched.
    #[must_use]
    pub fn with_optional(mut self, role: Role, column: Option<String>) -> Self {
        match role {
            Role::TaxonId => self.taxon_id = column,
            Role::ScientificName => self.scientific_name = column,
            Role::CommonName => self.common_name = column,
            Role::Identifier | Role::Title => {}
        }
        self
    }

    /// Column bound to `role`, if any.
    pub fn column(&self, role: Role) -> Option<&str> {
        match role {
            Role::Identifier => Some(self.identifier.as_str()),
            Role::Title => Some(self.title.as_str()),
            Role::TaxonId => self.taxon_id.as_deref(),
            Role::ScientificName => self.scientific_name.as_deref(),
            Role::CommonName => self.common_name.as_deref(),
        }
    }

    /// Bound roles with their column names, in [`Role::ALL`] order.
    pub fn bindings(&self) -> impl Iterator<Item = (Role, &str)> {
        Role::ALL
            .into_iter()
            .filter_map(|role| self.column(role).map(|column| (role, column)))
    }

    /// Check that every bound column name is non-empty and used by one role only.
    pub fn validate(&self) -> Result<()> {
        let mut seen: Vec<(Role, &str)> = Vec::with_capacity(Role::ALL.len());
        for (role, column) in self.bindings() {
            if column.trim().is_empty() {
                return Err(ModelError::EmptyColumnName { role });
            }
            if let Some((first, _)) = seen.iter().find(|(_, other)| *other == column) {
                return Err(ModelError::DuplicateRoleColumn {
                    column: column.to_string(),
                    first: *first,
                    second: role,
                });
            }
            seen.push((role, column));
        }
        Ok(())
    }
}
