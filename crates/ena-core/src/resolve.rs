//! Per-row role resolution.

use ena_model::{Role, Row};

use crate::error::{CoreError, Result};
use crate::plan::ColumnPlan;

/// Row values split into role values and attribute pairs.
///
/// Borrowed from the row and plan; nothing is copied or transformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRow<'a> {
    pub line: u64,
    pub identifier: &'a str,
    pub title: &'a str,
    pub taxon_id: Option<&'a str>,
    pub scientific_name: Option<&'a str>,
    pub common_name: Option<&'a str>,
    /// `(column, value)` for every attribute column, in header order.
    pub attributes: Vec<(&'a str, &'a str)>,
}

/// Resolve one row against a plan.
///
/// Optional roles resolve to `None` when unbound or when the cell is blank.
/// A blank identifier or title is an error, as is a row whose field count
/// differs from the header.
pub fn resolve_row<'a>(plan: &'a ColumnPlan, row: &'a Row) -> Result<ResolvedRow<'a>> {
    if row.len() != plan.width() {
        return Err(CoreError::MalformedRow {
            line: row.line,
            expected: plan.width(),
            found: row.len(),
        });
    }

    let optional = |role: Role| {
        plan.position(role)
            .and_then(|index| row.get(index))
            .filter(|value| !value.trim().is_empty())
    };

    Ok(ResolvedRow {
        line: row.line,
        identifier: mandatory(plan, row, Role::Identifier)?,
        title: mandatory(plan, row, Role::Title)?,
        taxon_id: optional(Role::TaxonId),
        scientific_name: optional(Role::ScientificName),
        common_name: optional(Role::CommonName),
        attributes: plan
            .attribute_columns()
            .filter_map(|(index, column)| row.get(index).map(|value| (column, value)))
            .collect(),
    })
}

fn mandatory<'a>(plan: &'a ColumnPlan, row: &'a Row, role: Role) -> Result<&'a str> {
    let missing = || CoreError::MissingValue {
        line: row.line,
        role,
        column: plan
            .position(role)
            .and_then(|index| plan.headers().get(index))
            .cloned()
            .unwrap_or_default(),
    };
    let value = plan
        .position(role)
        .and_then(|index| row.get(index))
        .ok_or_else(missing)?;
    if value.trim().is_empty() {
        return Err(missing());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use ena_model::ColumnRoleMap;

    use super::*;

    fn plan(headers: &[&str], roles: &ColumnRoleMap) -> ColumnPlan {
        let headers: Vec<String> = headers.iter().map(|name| (*name).to_string()).collect();
        ColumnPlan::new(&headers, roles).expect("plan")
    }

    fn row(line: u64, fields: &[&str]) -> Row {
        Row::new(line, fields.iter().map(|value| (*value).to_string()).collect())
    }

    #[test]
    fn resolves_roles_and_attributes() {
        let roles = ColumnRoleMap::new("name", "title").with_taxon_id("taxon_id");
        let plan = plan(&["name", "title", "taxon_id", "depth_m"], &roles);
        let row = row(2, &["S1", "Soil sample", "9606", "1.2"]);
        let resolved = resolve_row(&plan, &row).expect("resolve");
        assert_eq!(resolved.identifier, "S1");
        assert_eq!(resolved.title, "Soil sample");
        assert_eq!(resolved.taxon_id, Some("9606"));
        assert_eq!(resolved.scientific_name, None);
        assert_eq!(resolved.common_name, None);
        assert_eq!(resolved.attributes, vec![("depth_m", "1.2")]);
    }

    #[test]
    fn blank_optional_value_is_absent() {
        let roles = ColumnRoleMap::new("name", "title").with_scientific_name("species");
        let plan = plan(&["name", "title", "species"], &roles);
        let row = row(3, &["S1", "Soil", "  "]);
        let resolved = resolve_row(&plan, &row).expect("resolve");
        assert_eq!(resolved.scientific_name, None);
        assert!(resolved.attributes.is_empty());
    }

    #[test]
    fn values_are_not_trimmed() {
        let roles = ColumnRoleMap::new("name", "title");
        let plan = plan(&["name", "title", "note"], &roles);
        let row = row(2, &[" S1", "Soil ", " x "]);
        let resolved = resolve_row(&plan, &row).expect("resolve");
        assert_eq!(resolved.identifier, " S1");
        assert_eq!(resolved.title, "Soil ");
        assert_eq!(resolved.attributes, vec![("note", " x ")]);
    }

    #[test]
    fn blank_title_is_an_error() {
        let roles = ColumnRoleMap::new("name", "title");
        let plan = plan(&["name", "title"], &roles);
        let row = row(4, &["S1", ""]);
        let err = resolve_row(&plan, &row).unwrap_err();
        assert_eq!(
            err,
            CoreError::MissingValue {
                line: 4,
                role: Role::Title,
                column: "title".to_string()
            }
        );
    }

    #[test]
    fn short_row_is_malformed() {
        let roles = ColumnRoleMap::new("name", "title");
        let plan = plan(&["name", "title", "depth_m"], &roles);
        let row = row(5, &["S1", "Soil"]);
        let err = resolve_row(&plan, &row).unwrap_err();
        assert_eq!(
            err,
            CoreError::MalformedRow {
                line: 5,
                expected: 3,
                found: 2
            }
        );
    }
}
