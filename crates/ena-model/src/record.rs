//! Sample records as written to the submission document.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// One `SAMPLE` element.
///
/// Children are always written as `TITLE`, then `SAMPLE_NAME` when present,
/// then `SAMPLE_ATTRIBUTES` when non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Value of the `alias` attribute.
    pub alias: String,
    pub title: String,
    pub sample_name: Option<SampleName>,
    pub attributes: Vec<SampleAttribute>,
}

impl SampleRecord {
    pub fn new(alias: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            title: title.into(),
            sample_name: None,
            attributes: Vec::new(),
        }
    }
}

/// The `SAMPLE_NAME` group. Never constructed with every field absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleName {
    pub taxon_id: Option<String>,
    pub scientific_name: Option<String>,
    pub common_name: Option<String>,
}

impl SampleName {
    /// Build the group, or `None` when all three parts are absent.
    pub fn from_parts(
        taxon_id: Option<String>,
        scientific_name: Option<String>,
        common_name: Option<String>,
    ) -> Option<Self> {
        if taxon_id.is_none() && scientific_name.is_none() && common_name.is_none() {
            return None;
        }
        Some(Self {
            taxon_id,
            scientific_name,
            common_name,
        })
    }

    /// Present fields as `(element, value)` in `TAXON_ID`, `SCIENTIFIC_NAME`,
    /// `COMMON_NAME` order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        Role::SAMPLE_NAME.into_iter().filter_map(|role| {
            let value = match role {
                Role::TaxonId => self.taxon_id.as_deref(),
                Role::ScientificName => self.scientific_name.as_deref(),
                Role::CommonName => self.common_name.as_deref(),
                Role::Identifier | Role::Title => None,
            }?;
            Some((role.element_name()?, value))
        })
    }
}

/// One `SAMPLE_ATTRIBUTE` tag/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleAttribute {
    pub tag: String,
    pub value: String,
}

impl SampleAttribute {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_name_absent_when_empty() {
        assert_eq!(SampleName::from_parts(None, None, None), None);
    }

    #[test]
    fn sample_name_fields_keep_fixed_order() {
        let name = SampleName::from_parts(
            Some("9606".into()),
            None,
            Some("human".into()),
        )
        .expect("sample name");
        let fields: Vec<_> = name.fields().collect();
        assert_eq!(fields, vec![("TAXON_ID", "9606"), ("COMMON_NAME", "human")]);
    }
}
