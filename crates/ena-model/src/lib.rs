//! Data model for ENA sample submission documents.
//!
//! - [`SampleTable`] / [`Row`]: the tabular metadata as read from disk
//! - [`Role`] / [`ColumnRoleMap`]: which columns feed the alias, title and
//!   `SAMPLE_NAME` fields
//! - [`SampleRecord`]: one `SAMPLE` element ready for encoding

pub mod error;
pub mod record;
pub mod role;
pub mod table;

pub use error::{ModelError, Result};
pub use record::{SampleAttribute, SampleName, SampleRecord};
pub use role::{ColumnRoleMap, Role};
pub use table::{Row, SampleTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_map_serializes_without_unbound_roles() {
        let roles = ColumnRoleMap::new("name", "title").with_taxon_id("taxon_id");
        let json = serde_json::to_string(&roles).expect("serialize roles");
        assert_eq!(
            json,
            r#"{"identifier":"name","title":"title","taxon_id":"taxon_id"}"#
        );
        let round: ColumnRoleMap = serde_json::from_str(&json).expect("deserialize roles");
        assert_eq!(round, roles);
    }

    #[test]
    fn record_serializes() {
        let mut record = SampleRecord::new("S1", "Soil sample");
        record.attributes.push(SampleAttribute::new("depth_m", "1.2"));
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["alias"], "S1");
        assert_eq!(json["attributes"][0]["tag"], "depth_m");
        assert!(json["sample_name"].is_null());
    }
}
