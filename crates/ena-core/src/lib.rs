//! Row-to-sample transformation.
//!
//! A [`ColumnPlan`] classifies every header column once per table as either
//! a role column or a free-form attribute. Each row is then resolved against
//! the plan ([`resolve_row`]) and turned into a [`ena_model::SampleRecord`]
//! ([`build_record`]). [`build_records`] runs both steps over a whole table.

pub mod builder;
pub mod error;
pub mod plan;
pub mod resolve;

pub use builder::{BuildOutcome, BuildReport, RowPolicy, SkippedRow, build_record, build_records};
pub use error::{CoreError, Result};
pub use plan::{ColumnKind, ColumnPlan};
pub use resolve::{ResolvedRow, resolve_row};
