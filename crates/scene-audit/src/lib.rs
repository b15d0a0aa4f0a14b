//! # Scene Audit
//!
//! Data-quality sweeps over directories of ASCII scene files, built on the
//! [`scene_scan`] scanners.
//!
//! The audit walks a tree for scene files, runs the per-file asset-id scan,
//! and aggregates the findings into a deterministic, serializable report:
//! scene file → names of nodes whose asset-id payload carries a sign
//! character. Clean files never appear in the report.

mod audit;
mod error;
mod report;

pub use audit::{audit_dir, audit_file};
pub use error::{AuditError, Result};
pub use report::AssetIdReport;
