#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hearthlabs/hearth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use hearth_api as api;
pub use hearth_data as data;
pub use hearth_score as score;

// Re-export the common surface
pub use hearth_data::{DataError, LookupTables, TractId, ZipCode};
pub use hearth_score::{Factor, Influence, RegionEstimate, ScoreSet, aggregate_zip};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
