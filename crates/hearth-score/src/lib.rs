#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hearthlabs/hearth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod factor;
pub mod model;
pub mod retrieve;

pub use aggregate::{MAX_KEY_FACTORS, aggregate_zip};
pub use factor::{Factor, Influence, NO_DESCRIPTION};
pub use model::{NO_DATA_AVERAGE, RegionEstimate, ScoreSet};
pub use retrieve::{fetch_factors, fetch_scores};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
