#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hearthlabs/hearth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod routes;
pub mod schemas;

pub use routes::{ApiError, AppState, router};
pub use schemas::{HealthResponse, ScoreRequest, ScoreResponse};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
