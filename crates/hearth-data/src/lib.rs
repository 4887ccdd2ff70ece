#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hearthlabs/hearth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod tables;

pub use error::{DataError, Result};
pub use tables::{FactorRow, LookupTables, ScoreRow};

/// A five-digit postal (ZIP) code.
pub type ZipCode = u32;

/// A census-tract identifier; several tracts can share one ZIP code.
pub type TractId = u64;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
