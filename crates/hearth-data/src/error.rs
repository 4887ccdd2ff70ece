//! Error types for lookup-table operations.

use thiserror::Error;

use crate::{TractId, ZipCode};

/// Result type for lookup-table operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading or querying the lookup tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// No census tract is mapped to the given ZIP code.
    #[error("no census tracts found for ZIP code {0}")]
    ZipNotFound(ZipCode),

    /// The score table has no row for the given tract.
    #[error("no model scores found for tract {0}")]
    ScoresNotFound(TractId),

    /// The factor table has no row for the given tract.
    #[error("no factor contributions found for tract {0}")]
    FactorsNotFound(TractId),

    /// A required column is absent from a table header.
    #[error("missing column {column:?} in {table}")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
        /// Table the column was expected in.
        table: String,
    },

    /// A cell could not be parsed as the expected type.
    #[error("parse error in {table}: {reason}")]
    Parse {
        /// Table the bad cell came from.
        table: String,
        /// What went wrong.
        reason: String,
    },

    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON reading error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Whether this error is a key miss rather than table corruption.
    ///
    /// Key misses against the score and factor tables are recoverable
    /// during aggregation; anything else indicates bad source data and
    /// should surface.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ZipNotFound(_) | Self::ScoresNotFound(_) | Self::FactorsNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(DataError::ZipNotFound(32246).is_not_found());
        assert!(DataError::ScoresNotFound(12031014421).is_not_found());
        assert!(DataError::FactorsNotFound(12031014421).is_not_found());
        assert!(
            !DataError::Parse {
                table: "HAI-Lookup-Table.csv".into(),
                reason: "bad float".into(),
            }
            .is_not_found()
        );
    }

    #[test]
    fn test_display_includes_key() {
        let err = DataError::ZipNotFound(32246);
        assert!(err.to_string().contains("32246"));
    }
}
