//! Named factor contributions and their influence direction.

use serde::{Deserialize, Serialize};

/// Placeholder description for factors absent from the description map.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Direction of a factor's effect on affordability.
///
/// The convention is inherited from the model outputs: a raw
/// contribution at or below zero pushes the index in the favorable
/// direction and is labeled positive. The label is assigned from the
/// raw per-tract value and never recomputed after aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Influence {
    /// Favorable effect (raw contribution `<= 0`).
    Positive,
    /// Unfavorable effect (raw contribution `> 0`).
    Negative,
}

impl Influence {
    /// Derive the influence label from a raw factor contribution.
    pub const fn from_raw(value: f64) -> Self {
        if value <= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// A named contributor to a tract or region score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    /// Factor name, matching the factor table's column header.
    pub name: String,

    /// Human-readable description, or [`NO_DESCRIPTION`].
    pub description: String,

    /// Direction label, derived from the first-observed raw value.
    pub influence: Influence,

    /// Contribution magnitude; raw per tract, averaged after merging.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-2.1, Influence::Positive)]
    #[case(0.0, Influence::Positive)]
    #[case(0.1, Influence::Negative)]
    #[case(3.4, Influence::Negative)]
    fn test_influence_sign_convention(#[case] raw: f64, #[case] expected: Influence) {
        assert_eq!(Influence::from_raw(raw), expected);
    }

    #[test]
    fn test_influence_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Influence::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&Influence::Negative).unwrap(),
            "\"negative\""
        );
    }
}
