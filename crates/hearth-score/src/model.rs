//! Score types for a region's affordability estimate.

use serde::{Deserialize, Serialize};

use crate::factor::Factor;

/// `average` value reserved to signal "no usable data" on the wire.
pub const NO_DATA_AVERAGE: f64 = -1.0;

/// Estimates from the three predictive models plus their mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    /// Linear model estimate.
    #[serde(rename = "linear_hai")]
    pub linear: f64,

    /// Random-forest model estimate.
    #[serde(rename = "forest_hai")]
    pub forest: f64,

    /// Neural-network model estimate.
    #[serde(rename = "nn_hai")]
    pub neural_network: f64,

    /// Arithmetic mean of the three model estimates, or
    /// [`NO_DATA_AVERAGE`] when no data was available.
    #[serde(rename = "average_hai")]
    pub average: f64,
}

impl ScoreSet {
    /// Build a score set from the three model estimates, deriving the
    /// average as their arithmetic mean.
    pub const fn from_model_scores(linear: f64, forest: f64, neural_network: f64) -> Self {
        Self {
            linear,
            forest,
            neural_network,
            average: (linear + forest + neural_network) / 3.0,
        }
    }

    /// The wire sentinel for "no usable data": zeroed model scores and
    /// a negative average.
    pub const fn no_data() -> Self {
        Self {
            linear: 0.0,
            forest: 0.0,
            neural_network: 0.0,
            average: NO_DATA_AVERAGE,
        }
    }

    /// Whether this set carries real model output rather than the
    /// sentinel.
    pub const fn has_data(&self) -> bool {
        self.average >= 0.0
    }
}

/// The aggregated estimate for one postal code.
///
/// "No usable data" is an explicit variant rather than a magic value;
/// serialization maps [`RegionEstimate::NoData`] back to the sentinel
/// score set the external contract expects.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionEstimate {
    /// At least one tract yielded both scores and factors.
    Scored {
        /// Mean model scores across the successfully retrieved tracts.
        scores: ScoreSet,
        /// Top contributing factors, ranked by absolute averaged
        /// magnitude, at most [`crate::MAX_KEY_FACTORS`] entries.
        key_factors: Vec<Factor>,
    },
    /// Every resolved tract failed score or factor retrieval.
    NoData,
}

impl RegionEstimate {
    /// The score set to report, substituting the sentinel for
    /// [`RegionEstimate::NoData`].
    pub const fn scores(&self) -> ScoreSet {
        match self {
            Self::Scored { scores, .. } => *scores,
            Self::NoData => ScoreSet::no_data(),
        }
    }

    /// The ranked factor list; empty for [`RegionEstimate::NoData`].
    pub fn key_factors(&self) -> &[Factor] {
        match self {
            Self::Scored { key_factors, .. } => key_factors,
            Self::NoData => &[],
        }
    }
}
