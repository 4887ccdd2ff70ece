//! Per-tract retrieval of model scores and factor contributions.

use hearth_data::{LookupTables, Result, TractId};

use crate::factor::{Factor, Influence, NO_DESCRIPTION};
use crate::model::ScoreSet;

/// Fetch the three model scores for a single tract.
///
/// Fails with [`hearth_data::DataError::ScoresNotFound`] when the tract
/// has no row in the score table.
pub fn fetch_scores(tables: &LookupTables, tract: TractId) -> Result<ScoreSet> {
    let row = tables.score_row(tract)?;
    Ok(ScoreSet::from_model_scores(
        row.linear,
        row.forest,
        row.neural_network,
    ))
}

/// Fetch the named factor contributions for a single tract.
///
/// Each table column becomes one [`Factor`] with its influence label
/// derived from the raw value and its description resolved from the
/// name map, falling back to [`NO_DESCRIPTION`].
pub fn fetch_factors(tables: &LookupTables, tract: TractId) -> Result<Vec<Factor>> {
    let row = tables.factor_row(tract)?;
    Ok(row
        .entries
        .iter()
        .map(|(name, value)| Factor {
            name: name.clone(),
            description: tables
                .description(name)
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            influence: Influence::from_raw(*value),
            score: *value,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hearth_data::DataError;

    const ZIP_TRACT_CSV: &str = "ZIP,TRACT\n32246,12031014421\n";
    const SCORE_CSV: &str = "Geo ID,linear_hai,forest_hai,nn_hai\n12031014421,0.7,0.6,0.65\n";
    const FACTOR_CSV: &str = "\
Geo ID,bias,linear_hai,median_rent,vacancy_rate
12031014421,0.05,0.7,-2.1,3.4
";
    const DESC_JSON: &str = r#"{"median_rent": "Median gross rent."}"#;

    fn tables() -> LookupTables {
        LookupTables::from_readers(
            ZIP_TRACT_CSV.as_bytes(),
            SCORE_CSV.as_bytes(),
            FACTOR_CSV.as_bytes(),
            DESC_JSON.as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn test_fetch_scores_derives_average() {
        let scores = fetch_scores(&tables(), 12031014421).unwrap();
        assert_eq!(scores.linear, 0.7);
        assert_eq!(scores.forest, 0.6);
        assert_eq!(scores.neural_network, 0.65);
        assert_relative_eq!(scores.average, 0.65, epsilon = 1e-12);
    }

    #[test]
    fn test_fetch_scores_unknown_tract() {
        assert!(matches!(
            fetch_scores(&tables(), 7).unwrap_err(),
            DataError::ScoresNotFound(7)
        ));
    }

    #[test]
    fn test_fetch_factors_labels_and_descriptions() {
        let factors = fetch_factors(&tables(), 12031014421).unwrap();
        assert_eq!(factors.len(), 2);

        assert_eq!(factors[0].name, "median_rent");
        assert_eq!(factors[0].influence, Influence::Positive);
        assert_eq!(factors[0].score, -2.1);
        assert_eq!(factors[0].description, "Median gross rent.");

        assert_eq!(factors[1].name, "vacancy_rate");
        assert_eq!(factors[1].influence, Influence::Negative);
        assert_eq!(factors[1].description, NO_DESCRIPTION);
    }

    #[test]
    fn test_fetch_factors_unknown_tract() {
        assert!(matches!(
            fetch_factors(&tables(), 7).unwrap_err(),
            DataError::FactorsNotFound(7)
        ));
    }
}
