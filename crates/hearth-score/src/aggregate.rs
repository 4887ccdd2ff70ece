//! Regional aggregation: fold per-tract model output into one estimate.

use std::cmp::Ordering;
use std::collections::HashMap;

use hearth_data::{LookupTables, Result, TractId, ZipCode};
use tracing::warn;

use crate::factor::Factor;
use crate::model::{RegionEstimate, ScoreSet};
use crate::retrieve::{fetch_factors, fetch_scores};

/// Maximum number of ranked factors reported for a region.
pub const MAX_KEY_FACTORS: usize = 5;

/// Aggregate all tracts mapped to `zip` into one regional estimate.
///
/// Resolution failure (a ZIP with no crosswalk rows) is fatal and
/// surfaces as [`hearth_data::DataError::ZipNotFound`]. Per-tract
/// lookup misses are recoverable: the tract is dropped as a unit (a
/// tract never contributes scores without factors or vice versa) and
/// aggregation continues. When every tract is dropped the result is
/// [`RegionEstimate::NoData`], not an error.
pub fn aggregate_zip(tables: &LookupTables, zip: ZipCode) -> Result<RegionEstimate> {
    let tracts = tables.tracts_for_zip(zip)?;

    let mut score_sets: Vec<ScoreSet> = Vec::with_capacity(tracts.len());
    let mut factor_lists: Vec<Vec<Factor>> = Vec::with_capacity(tracts.len());
    for &tract in tracts {
        match fetch_tract(tables, tract) {
            Ok((scores, factors)) => {
                score_sets.push(scores);
                factor_lists.push(factors);
            }
            Err(err) if err.is_not_found() => {
                warn!(zip, tract, %err, "skipping tract with incomplete model output");
            }
            Err(err) => return Err(err),
        }
    }

    if score_sets.is_empty() {
        return Ok(RegionEstimate::NoData);
    }

    let k = score_sets.len() as f64;
    let scores = ScoreSet::from_model_scores(
        score_sets.iter().map(|s| s.linear).sum::<f64>() / k,
        score_sets.iter().map(|s| s.forest).sum::<f64>() / k,
        score_sets.iter().map(|s| s.neural_network).sum::<f64>() / k,
    );

    Ok(RegionEstimate::Scored {
        scores,
        key_factors: merge_factors(factor_lists, score_sets.len()),
    })
}

/// Fetch scores and factors for one tract as a unit.
fn fetch_tract(tables: &LookupTables, tract: TractId) -> Result<(ScoreSet, Vec<Factor>)> {
    let scores = fetch_scores(tables, tract)?;
    let factors = fetch_factors(tables, tract)?;
    Ok((scores, factors))
}

/// Merge per-tract factor lists into one ranked top-N list.
///
/// Contributions are summed per factor name and divided by the number
/// of successful tracts, not the number of tracts where the factor
/// appears; a factor missing from some tracts is under-weighted in
/// proportion, reflecting its average effect across the whole region.
/// Influence and description stick to the first observation of each
/// name. The final sort is stable, so equal magnitudes keep first-seen
/// order.
fn merge_factors(factor_lists: Vec<Vec<Factor>>, successful_tracts: usize) -> Vec<Factor> {
    let mut merged: Vec<Factor> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();
    for factor in factor_lists.into_iter().flatten() {
        match index_by_name.get(&factor.name) {
            Some(&idx) => merged[idx].score += factor.score,
            None => {
                index_by_name.insert(factor.name.clone(), merged.len());
                merged.push(factor);
            }
        }
    }

    let k = successful_tracts as f64;
    for factor in &mut merged {
        factor.score /= k;
    }

    merged.sort_by(|a, b| {
        b.score
            .abs()
            .partial_cmp(&a.score.abs())
            .unwrap_or(Ordering::Equal)
    });
    merged.truncate(MAX_KEY_FACTORS);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factor::Influence;

    fn factor(name: &str, score: f64) -> Factor {
        Factor {
            name: name.to_string(),
            description: String::new(),
            influence: Influence::from_raw(score),
            score,
        }
    }

    #[test]
    fn test_merge_divides_by_successful_tracts() {
        let merged = merge_factors(
            vec![
                vec![factor("rent", -2.0), factor("vacancy", 1.0)],
                vec![factor("rent", -4.0)],
            ],
            2,
        );

        // vacancy appears once but is still divided by k = 2.
        assert_eq!(merged[0].name, "rent");
        assert_eq!(merged[0].score, -3.0);
        assert_eq!(merged[1].name, "vacancy");
        assert_eq!(merged[1].score, 0.5);
    }

    #[test]
    fn test_merge_keeps_first_seen_influence() {
        let merged = merge_factors(
            vec![vec![factor("rent", -1.0)], vec![factor("rent", 5.0)]],
            2,
        );

        // Summed magnitude crosses sign; the label does not move.
        assert_eq!(merged[0].score, 2.0);
        assert_eq!(merged[0].influence, Influence::Positive);
    }

    #[test]
    fn test_merge_ranks_by_absolute_magnitude() {
        let merged = merge_factors(
            vec![vec![
                factor("a", 0.1),
                factor("b", -3.0),
                factor("c", 2.0),
                factor("d", -0.2),
                factor("e", 1.5),
                factor("f", 0.05),
            ]],
            1,
        );

        let names: Vec<&str> = merged.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "e", "d", "a"]);
        assert_eq!(merged.len(), MAX_KEY_FACTORS);
        for pair in merged.windows(2) {
            assert!(pair[0].score.abs() >= pair[1].score.abs());
        }
    }

    #[test]
    fn test_merge_ties_keep_first_seen_order() {
        let merged = merge_factors(
            vec![vec![factor("first", 1.0), factor("second", -1.0)]],
            1,
        );
        assert_eq!(merged[0].name, "first");
        assert_eq!(merged[1].name, "second");
    }
}
