//! In-memory lookup tables for ZIP resolution and per-tract model output.
//!
//! The source data is three CSV tables and one JSON map, all read-only.
//! They are loaded once into exact-match indexes; queries never touch
//! the filesystem.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{DataError, Result};
use crate::{TractId, ZipCode};

/// File name of the ZIP-to-tract crosswalk table.
pub const ZIP_TRACT_FILE: &str = "ZIP_TRACT_062025.csv";

/// File name of the per-tract model score table.
pub const SCORE_FILE: &str = "HAI-Lookup-Table.csv";

/// File name of the per-tract factor contribution table.
pub const FACTOR_FILE: &str = "HAI-Partial-Outputs.csv";

/// File name of the factor-name to description map.
pub const DESCRIPTION_FILE: &str = "name_desc_map.json";

/// Key column shared by the score and factor tables.
const GEO_ID_COLUMN: &str = "Geo ID";

/// Factor-table columns that are not factors: the key, the regression
/// bias term, and the linear model's own output.
const FACTOR_ADMIN_COLUMNS: [&str; 3] = [GEO_ID_COLUMN, "bias", "linear_hai"];

#[derive(Debug, Deserialize)]
struct ZipTractRecord {
    #[serde(rename = "ZIP")]
    zip: ZipCode,
    #[serde(rename = "TRACT")]
    tract: TractId,
}

#[derive(Debug, Deserialize)]
struct ScoreRecord {
    #[serde(rename = "Geo ID")]
    geo_id: TractId,
    linear_hai: f64,
    forest_hai: f64,
    nn_hai: f64,
}

/// Raw model scores for a single census tract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRow {
    /// Linear model estimate.
    pub linear: f64,
    /// Random-forest model estimate.
    pub forest: f64,
    /// Neural-network model estimate.
    pub neural_network: f64,
}

/// Named factor contributions for a single census tract.
///
/// Entries keep the table's header column order, which downstream
/// merging relies on for its first-seen tie-break rules.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorRow {
    /// `(factor name, raw contribution)` pairs in column order.
    pub entries: Vec<(String, f64)>,
}

/// Exact-match indexes over the four read-only source tables.
#[derive(Debug)]
pub struct LookupTables {
    zip_to_tracts: HashMap<ZipCode, Vec<TractId>>,
    scores: HashMap<TractId, ScoreRow>,
    factors: HashMap<TractId, FactorRow>,
    descriptions: HashMap<String, String>,
}

impl LookupTables {
    /// Load all four tables from their conventional file names in `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let tables = Self::from_readers(
            File::open(dir.join(ZIP_TRACT_FILE))?,
            File::open(dir.join(SCORE_FILE))?,
            File::open(dir.join(FACTOR_FILE))?,
            File::open(dir.join(DESCRIPTION_FILE))?,
        )?;
        info!(
            zips = tables.zip_to_tracts.len(),
            scored_tracts = tables.scores.len(),
            factor_tracts = tables.factors.len(),
            descriptions = tables.descriptions.len(),
            "loaded lookup tables from {}",
            dir.display()
        );
        Ok(tables)
    }

    /// Build the indexes from raw readers.
    ///
    /// Useful for embedded data and tests; [`LookupTables::load`] is a
    /// thin file-opening wrapper over this.
    pub fn from_readers(
        zip_tract: impl Read,
        scores: impl Read,
        factors: impl Read,
        descriptions: impl Read,
    ) -> Result<Self> {
        Ok(Self {
            zip_to_tracts: read_zip_tract(zip_tract)?,
            scores: read_scores(scores)?,
            factors: read_factors(factors)?,
            descriptions: serde_json::from_reader(descriptions)?,
        })
    }

    /// All census tracts mapped to `zip`, in table row order.
    ///
    /// Duplicate tract ids are preserved: the aggregator divides by the
    /// count of successful retrievals, so each crosswalk row counts.
    pub fn tracts_for_zip(&self, zip: ZipCode) -> Result<&[TractId]> {
        self.zip_to_tracts
            .get(&zip)
            .map(Vec::as_slice)
            .ok_or(DataError::ZipNotFound(zip))
    }

    /// Raw model scores for `tract`.
    pub fn score_row(&self, tract: TractId) -> Result<&ScoreRow> {
        self.scores
            .get(&tract)
            .ok_or(DataError::ScoresNotFound(tract))
    }

    /// Factor contributions for `tract`.
    pub fn factor_row(&self, tract: TractId) -> Result<&FactorRow> {
        self.factors
            .get(&tract)
            .ok_or(DataError::FactorsNotFound(tract))
    }

    /// Human-readable description for a factor name, if one is mapped.
    pub fn description(&self, factor_name: &str) -> Option<&str> {
        self.descriptions.get(factor_name).map(String::as_str)
    }
}

fn read_zip_tract(reader: impl Read) -> Result<HashMap<ZipCode, Vec<TractId>>> {
    let mut index: HashMap<ZipCode, Vec<TractId>> = HashMap::new();
    for record in csv::Reader::from_reader(reader).deserialize() {
        let record: ZipTractRecord = record?;
        index.entry(record.zip).or_default().push(record.tract);
    }
    Ok(index)
}

fn read_scores(reader: impl Read) -> Result<HashMap<TractId, ScoreRow>> {
    let mut index = HashMap::new();
    for record in csv::Reader::from_reader(reader).deserialize() {
        let record: ScoreRecord = record?;
        // First row wins on duplicate tract ids.
        index.entry(record.geo_id).or_insert(ScoreRow {
            linear: record.linear_hai,
            forest: record.forest_hai,
            neural_network: record.nn_hai,
        });
    }
    Ok(index)
}

fn read_factors(reader: impl Read) -> Result<HashMap<TractId, FactorRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let geo_id_idx = headers
        .iter()
        .position(|h| h == GEO_ID_COLUMN)
        .ok_or_else(|| DataError::MissingColumn {
            column: GEO_ID_COLUMN.to_string(),
            table: FACTOR_FILE.to_string(),
        })?;

    let mut index: HashMap<TractId, FactorRow> = HashMap::new();
    for record in csv_reader.records() {
        let record = record?;
        let tract = parse_cell::<TractId>(record.get(geo_id_idx), FACTOR_FILE, GEO_ID_COLUMN)?;
        if index.contains_key(&tract) {
            continue;
        }

        let mut entries = Vec::with_capacity(headers.len().saturating_sub(3));
        for (idx, name) in headers.iter().enumerate() {
            if FACTOR_ADMIN_COLUMNS.contains(&name) {
                continue;
            }
            let value = parse_cell::<f64>(record.get(idx), FACTOR_FILE, name)?;
            entries.push((name.to_string(), value));
        }
        index.insert(tract, FactorRow { entries });
    }
    Ok(index)
}

fn parse_cell<T: std::str::FromStr>(cell: Option<&str>, table: &str, column: &str) -> Result<T> {
    cell.and_then(|raw| raw.trim().parse().ok())
        .ok_or_else(|| DataError::Parse {
            table: table.to_string(),
            reason: format!("column {column:?} value {cell:?} is not numeric"),
        })
}
