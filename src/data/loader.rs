use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use thiserror::Error;

use super::clean::RawRestaurant;
use super::encoder::OneHotEncoder;
use super::model::{Catalog, FeatureMatrix, Restaurant};

/// Raw Swiggy export consumed by the preprocessing step.
pub const RAW_FILE: &str = "swiggy.csv";
/// Cleaned restaurant attributes, one row per restaurant.
pub const CLEANED_FILE: &str = "cleaned_data.csv";
/// Feature vectors, row `i` for cleaned row `i`.
pub const ENCODED_FILE: &str = "encoded_data.csv";
/// Fitted encoder categories.
pub const ENCODER_FILE: &str = "encoder.json";

/// Catalog failures callers may want to tell apart.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("data file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("{restaurants} restaurants but {features} feature rows")]
    RowCountMismatch { restaurants: usize, features: usize },
}

impl CatalogError {
    /// Whether `err` (anywhere in its chain) is a missing data file.
    pub fn is_missing_file(err: &anyhow::Error) -> bool {
        err.chain()
            .any(|e| matches!(e.downcast_ref::<CatalogError>(), Some(CatalogError::MissingFile(_))))
    }
}

fn require(path: &Path) -> Result<()> {
    if !path.is_file() {
        bail!(CatalogError::MissingFile(path.to_path_buf()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

/// Load the cleaned and encoded tables from `dir` and join them by row.
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let cleaned_path = dir.join(CLEANED_FILE);
    let encoded_path = dir.join(ENCODED_FILE);
    require(&cleaned_path)?;
    require(&encoded_path)?;

    let restaurants = load_cleaned(&cleaned_path)?;
    let features = load_encoded(&encoded_path)?;

    let encoder_path = dir.join(ENCODER_FILE);
    if encoder_path.is_file() {
        match load_encoder(&encoder_path) {
            Ok(encoder) if encoder.encoded_columns() != features.columns => {
                log::warn!(
                    "{} does not match the header of {}; was preprocessing re-run?",
                    encoder_path.display(),
                    encoded_path.display()
                );
            }
            Ok(_) => {}
            Err(e) => log::warn!("Ignoring unreadable encoder: {e:#}"),
        }
    }

    let catalog = Catalog::new(restaurants, features)
        .with_context(|| format!("joining {CLEANED_FILE} with {ENCODED_FILE}"))?;
    log::info!(
        "Loaded {} restaurants across {} cities from {}",
        catalog.len(),
        catalog.cuisines_by_city.len(),
        dir.display()
    );
    Ok(catalog)
}

/// Read the cleaned restaurant table.
pub fn load_cleaned(path: &Path) -> Result<Vec<Restaurant>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    reader
        .deserialize::<Restaurant>()
        .enumerate()
        .map(|(row_no, rec)| rec.with_context(|| format!("{}: row {row_no}", path.display())))
        .collect()
}

/// Read the encoded feature table. Every cell must be numeric.
pub fn load_encoded(path: &Path) -> Result<FeatureMatrix> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.len() != columns.len() {
            bail!(
                "CSV row {row_no}: {} cells but {} columns",
                record.len(),
                columns.len()
            );
        }
        let row = record
            .iter()
            .zip(&columns)
            .map(|(cell, col)| {
                cell.trim()
                    .parse::<f64>()
                    .with_context(|| format!("Row {row_no}, {col}: '{cell}' is not a number"))
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    Ok(FeatureMatrix { columns, rows })
}

/// Read the raw export. A missing file is reported as [`CatalogError::MissingFile`].
pub fn load_raw(path: &Path) -> Result<Vec<RawRestaurant>> {
    require(path)?;
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    reader
        .deserialize::<RawRestaurant>()
        .enumerate()
        .map(|(row_no, rec)| rec.with_context(|| format!("{}: row {row_no}", path.display())))
        .collect()
}

pub fn load_encoder(path: &Path) -> Result<OneHotEncoder> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(file).context("parsing encoder JSON")
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

pub fn write_cleaned(path: &Path, restaurants: &[Restaurant]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for r in restaurants {
        writer.serialize(r).context("writing cleaned row")?;
    }
    writer.flush().context("flushing cleaned CSV")?;
    Ok(())
}

pub fn write_encoded(path: &Path, features: &FeatureMatrix) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer
        .write_record(&features.columns)
        .context("writing encoded header")?;
    for row in &features.rows {
        writer
            .write_record(row.iter().map(|v| v.to_string()))
            .context("writing encoded row")?;
    }
    writer.flush().context("flushing encoded CSV")?;
    Ok(())
}

pub fn write_encoder(path: &Path, encoder: &OneHotEncoder) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), encoder).context("writing encoder JSON")
}
