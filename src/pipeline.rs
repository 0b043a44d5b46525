//! Offline preparation: raw export → cleaned table, encoded table, encoder.

use std::path::Path;

use anyhow::{Context, Result};

use crate::data::clean::{self, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED};
use crate::data::encoder::OneHotEncoder;
use crate::data::loader::{self, CLEANED_FILE, ENCODED_FILE, ENCODER_FILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessOptions {
    /// Upper bound on rows kept from the raw export.
    pub sample_size: usize,
    pub seed: u64,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Row counts from a preprocessing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreprocessReport {
    pub rows_read: usize,
    pub rows_sampled: usize,
    pub duplicates_dropped: usize,
    pub rows_written: usize,
    /// Width of the encoded table, numeric columns included.
    pub feature_columns: usize,
}

/// Clean and encode `input`, writing all outputs into `out_dir`.
pub fn run(input: &Path, out_dir: &Path, opts: &PreprocessOptions) -> Result<PreprocessReport> {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());

    log::info!("Loading {}", input.display());
    let raw = loader::load_raw(input).with_context(|| format!("'{file_name}' not found or unreadable"))?;
    let rows_read = raw.len();

    let sampled = clean::sample_rows(raw, opts.sample_size, opts.seed);
    let rows_sampled = sampled.len();
    if rows_sampled < rows_read {
        log::info!("Sampled {rows_sampled} of {rows_read} rows (seed {})", opts.seed);
    }

    let (unique, duplicates_dropped) = clean::dedupe(sampled);
    let restaurants: Vec<_> = unique.into_iter().map(clean::clean).collect();

    log::info!("Encoding city and cuisine");
    let encoder = OneHotEncoder::fit(&restaurants);
    let features = encoder.encode_all(&restaurants);

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    loader::write_cleaned(&out_dir.join(CLEANED_FILE), &restaurants)?;
    loader::write_encoded(&out_dir.join(ENCODED_FILE), &features)?;
    loader::write_encoder(&out_dir.join(ENCODER_FILE), &encoder)?;

    Ok(PreprocessReport {
        rows_read,
        rows_sampled,
        duplicates_dropped,
        rows_written: restaurants.len(),
        feature_columns: features.columns.len(),
    })
}
