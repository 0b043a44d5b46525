use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use swiggy_recommender::data::clean::{DEFAULT_SAMPLE_SIZE, DEFAULT_SEED};
use swiggy_recommender::data::loader::{CLEANED_FILE, ENCODED_FILE, ENCODER_FILE, RAW_FILE};
use swiggy_recommender::pipeline::{self, PreprocessOptions};

/// Clean the raw Swiggy export and write the recommender's data files.
#[derive(Debug, Parser)]
#[command(name = "preprocess", version)]
struct Args {
    /// Raw export to read
    #[arg(long, default_value = RAW_FILE)]
    input: PathBuf,

    /// Directory the cleaned, encoded and encoder files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Rows kept when the export is larger
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// Seed for row sampling
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("⏳ Loading {}...", args.input.display());
    let opts = PreprocessOptions {
        sample_size: args.sample_size,
        seed: args.seed,
    };
    let report = pipeline::run(&args.input, &args.out_dir, &opts)
        .inspect_err(|e| log::error!("Preprocessing failed: {e:#}"))?;

    println!(
        "⚙️ Encoded {} rows into {} columns ({} read, {} sampled, {} duplicates dropped)",
        report.rows_written,
        report.feature_columns,
        report.rows_read,
        report.rows_sampled,
        report.duplicates_dropped
    );
    println!(
        "💾 Wrote {CLEANED_FILE}, {ENCODED_FILE} and {ENCODER_FILE} to {}",
        args.out_dir.display()
    );
    println!("✅ Success! Data is ready.");
    Ok(())
}
