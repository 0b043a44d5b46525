mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use app::RecommenderApp;
use clap::Parser;
use eframe::egui;
use state::AppState;
use swiggy_recommender::recommend::DEFAULT_LIMIT;

/// Recommend Swiggy restaurants by city, cuisine and budget.
#[derive(Debug, Parser)]
#[command(name = "swiggy-recommender", version)]
struct Args {
    /// Folder containing cleaned_data.csv and encoded_data.csv
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Number of recommendations shown per search
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    top: usize,
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    // Loaded once up front; File → Reload re-reads it.
    let mut state = AppState::new(args.data_dir, args.top);
    state.reload();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Swiggy Recommender",
        options,
        Box::new(|_cc| Ok(Box::new(RecommenderApp::new(state)))),
    )
}
