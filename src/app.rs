use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RecommenderApp {
    pub state: AppState,
}

impl RecommenderApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for RecommenderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: preferences ----
        egui::SidePanel::left("preferences_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: recommendations ----
        egui::CentralPanel::default().show(ctx, |ui| {
            results::results_view(ui, &self.state);
        });
    }
}
