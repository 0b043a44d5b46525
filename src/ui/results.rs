use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use swiggy_recommender::data::loader::CLEANED_FILE;
use swiggy_recommender::data::model::Restaurant;

use crate::color::rating_color;
use crate::state::{AppState, SearchOutcome};

const SUCCESS: Color32 = Color32::from_rgb(46, 160, 67);
const WARNING: Color32 = Color32::from_rgb(210, 153, 34);

// ---------------------------------------------------------------------------
// Recommendations (central panel)
// ---------------------------------------------------------------------------

/// Render the title and the outcome of the last search.
pub fn results_view(ui: &mut Ui, state: &AppState) {
    ui.heading(RichText::new("🍔 Swiggy Restaurant Recommender").size(26.0));
    ui.add_space(8.0);

    let catalog = match &state.catalog {
        Some(c) => c,
        None => {
            if state.data_missing {
                ui.colored_label(
                    Color32::RED,
                    "⚠️ Data files not found. Please run 'preprocess' first!",
                );
                ui.label(format!(
                    "Looked for {} in {}",
                    CLEANED_FILE,
                    state.data_dir.display()
                ));
            } else if let Some(msg) = &state.status_message {
                ui.colored_label(Color32::RED, msg.as_str());
            }
            return;
        }
    };

    let Some(outcome) = &state.outcome else {
        ui.label("Pick a city, a cuisine and a budget, then press Find Food.");
        return;
    };

    match outcome {
        SearchOutcome::Matches {
            city,
            cuisine,
            budget,
            recommendations,
        } => {
            ui.colored_label(SUCCESS, format!("Top matches for {cuisine} in {city}:"));
            if recommendations.is_empty() {
                ui.label(format!("Nothing similar costs ₹{budget} or less."));
                return;
            }
            ui.separator();
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    for rec in recommendations {
                        if let Some(r) = catalog.restaurants.get(rec.index) {
                            restaurant_card(ui, r);
                            ui.separator();
                        }
                    }
                });
        }
        SearchOutcome::NoReference { .. } => {
            ui.colored_label(
                WARNING,
                "No matches found for that specific cuisine in this city.",
            );
        }
    }
}

/// Cost as exported, without rounding.
fn cost_label(cost: f64) -> String {
    format!("₹{cost}")
}

fn restaurant_card(ui: &mut Ui, r: &Restaurant) {
    ui.horizontal(|ui: &mut Ui| {
        // Rating metric
        ui.vertical(|ui: &mut Ui| {
            ui.set_width(100.0);
            ui.label("Rating");
            ui.label(
                RichText::new(format!("⭐ {:.1}", r.rating))
                    .size(22.0)
                    .color(rating_color(r.rating)),
            );
        });

        ui.vertical(|ui: &mut Ui| {
            ui.heading(r.name.as_str());
            ui.horizontal_wrapped(|ui: &mut Ui| {
                ui.label(RichText::new("Cost:").strong());
                ui.label(cost_label(r.cost));
                ui.label("|");
                ui.label(RichText::new("Address:").strong());
                ui.label(r.address.as_str());
            });
            let link = r.order_link();
            if link.is_empty() {
                ui.weak("No order link");
            } else {
                ui.add(egui::Hyperlink::from_label_and_url("Order on Swiggy 🚀", link));
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_is_not_rounded() {
        assert_eq!(cost_label(499.6), "₹499.6");
        assert_eq!(cost_label(300.0), "₹300");
    }
}
