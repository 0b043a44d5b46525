use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, BUDGET_MAX, BUDGET_MIN};

// ---------------------------------------------------------------------------
// Left side panel – preference widgets
// ---------------------------------------------------------------------------

/// Render the left preferences panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Your Preferences");
    ui.separator();

    let catalog = match &state.catalog {
        Some(c) => c,
        None => {
            ui.label("No catalog loaded.");
            return;
        }
    };

    // Clone what we need so we can mutate state after the widgets.
    let cities: Vec<String> = catalog.cities().map(str::to_string).collect();
    let current_city = state.city.clone().unwrap_or_default();
    let cuisines: Vec<String> = catalog
        .cuisines_in(&current_city)
        .map(str::to_string)
        .collect();
    let current_cuisine = state.cuisine.clone().unwrap_or_default();

    let mut picked_city: Option<String> = None;
    let mut picked_cuisine: Option<String> = None;

    // ---- City ----
    ui.strong("Select City");
    egui::ComboBox::from_id_salt("city")
        .selected_text(current_city.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for city in &cities {
                if ui.selectable_label(current_city == *city, city.as_str()).clicked() {
                    picked_city = Some(city.clone());
                }
            }
        });
    ui.add_space(6.0);

    // ---- Cuisine (only the chosen city's) ----
    ui.strong("Select Cuisine");
    egui::ComboBox::from_id_salt("cuisine")
        .selected_text(current_cuisine.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for cuisine in &cuisines {
                if ui
                    .selectable_label(current_cuisine == *cuisine, cuisine.as_str())
                    .clicked()
                {
                    picked_cuisine = Some(cuisine.clone());
                }
            }
        });
    ui.add_space(6.0);

    if let Some(city) = picked_city {
        state.select_city(&city);
    } else if let Some(cuisine) = picked_cuisine {
        state.select_cuisine(&cuisine);
    }

    // ---- Budget ----
    ui.strong("Max Budget (₹)");
    ui.add(egui::Slider::new(&mut state.budget, BUDGET_MIN..=BUDGET_MAX).prefix("₹"));
    ui.add_space(10.0);

    if ui.button("Find Food").clicked() {
        state.find_food();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} restaurants in {} cities",
                catalog.len(),
                catalog.cuisines_by_city.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg.as_str()).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open recommender data folder")
        .set_directory(&state.data_dir)
        .pick_folder();

    if let Some(path) = folder {
        log::info!("Switching data folder to {}", path.display());
        state.set_data_dir(path);
    }
}
