use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::FilterOutcome;
use crate::data::reference::STATES;
use crate::data::selection::{Category, UnitType};
use crate::state::AppState;
use crate::ui::{map, table};

pub const TITLE: &str = "Explore US Housing and Demographics Data";

const GLOSSARY: &[(&str, &str)] = &[
    (
        "ACS",
        "American Community Survey. The ACS is a yearly survey of population and housing \
         in the United States that is administered by the United States Census Bureau.",
    ),
    (
        "Bedrooms (BR) (Housing Size)",
        "The number of rooms that would be listed as bedrooms if the house or apartment \
         were listed on the market for sale or rent even if these rooms are currently used \
         for other purposes. A housing unit consisting of only one room is classified as \
         having no bedroom (studio).",
    ),
    (
        "Demographic Multipliers",
        "In this study, encompasses residential demographic multipliers: the number and \
         profile of occupants in housing.",
    ),
];

// ---------------------------------------------------------------------------
// Left side panel – selection pickers
// ---------------------------------------------------------------------------

/// Render the option pickers.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Options");
    ui.separator();

    ui.strong("State:");
    let current_state = state.selection.state.name;
    egui::ComboBox::from_id_salt("state")
        .selected_text(current_state)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for s in STATES {
                if ui.selectable_label(current_state == s.name, s.name).clicked() {
                    state.set_state(s);
                }
            }
        });
    ui.add_space(6.0);

    ui.strong("Unit Type:");
    let current_unit = state.selection.unit_type;
    egui::ComboBox::from_id_salt("unit_type")
        .selected_text(current_unit.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for unit_type in UnitType::ALL {
                if ui
                    .selectable_label(current_unit == unit_type, unit_type.label())
                    .clicked()
                {
                    state.set_unit_type(unit_type);
                }
            }
        });
    ui.add_space(6.0);

    ui.strong("Data Category:");
    let current_category = state.selection.category;
    egui::ComboBox::from_id_salt("category")
        .selected_text(current_category.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for category in Category::ALL {
                if ui
                    .selectable_label(current_category == category, category.label())
                    .clicked()
                {
                    state.set_category(category);
                }
            }
        });
    ui.add_space(6.0);

    // Only offered once a dataset resolved.
    let Some(structures) = state.dashboard().map(|v| v.structures.clone()) else {
        return;
    };
    ui.strong("Structure:");
    let current_structure = state.structure.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("structure")
        .selected_text(&current_structure)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for value in &structures {
                if ui
                    .selectable_label(current_structure == *value, value)
                    .clicked()
                {
                    state.set_structure(value.clone());
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Central panel – table and map
// ---------------------------------------------------------------------------

/// Render the filtered table and the map, or the error for this selection.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(TITLE).strong().color(Color32::from_rgb(76, 175, 80)));
    });
    ui.add_space(8.0);

    let view = match &state.view {
        Some(Ok(view)) => view,
        Some(Err(e)) => {
            ui.colored_label(Color32::RED, format!("An error occurred: {e}"));
            return;
        }
        None => return,
    };

    ui.label(RichText::new(&view.dataset_file).weak());
    match &view.table {
        FilterOutcome::Rows(rows) => table::data_table(ui, rows),
        FilterOutcome::Empty => {
            ui.label("No data available for the selected structure.");
        }
    }
    ui.add_space(8.0);

    if !view.map.has_boundary() {
        ui.label(
            RichText::new(format!("No boundary outline for {}", view.map.marker.label)).weak(),
        );
    }
    map::state_map(ui, &view.map, &state.map_style);
}

// ---------------------------------------------------------------------------
// Glossary (bottom panel)
// ---------------------------------------------------------------------------

pub fn glossary(ui: &mut Ui) {
    egui::CollapsingHeader::new(RichText::new("Glossary").strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ScrollArea::vertical().max_height(160.0).show(ui, |ui: &mut Ui| {
                for (term, definition) in GLOSSARY {
                    ui.horizontal_wrapped(|ui: &mut Ui| {
                        ui.strong(format!("{term}:"));
                        ui.label(*definition);
                    });
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Choose data folder…").clicked() {
                choose_data_folder(state);
                ui.close_menu();
            }
            let can_export = state
                .dashboard()
                .is_some_and(|v| v.table.rows().is_some());
            if ui
                .add_enabled(can_export, egui::Button::new("Export table as CSV…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(format!("Data: {}", state.data_dir.display()));

        if let Some(view) = state.dashboard() {
            ui.separator();
            let visible = view.table.rows().map_or(0, |t| t.len());
            ui.label(format!("{visible} rows shown"));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            if msg.is_error() {
                ui.label(RichText::new(msg.text()).color(Color32::RED));
            } else {
                ui.label(msg.text());
            }
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn choose_data_folder(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Choose the folder holding DM_*.csv datasets")
        .set_directory(&state.data_dir)
        .pick_folder();

    if let Some(dir) = folder {
        state.set_data_dir(dir);
    }
}

pub fn export_dialog(state: &mut AppState) {
    let default_name = state
        .dashboard()
        .map(|v| match &v.structure {
            Some(s) => format!("{}_{}.csv", v.dataset_file.trim_end_matches(".csv"), s),
            None => v.dataset_file.clone(),
        })
        .unwrap_or_else(|| "export.csv".to_string());

    let file = rfd::FileDialog::new()
        .set_title("Export table")
        .set_file_name(default_name)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        state.export_table(&path);
    }
}
