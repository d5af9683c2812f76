mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;
mod view;

use std::path::Path;

use anyhow::Context;
use app::DemoMultipliersApp;
use eframe::egui;

use crate::color::MapStyle;
use crate::config::{Settings, SETTINGS_FILE};
use crate::data::boundary::BoundaryDocument;
use crate::state::{AppState, StatusMessage};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::load_or_default(Path::new(SETTINGS_FILE))?;
    let map_style = MapStyle::from_config(&settings.map).context("invalid [map] settings")?;

    // A missing outline file only costs the map its highlight.
    let (boundaries, boundary_warning) = match BoundaryDocument::load(&settings.boundary_file) {
        Ok(doc) => (doc, None),
        Err(e) => {
            log::warn!("Boundary outlines unavailable: {e:#}");
            (
                BoundaryDocument::empty(),
                Some(StatusMessage::Error(format!(
                    "Boundary outlines unavailable: {e:#}"
                ))),
            )
        }
    };

    let mut state = AppState::new(settings.data_dir.clone(), boundaries, map_style);
    state.status_message = boundary_warning;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 850.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        ui::panels::TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(DemoMultipliersApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
