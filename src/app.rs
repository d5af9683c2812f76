use eframe::egui;

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DemoMultipliersApp {
    pub state: AppState,
}

impl DemoMultipliersApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DemoMultipliersApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: pickers ----
        egui::SidePanel::left("options_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: glossary ----
        egui::TopBottomPanel::bottom("glossary").show(ctx, |ui| {
            panels::glossary(ui);
        });

        // ---- Central panel: table + map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_panel(ui, &self.state);
        });
    }
}
