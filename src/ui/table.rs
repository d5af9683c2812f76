use eframe::egui::{Align, Layout, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::DemographicTable;

/// Height the table may grow to before it scrolls.
const MAX_TABLE_HEIGHT: f32 = 260.0;

/// Render the filtered rows. Numeric cells are right-aligned.
pub fn data_table(ui: &mut Ui, table: &DemographicTable) {
    ScrollArea::horizontal()
        .id_salt("data_table_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(Layout::left_to_right(Align::Center))
                .columns(Column::auto().at_least(60.0), table.columns.len())
                .max_scroll_height(MAX_TABLE_HEIGHT)
                .header(22.0, |mut header| {
                    for name in &table.columns {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, table.len(), |mut row| {
                        let cells = &table.rows[row.index()];
                        for cell in cells {
                            row.col(|ui| {
                                if cell.is_numeric() {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                        ui.label(cell.to_string());
                                    });
                                } else {
                                    ui.label(cell.to_string());
                                }
                            });
                        }
                    });
                });
        });
}
