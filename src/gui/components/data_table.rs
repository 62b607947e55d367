// src/gui/components/data_table.rs
//
// Full table of the current Result Set. Purely a view.
// Numeric columns are centered, text columns left-aligned.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{filter::ResultSet, phone::HEADERS};

/// Text columns: brand, model, processor, image_url.
const NON_NUMERIC: [usize; 4] = [0, 1, 2, 10];

const WIDTHS: [f32; 11] = [90.0, 150.0, 200.0, 60.0, 50.0, 80.0, 70.0, 90.0, 60.0, 70.0, 260.0];

pub fn draw(ui: &mut egui::Ui, results: &ResultSet<'_>) {
    let numeric: Vec<bool> = (0..HEADERS.len()).map(|ci| !NON_NUMERIC.contains(&ci)).collect();

    egui::ScrollArea::horizontal()
        .id_salt("results_table_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .id_salt("results_table_state");

            for w in WIDTHS {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for (ci, h) in HEADERS.iter().enumerate() {
                        header.col(|ui| aligned(ui, numeric[ci], RichText::new(*h).strong()));
                    }
                })
                .body(|body| {
                    body.rows(20.0, results.len(), |mut row| {
                        let Some(phone) = results.get(row.index()) else { return };
                        for (ci, cell) in phone.table_cells().into_iter().enumerate() {
                            row.col(|ui| aligned(ui, numeric[ci], RichText::new(cell)));
                        }
                    });
                });
        });
}

fn aligned(ui: &mut egui::Ui, centered: bool, text: RichText) {
    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
    if centered {
        ui.centered_and_justified(|ui| { ui.label(text); });
    } else {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
    }
}
