// src/gui/components/results.rs
//
// Results view: query heading, match count, cards, table, export, and the
// Clear Search control that returns to the search form.

use eframe::egui::{self, Button, RichText, vec2};

use crate::gui::app::App;

use super::{AMBER, GREEN, RED, data_table, export_bar, result_cards};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(RichText::new(format!("Results for your query: {}", app.session.query)).strong());
    ui.label(format!("Filters: {}", app.session.constraints));
    ui.add_space(6.0);

    // cheap: a Vec<usize> of row positions
    let results = app.session.results.clone();

    match &results {
        Some(rs) if !rs.is_empty() => {
            ui.colored_label(GREEN, format!("✅ Found {} phone(s) matching your query!", rs.len()));
            let pending = app.images.pending(rs);
            if pending > 0 {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.weak(format!("Fetching {pending} image(s)…"));
                });
            }
            ui.separator();
            ui.heading("Recommended Smartphones:");
            ui.add_space(4.0);

            result_cards::draw(ui, app, rs);

            ui.add_space(8.0);
            egui::CollapsingHeader::new("🔍 View all results in table")
                .id_salt("results_table")
                .default_open(false)
                .show(ui, |ui| data_table::draw(ui, rs));

            ui.separator();
            export_bar::draw(ui, app, rs);

            let warnings = app.images.warnings(rs);
            if !warnings.is_empty() {
                ui.add_space(6.0);
                for w in warnings {
                    ui.colored_label(AMBER, format!("⚠ {w}"));
                }
            }
        }
        _ => {
            ui.colored_label(AMBER, "⚠️ No phones found matching your query.");
        }
    }

    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        let clear = ui
            .add(
                Button::new(RichText::new("Clear Search").strong().color(egui::Color32::WHITE))
                    .fill(RED)
                    .corner_radius(8.0)
                    .min_size(vec2(160.0, 32.0)),
            )
            .on_hover_text("Click to clear the current search and start a new one");
        if clear.clicked() {
            app.reset();
        }
    });
}
