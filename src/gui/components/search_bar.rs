// src/gui/components/search_bar.rs
//
// The search form. Shown only while no results are displayed.
// Enter or the Search button submits.

use eframe::egui::{self, Button, Key, RichText, TextEdit, TextStyle, vec2};

use crate::{config::consts::QUERY_HINT, gui::app::App};

use super::CYAN;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(30.0);

    ui.vertical_centered(|ui| {
        let width = ui.available_width().min(1000.0);

        let resp = ui.add(
            TextEdit::singleline(&mut app.input)
                .hint_text(QUERY_HINT)
                .font(TextStyle::Heading)
                .text_color(CYAN)
                .desired_width(width)
                .margin(egui::Margin::symmetric(16, 14)),
        );
        let entered = resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        ui.add_space(15.0);

        let clicked = ui
            .add(
                Button::new(RichText::new("Search 🚀").strong().size(18.0).color(egui::Color32::BLACK))
                    .fill(CYAN)
                    .corner_radius(50.0)
                    .min_size(vec2(180.0, 40.0)),
            )
            .clicked();

        if entered || clicked {
            logf!("UI: Search submitted {:?}", app.input);
            let ctx = ui.ctx().clone();
            app.submit(&ctx);
        }
    });

    ui.add_space(100.0);
}
