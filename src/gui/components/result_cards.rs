// src/gui/components/result_cards.rs
//
// Card grid: `cards_per_row` columns, one card per matching phone.
// Image on top (spinner until the worker fills the slot), then the specs.

use eframe::egui::{self, Frame, Image, RichText, Spinner};

use crate::{
    config::consts::CARD_IMAGE_WIDTH,
    filter::ResultSet,
    gui::{app::App, images::CardImages},
    phone::{PhoneRecord, card_lines},
};

use super::{CARD_FILL, CYAN};

pub fn draw(ui: &mut egui::Ui, app: &App, results: &ResultSet<'static>) {
    let per_row = app.options.cards_per_row.max(1);
    let rows: Vec<(usize, &PhoneRecord)> = results.iter_indexed().collect();

    for chunk in rows.chunks(per_row) {
        ui.columns(per_row, |cols| {
            for (col, (ix, phone)) in cols.iter_mut().zip(chunk) {
                card(col, &app.images, *ix, phone);
            }
        });
        ui.add_space(10.0);
    }
}

fn card(ui: &mut egui::Ui, images: &CardImages, ix: usize, phone: &PhoneRecord) {
    let name = phone.display_name();

    Frame::group(ui.style())
        .fill(CARD_FILL)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                match images.get(ix) {
                    Some(img) => {
                        ui.add(
                            Image::from_uri(img.url)
                                .max_width(CARD_IMAGE_WIDTH)
                                .max_height(200.0)
                                .corner_radius(8.0),
                        )
                        .on_hover_text(name.as_str());
                    }
                    None => {
                        ui.add_sized([CARD_IMAGE_WIDTH.min(ui.available_width()), 120.0], Spinner::new());
                    }
                }
                ui.small(name.as_str());
                ui.add_space(4.0);
                ui.label(RichText::new(name.as_str()).size(18.0).strong().color(CYAN));
                ui.add_space(4.0);

                for (label, value) in card_lines(phone) {
                    ui.label(RichText::new(format!("{label}: {value}")));
                }
            });
        });
}
