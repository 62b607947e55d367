// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{options::AppOptions, state::SessionState},
    images,
    store::{self, Dataset},
};

use super::{
    components::{results, search_bar},
    images::CardImages,
};

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Phone Advisor",
        native,
        Box::new(|cc| {
            // URL → texture for the card images
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(options)))
        }),
    )?;
    Ok(())
}

pub struct App {
    pub options: AppOptions,

    // loaded once; None means the session is halted on `load_error`
    pub dataset: Option<&'static Dataset>,
    pub load_error: Option<String>,

    // single source of truth for the search (UI thread only)
    pub session: SessionState<'static>,

    // search box contents (may differ from the submitted query)
    pub input: String,

    // card images (workers fill these in)
    pub images: CardImages,

    // export field UX (mapped into ExportOptions on export)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let (dataset, load_error) = match store::init(&options.dataset_path) {
            Ok(ds) => (Some(ds), None),
            Err(e) => (None, Some(e.to_string())),
        };

        let images = CardImages::new(images::init(&options.images));
        let out_path_text = options.export.out_path().to_string_lossy().into_owned();

        logf!(
            "Init: dataset={} rows={} image_lookup={}",
            options.dataset_path.display(),
            dataset.map_or(0, |d| d.len()),
            options.images.lookup_enabled
        );

        Self {
            options,
            dataset,
            load_error,
            session: SessionState::default(),
            input: s!(),
            images,
            out_path_text,
            out_path_dirty: false,
            status: s!("Idle"),
        }
    }

    /// Search button / Enter.
    pub fn submit(&mut self, ctx: &egui::Context) {
        let Some(ds) = self.dataset else { return };
        let input = self.input.clone();
        self.session.submit(&input, ds);

        if let Some(results) = &self.session.results {
            self.images.request(results, ctx);
            self.status = format!("{} match(es)", results.len());
        }
    }

    /// Clear Search.
    pub fn reset(&mut self) {
        self.session.reset();
        self.input.clear();
        self.status = s!("Idle");
        logd!("UI: Search cleared");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("📱 Your Phone Advisor");
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.dataset.is_none() {
                draw_load_error(ui, self.load_error.as_deref().unwrap_or("dataset unavailable"));
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if self.session.show_results {
                        results::draw(ui, self);
                    } else {
                        search_bar::draw(ui, self);
                    }
                });
        });
    }
}

fn draw_load_error(ui: &mut egui::Ui, msg: &str) {
    ui.add_space(30.0);
    ui.vertical_centered(|ui| {
        ui.colored_label(super::components::RED, format!("Error: {msg}"));
        ui.label("Fix the dataset file and restart the app.");
    });
}
