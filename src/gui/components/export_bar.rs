// src/gui/components/export_bar.rs
//
// Copy / Export of the current Result Set. Format and header toggles live in
// ExportOptions; the output text field is mapped back on export.

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    export::{export_to_file, to_export_string},
    filter::ResultSet,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App, results: &ResultSet<'static>) {
    {
        let export = &mut app.options.export;
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            ui.checkbox(&mut export.include_headers, "Include headers");
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }

        if ui.button("Copy").clicked() {
            copy(app, ui.ctx(), results);
        }
        if ui.button("Export").clicked() {
            export(app, results);
        }

        ui.label(app.status.as_str());
    });
}

fn copy(app: &mut App, ctx: &egui::Context, results: &ResultSet<'static>) {
    let export = &app.options.export;
    match to_export_string(results, export.format, export.include_headers) {
        Ok(txt) => {
            ctx.copy_text(txt);
            logf!("Copy: rows={}", results.len());
            app.status = s!("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: {e}");
            app.status = format!("Copy error: {e}");
        }
    }
}

fn export(app: &mut App, results: &ResultSet<'static>) {
    if app.out_path_dirty {
        app.options.export.set_path(&app.out_path_text);
        app.out_path_text = app.options.export.out_path().to_string_lossy().into_owned();
        app.out_path_dirty = false;
    }

    app.status = match export_to_file(&app.options.export, results) {
        Ok(path) => format!("Exported {} row(s) → {}", results.len(), path.display()),
        Err(e) => {
            loge!("Export: {e}");
            format!("Export error: {e}")
        }
    };
}
