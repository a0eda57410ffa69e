// src/gui/app.rs
use std::{error::Error, path::{Path, PathBuf}};

use eframe::egui;
use log::{error, info};

use crate::{
    catalog::{create_table, Catalog},
    config::options::{AppOptions, ExportFormat, ExportOptions},
    error::Result,
    features::FeatureContext,
    csv, file,
    table::Table,
};

use super::{data_table, progress::GuiProgress};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> std::result::Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Device Spec Table",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(app_options)))),
    )?;
    Ok(())
}

pub struct App {
    // input path text field
    pub input_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub export: ExportOptions,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub table: Option<Table>,
    pub parsed_count: usize,
    pub status: String,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let out_path_text = options.export.out_path().to_string_lossy().into();
        let mut app = Self {
            input_text: options.input
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            export: options.export,
            out_path_text,
            out_path_dirty: false,
            table: None,
            parsed_count: 0,
            status: s!("Idle"),
        };
        if options.input.is_some() {
            app.load();
        }
        app
    }

    /// Read the catalog at `input_text` and rebuild the table from scratch.
    pub fn load(&mut self) {
        let path = PathBuf::from(self.input_text.trim());
        match self.build(&path) {
            Ok((table, parsed)) => {
                info!("GUI: loaded {} ({} × {})", path.display(), table.n_rows(), table.n_cols());
                self.status = format!(
                    "{} devices × {} features",
                    table.n_rows(),
                    table.n_cols()
                );
                self.parsed_count = parsed;
                self.table = Some(table);
            }
            Err(e) => {
                error!("GUI: load failed: {}", e);
                self.status = format!("Load error: {e}");
            }
        }
    }

    fn build(&mut self, path: &Path) -> Result<(Table, usize)> {
        let catalog = Catalog::load(path)?;
        let mut ctx = FeatureContext::new();
        let mut progress = GuiProgress::new(&mut self.status);
        let table = create_table(&catalog, &mut ctx, Some(&mut progress))?;
        Ok((table, ctx.parsed_features().len()))
    }

    pub fn export(&mut self) {
        if self.out_path_dirty {
            self.export.set_path(&self.out_path_text);
            self.out_path_dirty = false;
        }
        let Some(table) = &self.table else {
            self.status = s!("Nothing to export");
            return;
        };
        self.status = match file::export_table(&self.export, table) {
            Ok(path) => format!("Exported {}", path.display()),
            Err(e) => {
                error!("GUI: export failed: {}", e);
                format!("Export error: {e}")
            }
        };
    }

    /// Whole table onto the clipboard; JSON falls back to tab-separated.
    fn copy_table(&mut self, ctx: &egui::Context) {
        let Some(table) = &self.table else { return; };
        let sep = self.export.format.delim().unwrap_or('\t');
        let text = csv::table_to_string(table, self.export.include_headers, &self.export.missing, sep);
        ctx.copy_text(text);
        self.status = format!("Copied {} rows", table.n_rows());
    }

    fn load_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Catalog:");
            ui.add(egui::TextEdit::singleline(&mut self.input_text).desired_width(360.0));
            if ui.button("Load").clicked() {
                self.load();
            }
        });
    }

    fn export_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let before = self.export.format;
            egui::ComboBox::from_id_salt("export_format")
                .selected_text(self.export.format.ext())
                .show_ui(ui, |ui| {
                    for f in [ExportFormat::Csv, ExportFormat::Tsv, ExportFormat::Json] {
                        ui.selectable_value(&mut self.export.format, f, f.ext());
                    }
                });
            if before != self.export.format && !self.out_path_dirty {
                self.out_path_text = self.export.out_path().to_string_lossy().into();
            }

            let resp = ui.add(egui::TextEdit::singleline(&mut self.out_path_text).desired_width(280.0));
            if resp.changed() {
                self.out_path_dirty = true;
            }
            ui.checkbox(&mut self.export.include_headers, "Headers");
            if ui.add_enabled(self.table.is_some(), egui::Button::new("Export")).clicked() {
                self.export();
            }
            if ui.add_enabled(self.table.is_some(), egui::Button::new("Copy")).clicked() {
                let ctx = ui.ctx().clone();
                self.copy_table(&ctx);
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("bars").show(ctx, |ui| {
            self.load_bar(ui);
            self.export_bar(ui);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.as_str());
                if self.parsed_count > 0 {
                    ui.separator();
                    ui.label(format!("{} parsed features", self.parsed_count));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match &self.table {
            Some(table) => data_table::draw(ui, table),
            None => { ui.weak("Load a catalog JSON to see its feature table"); }
        });
    }
}
