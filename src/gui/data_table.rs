// src/gui/data_table.rs
//
// Draws the feature table. Purely a view over `Table`.

use eframe::egui::{self, Label, RichText};
use egui_extras::{Column, TableBuilder};

use crate::table::{Cell, Table};

const MISSING_MARK: &str = "·";
const ROW_H: f32 = 18.0;

pub fn draw(ui: &mut egui::Ui, table: &Table) {
    let cols = table.n_cols();
    let avail_h = ui.available_height();

    egui::ScrollArea::horizontal()
        .id_salt("feature_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h)
                .columns(Column::initial(120.0).at_least(40.0).resizable(true).clip(true), cols)
                .header(20.0, |mut header| {
                    for name in table.column_names() {
                        header.col(|ui| { ui.strong(name); });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, table.n_rows(), |mut row| {
                        let ix = row.index();
                        for (_, cell) in table.row(ix) {
                            row.col(|ui| match cell {
                                Cell::Missing => { ui.label(RichText::new(MISSING_MARK).weak()); }
                                Cell::Value(v) => { ui.add(Label::new(v.to_string()).truncate()); }
                            });
                        }
                    });
                });
        });
}
