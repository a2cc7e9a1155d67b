// src/gui/components/flights_table.rs
use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::model::{FlightRecord, FLIGHT_HEADERS};

/// Distance and Points are right-aligned.
const NUMERIC_COLS: [usize; 2] = [5, 6];

pub fn draw(ui: &mut egui::Ui, id: &str, flights: &[FlightRecord]) {
    if flights.is_empty() {
        ui.weak("No flights");
        return;
    }

    ui.push_id(id, |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .min_scrolled_height(0.0)
            .cell_layout(Layout::left_to_right(Align::Center));
        for (ci, _) in FLIGHT_HEADERS.iter().enumerate() {
            let col = match ci {
                0 => Column::initial(70.0),
                1 => Column::initial(90.0),
                2 | 3 | 7 => Column::initial(140.0),
                _ => Column::initial(80.0),
            };
            table = table.column(col.clip(true).at_least(30.0));
        }

        table
            .header(24.0, |mut header| {
                for h in FLIGHT_HEADERS {
                    header.col(|ui| {
                        ui.label(RichText::new(h).strong());
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, flights.len(), |mut row| {
                    let f = &flights[row.index()];
                    for (ci, cell) in f.to_row().into_iter().enumerate() {
                        row.col(|ui| {
                            if NUMERIC_COLS.contains(&ci) {
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    ui.label(cell);
                                });
                            } else {
                                ui.label(cell);
                            }
                        });
                    }
                });
            });
    });
}
