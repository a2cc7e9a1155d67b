// src/gui/components/summary_cards.rs
use eframe::egui::{self, RichText};

use crate::model::{fmt_num, StatisticsSummary};

fn card(ui: &mut egui::Ui, title: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(140.0);
        ui.vertical(|ui| {
            ui.weak(title);
            ui.label(RichText::new(value).size(22.0).strong());
        });
    });
}

fn km(v: Option<f64>) -> String {
    v.map(|x| format!("{} km", fmt_num(x))).unwrap_or_else(|| s!("–"))
}

pub fn draw(ui: &mut egui::Ui, s: &StatisticsSummary) {
    ui.horizontal_wrapped(|ui| {
        card(ui, "Flights", s.total_flights.to_string());
        card(ui, "Total distance", format!("{} km", fmt_num(s.total_distance)));
        card(ui, "Total points", fmt_num(s.total_points));
        card(ui, "Average distance", km(s.average_distance));
        card(ui, "Longest flight", km(s.longest_flight));
        card(ui, "Best score", s.best_score.map(fmt_num).unwrap_or_else(|| s!("–")));
    });
    if s.undated_flights > 0 {
        ui.weak(format!("{} flight(s) without a readable date", s.undated_flights));
    }
}
