// src/gui/components/month_chart.rs
//
// Per-month bar charts (flights, distance, airtime) as plain painted bars.

use eframe::egui::{self, Align2, Color32, CornerRadius, FontId, Sense, Vec2};
use indexmap::IndexMap;

use crate::config::state::GuiState;
use crate::model::{fmt_num, StatisticsSummary};
use crate::stats::months_chronological;

const CHART_H: f32 = 140.0;
const BAR_W: f32 = 40.0;
const GAP: f32 = 8.0;
const LABEL_H: f32 = 16.0;

pub fn draw(ui: &mut egui::Ui, s: &StatisticsSummary, gui: &mut GuiState) {
    ui.horizontal(|ui| {
        ui.heading("Per month");
        if ui.checkbox(&mut gui.chart_chronological, "Chronological").changed() {
            logd!("UI: Chart chronological → {}", gui.chart_chronological);
        }
    });
    if s.flights_by_month.is_empty() {
        ui.weak("No dated flights");
        return;
    }

    let counts: IndexMap<String, f64> =
        s.flights_by_month.iter().map(|(k, n)| (k.clone(), *n as f64)).collect();

    let chrono = gui.chart_chronological;
    bar_chart(ui, "Flights per month", "chart_flights", ordered(&counts, chrono), "");
    ui.add_space(8.0);
    bar_chart(ui, "Distance per month", "chart_distance", ordered(&s.distance_by_month, chrono), " km");
    ui.add_space(8.0);
    bar_chart(ui, "Hours per month", "chart_hours", ordered(&s.hours_by_month, chrono), " h");
}

fn ordered(by_month: &IndexMap<String, f64>, chronological: bool) -> Vec<(String, f64)> {
    if chronological {
        months_chronological(by_month)
    } else {
        by_month.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }
}

fn bar_chart(ui: &mut egui::Ui, title: &str, id: &str, bars: Vec<(String, f64)>, unit: &str) {
    ui.label(egui::RichText::new(title).strong());

    let max = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let max = if max > 0.0 { max as f32 } else { 1.0 };
    let width = bars.len() as f32 * (BAR_W + GAP);

    egui::ScrollArea::horizontal().id_salt(id).show(ui, |ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, CHART_H + 2.0 * LABEL_H), Sense::hover());
        let painter = ui.painter_at(rect);
        let fill = ui.visuals().selection.bg_fill;
        let text = ui.visuals().text_color();
        let font = FontId::proportional(11.0);
        let base_y = rect.bottom() - LABEL_H;

        for (i, (label, v)) in bars.iter().enumerate() {
            let x = rect.left() + i as f32 * (BAR_W + GAP) + GAP / 2.0;
            let h = (*v as f32 / max) * CHART_H;
            let bar = egui::Rect::from_min_max(egui::pos2(x, base_y - h), egui::pos2(x + BAR_W, base_y));
            painter.rect_filled(bar, CornerRadius::same(2), fill);
            painter.text(
                bar.center_top() - Vec2::new(0.0, 2.0),
                Align2::CENTER_BOTTOM,
                format!("{}{unit}", fmt_num(*v)),
                font.clone(),
                text,
            );
            painter.text(egui::pos2(bar.center().x, base_y + 2.0), Align2::CENTER_TOP, label, font.clone(), Color32::GRAY);
        }
    });
}
