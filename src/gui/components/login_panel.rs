// src/gui/components/login_panel.rs
//
// Left panel: login form or session info, offline file loading, status.

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("DHV-XC");
    ui.add_space(6.0);

    if app.session.is_none() {
        ui.label("Username");
        ui.add_enabled(
            !app.running,
            egui::TextEdit::singleline(&mut app.username).hint_text("pilot name"),
        );
        ui.label("Password");
        let pw = ui.add_enabled(
            !app.running,
            egui::TextEdit::singleline(&mut app.password).password(true),
        );
        let submit = pw.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(4.0);
        let clicked = ui
            .add_enabled(!app.running, egui::Button::new("Log in & fetch"))
            .clicked();
        if clicked || (submit && !app.running) {
            actions::fetch(app, ui.ctx());
        }
    } else {
        let who = app.pilot.clone().unwrap_or_else(|| s!(app.username.trim()));
        ui.label(format!("Logged in as {who}"));
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(!app.running, egui::Button::new("Refresh")).clicked() {
                actions::fetch(app, ui.ctx());
            }
            if ui.add_enabled(!app.running, egui::Button::new("Log out")).clicked() {
                actions::logout(app);
            }
        });
    }

    ui.add_space(8.0);
    ui.separator();
    ui.label("Saved listing (HTML or JSON)");
    ui.text_edit_singleline(&mut app.file_path_text);
    if ui.add_enabled(!app.running, egui::Button::new("Open")).clicked() {
        actions::open_file(app);
    }

    ui.add_space(8.0);
    ui.separator();
    ui.horizontal_wrapped(|ui| {
        if app.running {
            ui.add(Spinner::new());
        }
        ui.label(app.status_text());
    });
}
