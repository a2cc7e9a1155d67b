// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
    time::Duration,
};

use eframe::egui;

use crate::{
    auth::Session,
    config::state::{AppState, Tab},
    model::Report,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "XC Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::from_env())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // login form
    pub username: String,
    pub password: String,

    // upstream session; `pilot` is the name the site reports for it
    pub session: Option<Session>,
    pub pilot: Option<String>,

    // last successful fetch or file load
    pub report: Option<Report>,

    // saved listing to open offline
    pub file_path_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub inbox: Option<Receiver<actions::FetchOutcome>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let username = state.options.source.username.clone();
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        logf!("Init: base_url={} user_preset={}", state.options.source.base_url, !username.is_empty());

        Self {
            state,
            username,
            password: s!(),
            session: None,
            pilot: None,
            report: None,
            file_path_text: s!(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Not logged in"))),
            running: false,
            inbox: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Push a typed output path into `ExportOptions` before it is used.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            logf!("Export: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_fetch(self);
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::SidePanel::left("login")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                components::login_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("export")
            .show(ctx, |ui| {
                components::export_bar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);
            ui.separator();

            let Some(report) = self.report.as_ref() else {
                ui.centered_and_justified(|ui| {
                    ui.label("Log in and fetch, or open a saved listing.");
                });
                return;
            };

            match self.state.gui.tab {
                Tab::Overview => {
                    egui::ScrollArea::vertical().id_salt("overview").show(ui, |ui| {
                        components::summary_cards::draw(ui, &report.statistics);
                        ui.add_space(12.0);
                        components::month_chart::draw(ui, &report.statistics, &mut self.state.gui);
                        ui.add_space(12.0);
                        ui.heading("Recent flights");
                        components::flights_table::draw(ui, "recent", &report.statistics.recent_flights);
                    });
                }
                Tab::Flights => {
                    components::flights_table::draw(ui, "all", &report.flights);
                }
            }
        });
    }
}
