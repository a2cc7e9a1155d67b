// src/gui/actions/fetch.rs
//
// Network work runs on a worker thread; the UI polls the channel each frame.

use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use eframe::egui;

use crate::{
    auth::{self, Credentials, Session},
    core::net::Client,
    error::{Error, NetError},
    file,
    gui::{app::App, progress::GuiProgress},
    model::Report,
    scrape,
};

pub struct Fetched {
    pub session: Session,
    pub report: Report,
    pub pilot: Option<String>,
}

pub type FetchOutcome = Result<Fetched, Error>;

pub fn fetch(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Fetch: Clicked while running, ignored");
        return;
    }

    // Existing session: reuse it. Otherwise validate the form before any request.
    let creds = if app.session.is_some() {
        None
    } else {
        match Credentials::new(&app.username, &app.password) {
            Ok(c) => Some(c),
            Err(e) => {
                app.status(e.to_string());
                return;
            }
        }
    };

    let mut source = app.state.options.source.clone();
    source.username = s!(app.username.trim());
    let session = app.session.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();

    let (tx, rx) = mpsc::channel::<FetchOutcome>();
    app.inbox = Some(rx);
    app.running = true;
    logf!("Fetch: Begin user={} fresh_login={}", source.username, creds.is_some());

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let outcome = scrape::collect_report(&source, session, creds.as_ref(), Some(&mut prog))
            .map(|(session, report)| {
                let pilot = Client::new(&source.base_url)
                    .and_then(|c| auth::check(&c, &session))
                    .map_err(|e| logw!("Fetch: Session check failed: {e}"))
                    .ok();
                Fetched { session, report, pilot }
            });
        // Receiver is gone only if the window closed.
        let _ = tx.send(outcome);
        ctx.request_repaint();
    });
}

/// Pick up a finished fetch, if any.
pub fn poll_fetch(app: &mut App) {
    let Some(rx) = app.inbox.as_ref() else { return };
    let outcome = match rx.try_recv() {
        Ok(o) => o,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            loge!("Fetch: Worker ended without a result");
            app.status("Fetch failed");
            app.running = false;
            app.inbox = None;
            return;
        }
    };
    app.running = false;
    app.inbox = None;

    match outcome {
        Ok(done) => {
            let n = done.report.flights.len();
            app.session = Some(done.session);
            app.password.clear();
            if let Some(p) = done.pilot {
                app.pilot = Some(p);
            }
            let who = app.pilot.clone().unwrap_or_else(|| s!(app.username.trim()));
            if app.state.options.export.is_default_path() && !app.out_path_dirty {
                app.state.options.export.set_path(
                    &std::path::Path::new(crate::config::consts::DEFAULT_OUT_DIR)
                        .join(file::default_file_stem(&who))
                        .to_string_lossy(),
                );
                app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
            }
            app.report = Some(done.report);
            app.status(format!("Loaded {n} flights"));
        }
        Err(e) => {
            if matches!(e, Error::Net(NetError::SessionExpired | NetError::SessionInvalid)) {
                app.session = None;
                app.pilot = None;
            }
            app.status(e.user_message());
        }
    }
}
