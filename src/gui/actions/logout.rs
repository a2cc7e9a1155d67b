// src/gui/actions/logout.rs
use crate::{auth, gui::app::App};

pub fn logout(app: &mut App) {
    if let Some(session) = app.session.take() {
        auth::logout(session);
    }
    // An in-flight fetch must not bring the session back.
    if app.inbox.take().is_some() {
        logd!("Fetch: Result of running fetch discarded on logout");
    }
    app.running = false;
    app.pilot = None;
    app.password.clear();
    app.report = None;
    app.status("Logged out");
}
