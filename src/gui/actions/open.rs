// src/gui/actions/open.rs
use std::path::Path;

use crate::{gui::app::App, scrape};

/// Load a saved listing from disk. Local and quick, so it runs inline.
pub fn open_file(app: &mut App) {
    let text = app.file_path_text.trim();
    if text.is_empty() {
        app.status("Enter a file path first");
        return;
    }
    let path = Path::new(text).to_path_buf();
    match scrape::collect_from_file(&path, app.state.options.source.kind, None) {
        Ok(report) => {
            let n = report.flights.len();
            app.report = Some(report);
            app.status(format!("Loaded {n} flights from {}", path.display()));
        }
        Err(e) => {
            loge!("Open: {}: {e}", path.display());
            app.status(e.user_message());
        }
    }
}
