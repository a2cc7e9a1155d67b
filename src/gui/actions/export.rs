// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.apply_out_path();

    let Some(report) = app.report.as_ref() else {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    };

    let export = &app.state.options.export;
    logf!(
        "Export: Begin format={:?} flights={} headers={}",
        export.format,
        report.flights.len(),
        export.include_headers
    );

    let msg = match file::write_export(export, report) {
        Ok(path) => format!("Exported {}", path.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
