// src/runner.rs
use std::path::PathBuf;

use crate::{
    auth::{self, Credentials},
    config::options::{ExportOptions, SourceOptions},
    core::net::Client,
    error::Result,
    file,
    model::Report,
    progress::Progress,
    scrape,
};

/// Where the flight document comes from.
#[derive(Debug)]
pub enum Input {
    /// Log in and download the listing.
    Online(Credentials),
    /// A saved listing (HTML page or JSON export).
    File(PathBuf),
}

#[derive(Debug)]
pub struct RunParams {
    pub input: Input,
    pub source: SourceOptions,
    /// Write the result to disk when set.
    pub export: Option<ExportOptions>,
}

/// Summary of what was produced.
pub struct RunSummary {
    pub report: Report,
    pub written: Option<PathBuf>,
}

/// One-shot run for the CLI: get the document, aggregate, optionally export.
/// Online sessions are dropped at the end.
pub fn run(params: &RunParams, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let report = match &params.input {
        Input::Online(creds) => {
            let (session, report) =
                scrape::collect_report(&params.source, None, Some(creds), progress)?;
            auth::logout(session);
            report
        }
        Input::File(path) => scrape::collect_from_file(path, params.source.kind, progress)?,
    };

    let written = match &params.export {
        Some(export) => Some(file::write_export(export, &report)?),
        None => None,
    };
    Ok(RunSummary { report, written })
}

/// Log in and ask the site who we are. Returns the username it reports.
pub fn check_login(source: &SourceOptions, creds: &Credentials) -> Result<String> {
    let client = Client::new(&source.base_url)?;
    let session = auth::login(&client, creds)?;
    let user = auth::check(&client, &session)?;
    auth::logout(session);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::{ExportFormat, SourceKind};

    const PAGE: &str = r#"<table class="flights-table">
        <tr data-flight-id="9"><td class="flight-date">2024-07-01</td>
        <td class="distance">33 km</td><td class="points">41</td></tr></table>"#;

    #[test]
    fn file_input_with_export() {
        let dir = std::env::temp_dir().join("xc_dash_runner_unit");
        let _ = std::fs::create_dir_all(&dir);
        let src = dir.join("listing.html");
        std::fs::write(&src, PAGE).unwrap();

        let mut export = ExportOptions::default();
        export.format = ExportFormat::Csv;
        export.set_path(&dir.join("out").to_string_lossy());

        let params = RunParams {
            input: Input::File(src),
            source: SourceOptions { kind: SourceKind::Html, ..Default::default() },
            export: Some(export),
        };
        let summary = run(&params, None).unwrap();
        assert_eq!(summary.report.statistics.total_flights, 1);
        assert_eq!(summary.report.statistics.total_distance, 33.0);

        let written = summary.written.unwrap();
        assert_eq!(written.extension().unwrap(), "csv");
        let text = std::fs::read_to_string(&written).unwrap();
        assert!(text.contains("9,2024-07-01"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_io_error() {
        let params = RunParams {
            input: Input::File(PathBuf::from("/definitely/not/here.html")),
            source: SourceOptions::default(),
            export: None,
        };
        assert!(matches!(run(&params, None), Err(crate::Error::Io(_))));
    }
}
