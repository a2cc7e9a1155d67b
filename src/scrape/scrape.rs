// src/scrape/scrape.rs
//
// Pipeline: (login) → download → extract → aggregate.
// Everything network-bound is here; the pieces it calls are pure.

use std::path::Path;

use crate::{
    auth::{self, Credentials, Session},
    config::options::{SourceKind, SourceOptions},
    core::net::Client,
    error::{NetError, ParseError, Result},
    model::{FlightRecord, Report, StatisticsSummary},
    progress::Progress,
    specs, stats,
};

/// Pick the decoder for `doc` and run it.
pub fn extract(doc: &str, kind: SourceKind) -> Result<Vec<FlightRecord>, ParseError> {
    match kind.resolve(doc) {
        SourceKind::Json => specs::flights_json::parse_doc(doc),
        _ => specs::flights::parse_doc(doc),
    }
}

/// Offline half of the pipeline.
pub fn report_from_doc(doc: &str, kind: SourceKind) -> Result<Report, ParseError> {
    let flights = extract(doc, kind)?;
    let statistics = stats::calculate(&flights);
    Ok(Report { statistics, flights })
}

/// Full online run. Logs in when no session is given; returns the session
/// that was used so the caller can keep it.
pub fn collect_report(
    source: &SourceOptions,
    session: Option<Session>,
    creds: Option<&Credentials>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(Session, Report)> {
    let client = Client::new(&source.base_url)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(if session.is_none() { 4 } else { 3 });
    }

    let result = run_steps(&client, source, session, creds, &mut progress);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    match &result {
        Ok((_, r)) => logf!("Scrape: OK flights={}", r.flights.len()),
        Err(e) => loge!("Scrape: Error: {e}"),
    }
    result
}

fn run_steps(
    client: &Client,
    source: &SourceOptions,
    session: Option<Session>,
    creds: Option<&Credentials>,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<(Session, Report)> {
    let session = match session {
        Some(s) => s,
        None => {
            let creds = creds.ok_or(NetError::NotAuthenticated)?;
            if let Some(p) = progress.as_deref_mut() {
                p.log("Logging in…");
            }
            let s = auth::login(client, creds)?;
            if let Some(p) = progress.as_deref_mut() {
                p.step_done("Logged in");
            }
            s
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.log("Downloading flights…");
    }
    let doc = specs::flights::fetch(client, &session)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("Downloaded flight list");
    }

    let flights = extract(&doc, source.kind)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(&format!("Read {} flights", flights.len()));
    }

    let statistics = stats::calculate(&flights);
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("Statistics ready");
    }
    Ok((session, Report { statistics, flights }))
}

/// Statistics only, for callers that don't need the flight list.
pub fn collect_statistics(
    source: &SourceOptions,
    session: &Session,
    progress: Option<&mut dyn Progress>,
) -> Result<StatisticsSummary> {
    let (_, report) = collect_report(source, Some(session.clone()), None, progress)?;
    Ok(report.statistics)
}

/// Read a saved listing (HTML or JSON) from disk.
pub fn collect_from_file(
    path: &Path,
    kind: SourceKind,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Report> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(2);
    }

    let result = read_steps(path, kind, &mut progress);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    match &result {
        Ok(r) => logf!("Scrape: File {} → {} flights", path.display(), r.flights.len()),
        Err(e) => loge!("Scrape: File {}: {e}", path.display()),
    }
    result
}

fn read_steps(path: &Path, kind: SourceKind, progress: &mut Option<&mut dyn Progress>) -> Result<Report> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Reading {}", path.display()));
    }
    let doc = std::fs::read_to_string(path)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("Read file");
    }
    let report = report_from_doc(&doc, kind)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(&format!("Read {} flights", report.flights.len()));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls so tests can check the begin/finish pairing.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) {
            self.events.push(format!("begin {total}"));
        }
        fn step_done(&mut self, step: &str) {
            self.events.push(format!("step {step}"));
        }
        fn finish(&mut self) {
            self.events.push(s!("finish"));
        }
    }

    fn tmp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("xc_dash_scrape_unit");
        let _ = std::fs::create_dir_all(&dir);
        let p = dir.join(name);
        std::fs::write(&p, contents).unwrap();
        p
    }

    #[test]
    fn file_run_finishes_on_success() {
        let p = tmp_file("ok.json", r#"[{"id":"1","date":"2024-01-01","distance":3}]"#);
        let mut rec = Recorder::default();
        let report = collect_from_file(&p, SourceKind::Auto, Some(&mut rec)).unwrap();
        assert_eq!(report.statistics.total_flights, 1);
        assert_eq!(rec.events.first().map(String::as_str), Some("begin 2"));
        assert_eq!(rec.events.last().map(String::as_str), Some("finish"));
    }

    #[test]
    fn file_run_finishes_when_the_file_is_missing() {
        let mut rec = Recorder::default();
        let missing = std::env::temp_dir().join("xc_dash_scrape_unit").join("nope.html");
        let res = collect_from_file(&missing, SourceKind::Html, Some(&mut rec));
        assert!(matches!(res, Err(crate::Error::Io(_))));
        assert_eq!(rec.events, ["begin 2", "finish"]);
    }

    #[test]
    fn file_run_finishes_when_nothing_parses() {
        let p = tmp_file("empty.html", "<html><body>nothing here</body></html>");
        let mut rec = Recorder::default();
        let res = collect_from_file(&p, SourceKind::Html, Some(&mut rec));
        assert!(matches!(res, Err(crate::Error::Parse(crate::ParseError::NoFlights))));
        assert_eq!(rec.events, ["begin 2", "step Read file", "finish"]);
    }
}
