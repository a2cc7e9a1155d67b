// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::core::sanitize::sanitize_filename;
use crate::csv::{flights_to_string, write_flights};
use crate::error::Result;
use crate::model::Report;

/// Export contents as they would be written to disk (also used for Copy).
pub fn to_export_string(export: &ExportOptions, report: &Report) -> Result<String> {
    match export.format.delim() {
        Some(sep) => Ok(flights_to_string(&report.flights, export.include_headers, sep)),
        None => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Write one export file based on `ExportOptions`. Returns the final path.
pub fn write_export(export: &ExportOptions, report: &Report) -> Result<PathBuf> {
    let path = export.out_path();
    write_export_to(&path, export, report)?;
    Ok(path)
}

/// Same as [`write_export`] with an explicit target.
pub fn write_export_to(path: &Path, export: &ExportOptions, report: &Report) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut out = BufWriter::new(File::create(path)?);
    match export.format {
        ExportFormat::Json => serde_json::to_writer_pretty(&mut out, report)?,
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = export.format.delim().unwrap_or(',');
            write_flights(&mut out, &report.flights, export.include_headers, sep)?;
        }
    }
    out.flush()?;
    logf!("Export: Wrote {} ({} flights)", path.display(), report.flights.len());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// `flights_<pilot>` when the pilot is known, else the plain default stem.
pub fn default_file_stem(username: &str) -> String {
    let who = sanitize_filename(username, "");
    if who.is_empty() {
        s!(crate::config::consts::DEFAULT_FILE)
    } else {
        format!("{}_{}", crate::config::consts::DEFAULT_FILE, who)
    }
}
