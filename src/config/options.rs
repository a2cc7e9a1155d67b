// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Defaults, overridden by the process environment (and `.env` if present).
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            logd!("Config: Loaded {}", path.display());
        }
        let mut opts = Self::default();
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            let url = url.trim();
            if !url.is_empty() {
                opts.source.base_url = s!(url);
            }
        }
        if let Ok(user) = std::env::var(ENV_USER) {
            opts.source.username = s!(user.trim());
        }
        opts
    }
}

/// Which decoder reads the flight document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Sniff the first non-blank byte: `[`/`{` is JSON, anything else markup.
    #[default]
    Auto,
    Html,
    Json,
}

impl SourceKind {
    pub fn resolve(self, doc: &str) -> SourceKind {
        match self {
            SourceKind::Auto => match doc.trim_start().as_bytes().first() {
                Some(b'[') | Some(b'{') => SourceKind::Json,
                _ => SourceKind::Html,
            },
            other => other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub base_url: String,
    pub username: String,
    pub kind: SourceKind,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            username: s!(),
            kind: SourceKind::Auto,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Statistics and flights in one document.
    Json,
    /// Flight listing only.
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Json => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; a user-typed extension wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match &self.out_path.ext {
            Some(ext) => {
                let mut name = self.out_path.file_stem.clone();
                name.push(".");
                name.push(ext);
                path.push(name);
            }
            None => {
                let mut name = self.out_path.file_stem.clone();
                name.push(".");
                name.push(self.format.ext());
                path.push(name);
            }
        }
        path
    }

    /// Parse user text into dir + stem (+ explicit extension, if typed).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        self.out_path.dir = p
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn is_default_path(&self) -> bool {
        self.out_path == OutputPath::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,    // without extension
    ext: Option<OsString>,  // only when the user typed one
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
