// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{bail, Result};

use crate::{
    auth::Credentials,
    config::consts::{BASE_URL, ENV_BASE_URL, ENV_PASSWORD, ENV_USER},
    config::options::{ExportFormat, ExportOptions, SourceKind, SourceOptions},
    csv::flights_to_string,
    progress::StderrProgress,
    runner::{self, Input, RunParams},
};

/// Flight statistics for DHV-XC pilots.
#[derive(Parser, Debug)]
#[command(name = "xc_dash", version, about)]
pub struct Args {
    /// DHV-XC username
    #[arg(short, long, env = ENV_USER)]
    pub user: Option<String>,

    /// Password; prompted for when missing
    #[arg(long, env = ENV_PASSWORD, hide_env_values = true)]
    pub password: Option<String>,

    /// Read a saved listing instead of logging in
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = SourceArg::Auto)]
    pub source: SourceArg,

    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[arg(long, env = ENV_BASE_URL, default_value = BASE_URL)]
    pub base_url: String,

    /// Only verify the login and print the username
    #[arg(long)]
    pub check: bool,

    /// Leave the header row out of CSV/TSV output
    #[arg(long)]
    pub no_headers: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Auto,
    Html,
    Json,
}

impl From<SourceArg> for SourceKind {
    fn from(a: SourceArg) -> Self {
        match a {
            SourceArg::Auto => SourceKind::Auto,
            SourceArg::Html => SourceKind::Html,
            SourceArg::Json => SourceKind::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable summary
    Text,
    /// Statistics and flights
    Json,
    /// Flight listing
    Csv,
    Tsv,
}

impl FormatArg {
    fn export_format(self) -> Option<ExportFormat> {
        match self {
            FormatArg::Text => None,
            FormatArg::Json => Some(ExportFormat::Json),
            FormatArg::Csv => Some(ExportFormat::Csv),
            FormatArg::Tsv => Some(ExportFormat::Tsv),
        }
    }
}

pub fn run() -> Result<()> {
    // .env must be loaded before clap reads `env = ...` fallbacks.
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    logd!(
        "CLI: file={:?} source={:?} format={:?} out={:?} check={}",
        args.file, args.source, args.format, args.out, args.check
    );
    run_with(args)
}

pub fn run_with(args: Args) -> Result<()> {
    let source = SourceOptions {
        base_url: args.base_url.clone(),
        username: args.user.clone().unwrap_or_default(),
        kind: args.source.into(),
    };

    if args.check {
        let creds = credentials(&args)?;
        let who = runner::check_login(&source, &creds)?;
        println!("Logged in as {who}");
        return Ok(());
    }

    let input = match &args.file {
        Some(path) => Input::File(path.clone()),
        None => Input::Online(credentials(&args)?),
    };

    // Text goes through Display; only machine formats go through the exporter.
    let export = match (args.format.export_format(), &args.out) {
        (Some(format), Some(out)) => {
            let mut e = ExportOptions::default();
            e.format = format;
            e.include_headers = !args.no_headers;
            e.set_path(&out.to_string_lossy());
            Some(e)
        }
        _ => None,
    };

    let params = RunParams { input, source, export };
    let mut progress = StderrProgress::new();
    let summary = match runner::run(&params, Some(&mut progress)) {
        Ok(s) => s,
        Err(e) => bail!(e.user_message()),
    };

    if let Some(path) = summary.written {
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    let text = match args.format {
        FormatArg::Text => summary.report.statistics.to_string(),
        FormatArg::Json => serde_json::to_string_pretty(&summary.report)?,
        FormatArg::Csv => flights_to_string(&summary.report.flights, !args.no_headers, ','),
        FormatArg::Tsv => flights_to_string(&summary.report.flights, !args.no_headers, '\t'),
    };
    match &args.out {
        Some(path) => {
            std::fs::write(path, &text)?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn credentials(args: &Args) -> Result<Credentials> {
    let user = match &args.user {
        Some(u) => u.clone(),
        None => dialoguer::Input::<String>::new().with_prompt("Username").interact_text()?,
    };
    let pass = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new().with_prompt("Password").interact()?,
    };
    Ok(Credentials::new(&user, &pass)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offline_json_run() {
        let args = Args::try_parse_from([
            "xc_dash", "--file", "saved.json", "--source", "json", "--format", "csv", "-o", "out/f.csv",
        ])
        .unwrap();
        assert_eq!(args.file, Some(PathBuf::from("saved.json")));
        assert_eq!(SourceKind::from(args.source), SourceKind::Json);
        assert_eq!(args.format, FormatArg::Csv);
        assert!(!args.check);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["xc_dash", "--format", "xml"]).is_err());
    }
}
