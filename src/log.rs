// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_FILE, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the global subscriber once. Lines go to `.store/debug.log`
/// stamped with time since start; if the file can't be opened we fall back
/// to stderr rather than losing the output.
///
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let file = fs::create_dir_all(STORE_DIR).and_then(|_| {
            OpenOptions::new().create(true).append(true).open(log_path())
        });

        let registry = tracing_subscriber::registry().with(filter);
        let res = match file {
            Ok(f) => registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(f))
                        .with_ansi(false)
                        .with_timer(fmt::time::uptime()),
                )
                .try_init(),
            Err(_) => registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init(),
        };
        // Someone else (a test harness, usually) already owns the global slot.
        let _ = res;
    });
}
