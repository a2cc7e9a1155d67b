// src/lib.rs

#[macro_use]
pub mod macros;

pub mod log;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod specs;
pub mod stats;

pub mod auth;
pub mod csv;
pub mod file;
pub mod progress;
pub mod runner;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use error::{DateError, Error, NetError, ParseError, Result};
pub use model::{FlightRecord, Report, StatisticsSummary};
