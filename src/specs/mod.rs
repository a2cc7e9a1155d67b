// src/specs/mod.rs
//! # Page “specs”
//!
//! Each spec knows **where the flight data lives in one upstream document**
//! and how to turn it into typed [`FlightRecord`](crate::model::FlightRecord)s.
//!
//! ## What lives here
//! - **Pure document parsing**: the `/flights/my` listing (HTML) and the JSON
//!   shape we export ourselves (`{ statistics, flights }` or a bare array).
//! - **Marker choice**: rows are recognised by their `data-flight-id`
//!   attribute, fields by class (`.flight-date`, `.distance`, …), never by
//!   column position.
//! - **Field leniency**: a missing or garbled field becomes `""` / `0`; it
//!   never costs the row.
//!
//! ## What does **not** live here
//! - Statistics (`stats`), sessions (`auth`), HTTP (`core::net`) and anything
//!   a frontend shows.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::collect_* → specs::flights::fetch()      (network)
//!                              → specs::<kind>::parse_doc()   (pure)
//!                              → stats::calculate()           (pure)
//! ```
//!
//! ## Conventions & invariants
//! - Row mapping never fails; only “zero rows recognised” does, and it is
//!   checked once, after mapping (`ensure_flights`).
//! - Every lower-level fault surfaces as [`ParseError`](crate::error::ParseError).
//! - Output keeps document order.
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline fixtures.
pub mod flights;
pub mod flights_json;

use crate::error::ParseError;
use crate::model::FlightRecord;

/// The post-hoc half of “lenient, then fail”: an empty result is the one
/// hard error a spec reports.
pub fn ensure_flights(flights: Vec<FlightRecord>) -> Result<Vec<FlightRecord>, ParseError> {
    if flights.is_empty() {
        return Err(ParseError::NoFlights);
    }
    Ok(flights)
}
