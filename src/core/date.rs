// src/core/date.rs
//
// Flight dates arrive as free text. Only ISO-8601 is understood; anything
// else is a `DateError` the caller has to decide about.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::consts::MONTH_LABEL_FORMAT;
use crate::error::DateError;

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// `2024-03-15` (midnight), `2024-03-15T10:20:00`, `2024-03-15T10:20:00+02:00`, ...
///
/// Offsets are kept as written: the result is the wall-clock time in the
/// offset the date was given in, so its date part is the flight's local day.
pub fn parse_flight_time(s: &str) -> Result<NaiveDateTime, DateError> {
    let t = s.trim();
    if t.is_empty() {
        return Err(DateError::Empty);
    }
    if let Ok(d) = NaiveDate::parse_from_str(t, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Ok(dt.naive_local());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(t, fmt).ok())
        .ok_or_else(|| DateError::Unrecognized(s!(t)))
}

/// Calendar day of [`parse_flight_time`].
pub fn parse_flight_date(s: &str) -> Result<NaiveDate, DateError> {
    parse_flight_time(s).map(|dt| dt.date())
}

/// `HH:MM` (hours may exceed 24) → hours. `None` for anything else.
pub fn parse_duration_hours(s: &str) -> Option<f64> {
    let (h, m) = s.trim().split_once(':')?;
    let h: u32 = h.trim().parse().ok()?;
    let m: u32 = m.trim().parse().ok()?;
    (m < 60).then(|| h as f64 + m as f64 / 60.0)
}

/// "Mar 2024"
pub fn month_label(d: NaiveDate) -> String {
    d.format(MONTH_LABEL_FORMAT).to_string()
}

/// Inverse of `month_label`, pinned to the first of the month.
pub fn parse_month_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {}", label.trim()), "%d %b %Y").ok()
}
