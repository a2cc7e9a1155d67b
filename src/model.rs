// src/model.rs
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Column order used by tables and CSV/TSV exports.
pub const FLIGHT_HEADERS: [&str; 8] = [
    "Id", "Date", "Takeoff", "Landing", "Duration", "Distance (km)", "Points", "Glider",
];

/// One logged flight, as read from the listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub id: String,
    pub date: String,
    pub takeoff: String,
    pub landing: String,
    /// `HH:MM`, hours may exceed 24
    pub duration: String,
    /// km
    pub distance: f64,
    pub points: f64,
    pub glider: String,
}

impl FlightRecord {
    pub fn headers() -> Vec<String> {
        FLIGHT_HEADERS.iter().map(|h| s!(*h)).collect()
    }

    /// Table/CSV row in `FLIGHT_HEADERS` order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.clone(),
            self.takeoff.clone(),
            self.landing.clone(),
            self.duration.clone(),
            fmt_num(self.distance),
            fmt_num(self.points),
            self.glider.clone(),
        ]
    }
}

/// Aggregate view over a set of flights.
///
/// `average_distance`, `longest_flight` and `best_score` are `None` for an
/// empty input and serialize as `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub total_flights: usize,
    pub total_distance: f64,
    pub total_points: f64,
    pub average_distance: Option<f64>,
    pub longest_flight: Option<f64>,
    pub best_score: Option<f64>,
    /// "Mar 2024" → count, in first-seen order
    pub flights_by_month: IndexMap<String, usize>,
    /// Same months and order, summed distance (km)
    pub distance_by_month: IndexMap<String, f64>,
    /// Same months and order, airtime in hours; unreadable durations add 0
    pub hours_by_month: IndexMap<String, f64>,
    pub recent_flights: Vec<FlightRecord>,
    /// Flights whose date could not be read; not part of `flights_by_month`.
    pub undated_flights: usize,
}

/// Statistics together with the flights they were computed from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub statistics: StatisticsSummary,
    pub flights: Vec<FlightRecord>,
}

/// Numbers for display: integers without a trailing `.0`, everything else
/// with at most two decimals.
pub fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(fmt_num).unwrap_or_else(|| s!("-"))
}

impl fmt::Display for StatisticsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flights:          {}", self.total_flights)?;
        writeln!(f, "Total distance:   {} km", fmt_num(self.total_distance))?;
        writeln!(f, "Total points:     {}", fmt_num(self.total_points))?;
        writeln!(f, "Average distance: {} km", fmt_opt(self.average_distance))?;
        writeln!(f, "Longest flight:   {} km", fmt_opt(self.longest_flight))?;
        writeln!(f, "Best score:       {}", fmt_opt(self.best_score))?;

        if !self.flights_by_month.is_empty() {
            writeln!(f)?;
            writeln!(f, "Flights by month:")?;
            for (month, n) in &self.flights_by_month {
                let km = self.distance_by_month.get(month).copied().unwrap_or(0.0);
                let h = self.hours_by_month.get(month).copied().unwrap_or(0.0);
                writeln!(f, "  {month:<10} {n:>3}  {:>8} km  {:>6} h", fmt_num(km), fmt_num(h))?;
            }
        }
        if self.undated_flights > 0 {
            writeln!(f, "  (undated)  {}", self.undated_flights)?;
        }

        if !self.recent_flights.is_empty() {
            writeln!(f)?;
            writeln!(f, "Recent flights:")?;
            for fl in &self.recent_flights {
                writeln!(
                    f,
                    "  {:<10} {:<24} {:>8} km {:>8} pts  {}",
                    fl.date,
                    fl.takeoff,
                    fmt_num(fl.distance),
                    fmt_num(fl.points),
                    fl.duration,
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_needless_decimals() {
        assert_eq!(fmt_num(80.0), "80");
        assert_eq!(fmt_num(53.333333), "53.33");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(0.0), "0");
    }

    #[test]
    fn summary_serializes_camel_case_with_nulls() {
        let s = StatisticsSummary::default();
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["totalFlights"], 0);
        assert!(v["averageDistance"].is_null());
        assert!(v["longestFlight"].is_null());
        assert!(v["bestScore"].is_null());
        assert!(v["flightsByMonth"].as_object().unwrap().is_empty());
    }

    #[test]
    fn row_follows_header_order() {
        let f = FlightRecord {
            id: s!("7"),
            date: s!("2024-05-01"),
            takeoff: s!("Brauneck"),
            landing: s!("Lenggries"),
            duration: s!("01:30"),
            distance: 42.5,
            points: 60.0,
            glider: s!("Rush 6"),
        };
        let row = f.to_row();
        assert_eq!(row.len(), FLIGHT_HEADERS.len());
        assert_eq!(row[5], "42.5");
        assert_eq!(row[6], "60");
        assert_eq!(row[7], "Rush 6");
    }
}
