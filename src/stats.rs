// src/stats.rs
//
// Flights → summary. Pure and total: any slice, including an empty one or
// one full of unreadable dates, yields a summary.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use indexmap::IndexMap;

use crate::config::consts::RECENT_FLIGHTS;
use crate::core::date::{month_label, parse_duration_hours, parse_flight_time};
use crate::model::{FlightRecord, StatisticsSummary};

pub fn calculate(flights: &[FlightRecord]) -> StatisticsSummary {
    let total_flights = flights.len();
    // fold from +0.0: an empty f64 sum is -0.0
    let total_distance = flights.iter().fold(0.0, |acc, f| acc + f.distance);
    let total_points = flights.iter().fold(0.0, |acc, f| acc + f.points);

    let average_distance = (total_flights > 0).then(|| total_distance / total_flights as f64);
    let longest_flight = max_of(flights.iter().map(|f| f.distance));
    let best_score = max_of(flights.iter().map(|f| f.points));

    // Parse every date once; month buckets and the recency sort both use it.
    let times: Vec<Option<NaiveDateTime>> = flights
        .iter()
        .map(|f| match parse_flight_time(&f.date) {
            Ok(t) => Some(t),
            Err(e) => {
                logd!("Stats: Flight {} has no usable date ({e})", f.id);
                None
            }
        })
        .collect();

    let (flights_by_month, undated_flights) = group_by_month(&times);
    let distance_by_month = months_sum(flights, &times, |f| f.distance);
    let hours_by_month = months_sum(flights, &times, |f| parse_duration_hours(&f.duration).unwrap_or(0.0));
    let recent_flights = most_recent(flights, &times, RECENT_FLIGHTS);

    if undated_flights > 0 {
        logw!("Stats: {undated_flights} of {total_flights} flights have unreadable dates");
    }

    StatisticsSummary {
        total_flights,
        total_distance,
        total_points,
        average_distance,
        longest_flight,
        best_score,
        flights_by_month,
        distance_by_month,
        hours_by_month,
        recent_flights,
        undated_flights,
    }
}

/// `None` for an empty iterator.
fn max_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.fold(None, |acc, v| match acc {
        None => Some(v),
        Some(m) => Some(if v > m { v } else { m }),
    })
}

/// Count per "Mon YYYY" label, in order of first appearance. Undated
/// flights are counted separately.
fn group_by_month(times: &[Option<NaiveDateTime>]) -> (IndexMap<String, usize>, usize) {
    let mut by_month: IndexMap<String, usize> = IndexMap::new();
    let mut undated = 0usize;
    for t in times {
        match t {
            Some(t) => *by_month.entry(month_label(t.date())).or_insert(0) += 1,
            None => undated += 1,
        }
    }
    (by_month, undated)
}

/// Per-month sum of `value` over every dated flight; same keys and order
/// as the month counts.
fn months_sum(
    flights: &[FlightRecord],
    times: &[Option<NaiveDateTime>],
    value: impl Fn(&FlightRecord) -> f64,
) -> IndexMap<String, f64> {
    let mut by_month: IndexMap<String, f64> = IndexMap::new();
    for (f, t) in flights.iter().zip(times) {
        if let Some(t) = t {
            *by_month.entry(month_label(t.date())).or_insert(0.0) += value(f);
        }
    }
    by_month
}

/// Distance flown per month over the whole list.
pub fn months_distance(flights: &[FlightRecord]) -> IndexMap<String, f64> {
    let times: Vec<Option<NaiveDateTime>> =
        flights.iter().map(|f| parse_flight_time(&f.date).ok()).collect();
    months_sum(flights, &times, |f| f.distance)
}

/// Newest first by date and time of day; undated flights go last; ties keep
/// input order. Works on a copy, the caller's slice is untouched.
fn most_recent(flights: &[FlightRecord], times: &[Option<NaiveDateTime>], n: usize) -> Vec<FlightRecord> {
    let mut order: Vec<usize> = (0..flights.len()).collect();
    order.sort_by(|&a, &b| match (times[a], times[b]) {
        (Some(ta), Some(tb)) => tb.cmp(&ta),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    order.into_iter().take(n).map(|i| flights[i].clone()).collect()
}

/// Month buckets sorted by calendar month for charts. Labels that don't
/// read back as a month keep their relative order at the end.
pub fn months_chronological<V: Copy>(by_month: &IndexMap<String, V>) -> Vec<(String, V)> {
    let mut v: Vec<(Option<chrono::NaiveDate>, &String, V)> = by_month
        .iter()
        .map(|(k, n)| (crate::core::date::parse_month_label(k), k, *n))
        .collect();
    v.sort_by(|a, b| match (a.0, b.0) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    v.into_iter().map(|(_, k, n)| (k.clone(), n)).collect()
}
