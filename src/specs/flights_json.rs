// src/specs/flights_json.rs
//
// Accepts either a bare array of flights or an object with a `flights`
// array (our own JSON export). Same leniency as the HTML spec: strings or
// numbers for numeric fields, anything missing defaults.

use serde::Deserialize;
use serde_json::Value;

use crate::core::sanitize::{normalize_ws, parse_decimal_lenient};
use crate::error::ParseError;
use crate::model::FlightRecord;

use super::ensure_flights;

#[derive(Deserialize)]
#[serde(untagged)]
enum Doc {
    List(Vec<RawFlight>),
    Wrapped { flights: Vec<RawFlight> },
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawFlight {
    id: Value,
    date: Value,
    takeoff: Value,
    landing: Value,
    duration: Value,
    distance: Value,
    points: Value,
    glider: Value,
}

fn text(v: &Value) -> String {
    match v {
        Value::String(s) => normalize_ws(s),
        Value::Number(n) => n.to_string(),
        _ => s!(),
    }
}

fn number(v: &Value) -> f64 {
    match v {
        Value::Number(n) => n.as_f64().filter(|x| x.is_finite() && *x >= 0.0).unwrap_or(0.0),
        Value::String(s) => parse_decimal_lenient(s),
        _ => 0.0,
    }
}

impl RawFlight {
    fn into_record(self) -> Option<FlightRecord> {
        let id = text(&self.id);
        if id.is_empty() {
            return None;
        }
        Some(FlightRecord {
            id,
            date: text(&self.date),
            takeoff: text(&self.takeoff),
            landing: text(&self.landing),
            duration: text(&self.duration),
            distance: number(&self.distance),
            points: number(&self.points),
            glider: text(&self.glider),
        })
    }
}

pub fn parse_doc(json_doc: &str) -> Result<Vec<FlightRecord>, ParseError> {
    let doc: Doc = serde_json::from_str(json_doc)
        .map_err(|e| ParseError::Markup(format!("invalid flight JSON: {e}")))?;
    let raw = match doc {
        Doc::List(v) => v,
        Doc::Wrapped { flights } => flights,
    };
    let flights: Vec<FlightRecord> = raw.into_iter().filter_map(RawFlight::into_record).collect();
    logd!("Flights: Decoded {} JSON records", flights.len());
    ensure_flights(flights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_with_mixed_number_types() {
        let doc = r#"[
            {"id": "1", "date": "2024-01-10", "takeoff": "Tegelberg", "distance": 50, "points": "100.5"},
            {"id": 2, "date": "2024-02-05", "distance": "80 km", "points": null, "glider": "Mentor 7"}
        ]"#;
        let out = parse_doc(doc).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].takeoff, "Tegelberg");
        assert_eq!(out[0].distance, 50.0);
        assert_eq!(out[0].points, 100.5);
        assert_eq!(out[1].id, "2");
        assert_eq!(out[1].distance, 80.0);
        assert_eq!(out[1].points, 0.0);
        assert_eq!(out[1].landing, "");
    }

    #[test]
    fn wrapped_export_shape() {
        let doc = r#"{"statistics": {"totalFlights": 1}, "flights": [{"id": "9", "points": -3}]}"#;
        let out = parse_doc(doc).unwrap();
        assert_eq!(out[0].id, "9");
        assert_eq!(out[0].points, 0.0);
    }

    #[test]
    fn records_without_id_are_skipped() {
        let doc = r#"[{"date": "2024-01-01"}, {"id": ""}, {"id": "3"}]"#;
        let out = parse_doc(doc).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "3");
    }

    #[test]
    fn empty_and_broken_documents() {
        assert_eq!(parse_doc("[]"), Err(ParseError::NoFlights));
        assert_eq!(parse_doc(r#"{"flights": []}"#), Err(ParseError::NoFlights));
        assert!(matches!(parse_doc("{not json"), Err(ParseError::Markup(_))));
        assert!(matches!(parse_doc(r#"{"other": 1}"#), Err(ParseError::Markup(_))));
    }
}
