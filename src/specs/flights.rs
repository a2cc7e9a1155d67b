// src/specs/flights.rs
use std::time::Instant;

use scraper::{ElementRef, Html, Selector};

use crate::auth::Session;
use crate::config::consts::FLIGHTS_PATH;
use crate::core::html::{self, attr_non_empty, first_text};
use crate::core::net::Client;
use crate::core::sanitize::parse_decimal_lenient;
use crate::error::{NetError, ParseError};
use crate::model::FlightRecord;

use super::ensure_flights;

/// Rows worth looking at: anything inside the listing table that carries
/// the id attribute. Blank ids are weeded out afterwards.
pub const ROW_SELECTOR: &str = ".flights-table tr[data-flight-id]";
pub const ROW_ID_ATTR: &str = "data-flight-id";

/// Per-field markers inside a flight row.
pub struct FieldSelectors {
    date: Selector,
    takeoff: Selector,
    landing: Selector,
    duration: Selector,
    distance: Selector,
    points: Selector,
    glider: Selector,
}

impl FieldSelectors {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            date: html::selector(".flight-date")?,
            takeoff: html::selector(".takeoff")?,
            landing: html::selector(".landing")?,
            duration: html::selector(".duration")?,
            distance: html::selector(".distance")?,
            points: html::selector(".points")?,
            glider: html::selector(".glider")?,
        })
    }
}

/// Download the "my flights" listing for the session's pilot.
pub fn fetch(client: &Client, session: &Session) -> Result<String, NetError> {
    let resp = client.get_with_session(FLIGHTS_PATH, session)?;
    let status = resp.status();
    if status.as_u16() == 401 {
        return Err(NetError::SessionExpired);
    }
    if !status.is_success() {
        return Err(NetError::Status(status.as_u16()));
    }
    let t = Instant::now();
    let body = resp.text()?;
    logd!("Flights: Downloaded {} bytes in {:?}", body.len(), t.elapsed());
    Ok(body)
}

/// Listing HTML → flights, in document order.
/// Fails only when no row carries a flight id.
pub fn parse_doc(html_doc: &str) -> Result<Vec<FlightRecord>, ParseError> {
    let t = Instant::now();
    let doc = Html::parse_document(html_doc);
    let rows = html::selector(ROW_SELECTOR)?;
    let fields = FieldSelectors::new()?;

    let flights: Vec<FlightRecord> = doc
        .select(&rows)
        .filter_map(|row| attr_non_empty(row, ROW_ID_ATTR).map(|id| extract_row(row, id, &fields)))
        .collect();

    logd!("Flights: Parsed {} rows in {:?}", flights.len(), t.elapsed());
    ensure_flights(flights)
}

/// Best-effort mapping of one row. Never fails: missing markers give ""
/// and unreadable numbers give 0.
pub fn extract_row(row: ElementRef<'_>, id: &str, f: &FieldSelectors) -> FlightRecord {
    FlightRecord {
        id: s!(id),
        date: first_text(row, &f.date),
        takeoff: first_text(row, &f.takeoff),
        landing: first_text(row, &f.landing),
        duration: first_text(row, &f.duration),
        distance: parse_decimal_lenient(&first_text(row, &f.distance)),
        points: parse_decimal_lenient(&first_text(row, &f.points)),
        glider: first_text(row, &f.glider),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(rows: &str) -> String {
        format!(
            r#"<html><body>
              <table class="flights-table">
                <thead><tr><th>Date</th><th>Takeoff</th></tr></thead>
                <tbody>{rows}</tbody>
              </table>
            </body></html>"#
        )
    }

    const ROW_1: &str = r#"
        <tr data-flight-id="1001">
          <td class="flight-date">2024-03-15</td>
          <td class="takeoff"> Brauneck </td>
          <td class="landing">Lenggries</td>
          <td class="duration">02:45</td>
          <td class="distance">53.2 km</td>
          <td class="points">84.1</td>
          <td class="glider">Ozone Rush 6</td>
        </tr>"#;

    #[test]
    fn parses_a_full_row() {
        let out = parse_doc(&wrap(ROW_1)).unwrap();
        assert_eq!(out.len(), 1);
        let f = &out[0];
        assert_eq!(f.id, "1001");
        assert_eq!(f.date, "2024-03-15");
        assert_eq!(f.takeoff, "Brauneck");
        assert_eq!(f.landing, "Lenggries");
        assert_eq!(f.duration, "02:45");
        assert_eq!(f.distance, 53.2);
        assert_eq!(f.points, 84.1);
        assert_eq!(f.glider, "Ozone Rush 6");
    }

    #[test]
    fn missing_fields_default() {
        let row = r#"<tr data-flight-id="7"><td class="takeoff">Wank</td></tr>"#;
        let out = parse_doc(&wrap(row)).unwrap();
        let f = &out[0];
        assert_eq!(f.takeoff, "Wank");
        assert_eq!(f.date, "");
        assert_eq!(f.landing, "");
        assert_eq!(f.distance, 0.0);
        assert_eq!(f.points, 0.0);
    }

    #[test]
    fn blank_ids_and_untagged_rows_are_skipped() {
        let rows = format!(
            r#"<tr class="spacer"><td>&nbsp;</td></tr>
               <tr data-flight-id="  "><td class="takeoff">ghost</td></tr>
               {ROW_1}
               <tr><td colspan=7>Summe</td></tr>"#
        );
        let out = parse_doc(&wrap(&rows)).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1001");
    }

    #[test]
    fn rows_outside_the_listing_are_ignored() {
        let doc = format!(
            r#"<table class="other"><tr data-flight-id="x"><td class="takeoff">no</td></tr></table>
               {}"#,
            wrap(ROW_1)
        );
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1001");
    }

    #[test]
    fn no_rows_is_no_flights() {
        assert_eq!(parse_doc(&wrap("")), Err(ParseError::NoFlights));
        assert_eq!(parse_doc(""), Err(ParseError::NoFlights));
        assert_eq!(parse_doc("this is not html at all"), Err(ParseError::NoFlights));
    }
}
