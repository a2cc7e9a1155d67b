// src/csv.rs
use std::io::{self, Write};

use crate::model::{FlightRecord, FLIGHT_HEADERS};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stream the flight listing, one row per flight in input order.
pub fn write_flights<W: Write>(
    mut w: W,
    flights: &[FlightRecord],
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &FLIGHT_HEADERS, sep)?;
    }
    for f in flights {
        write_row(&mut w, &f.to_row(), sep)?;
    }
    Ok(())
}

/// Flight listing as one string (Copy / stdout).
pub fn flights_to_string(flights: &[FlightRecord], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec can't fail.
    let _ = write_flights(&mut buf, flights, include_headers, sep);
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "a,b", "say \"hi\""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "plain,\"a,b\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tab_separated_leaves_commas_alone() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a,b", "c"], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\tc\n");
    }

    #[test]
    fn listing_has_header_then_rows() {
        let flights = vec![FlightRecord {
            id: s!("1"),
            date: s!("2024-01-10"),
            takeoff: s!("Brauneck"),
            distance: 50.5,
            points: 70.0,
            ..Default::default()
        }];
        let out = flights_to_string(&flights, true, ',');
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Id,Date,Takeoff"));
        assert_eq!(lines[1], "1,2024-01-10,Brauneck,,,50.5,70,");

        let no_header = flights_to_string(&flights, false, ',');
        assert_eq!(no_header.lines().count(), 1);
    }
}
