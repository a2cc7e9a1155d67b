// tests/proptests.rs
use proptest::prelude::*;

use xc_dash::stats::calculate;
use xc_dash::FlightRecord;

fn arb_flight() -> impl Strategy<Value = FlightRecord> {
    (
        "[0-9]{1,6}",
        prop_oneof![
            (2015i32..2026, 1u32..=12, 1u32..=28)
                .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}")),
            Just(String::new()),
            Just(String::from("unknown")),
        ],
        0.0f64..500.0,
        0.0f64..1000.0,
    )
        .prop_map(|(id, date, distance, points)| FlightRecord {
            id,
            date,
            distance,
            points,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn totals_match_inputs(flights in prop::collection::vec(arb_flight(), 0..40)) {
        let s = calculate(&flights);
        prop_assert_eq!(s.total_flights, flights.len());
        let sum: f64 = flights.iter().map(|f| f.distance).sum();
        prop_assert!((s.total_distance - sum).abs() < 1e-6);
        match s.average_distance {
            Some(avg) => prop_assert!((avg - sum / flights.len() as f64).abs() < 1e-6),
            None => prop_assert!(flights.is_empty()),
        }
    }

    #[test]
    fn maxima_bound_every_flight(flights in prop::collection::vec(arb_flight(), 1..40)) {
        let s = calculate(&flights);
        let longest = s.longest_flight.unwrap();
        let best = s.best_score.unwrap();
        prop_assert!(flights.iter().all(|f| f.distance <= longest));
        prop_assert!(flights.iter().all(|f| f.points <= best));
        prop_assert!(flights.iter().any(|f| f.distance == longest));
        prop_assert!(flights.iter().any(|f| f.points == best));
    }

    #[test]
    fn month_counts_plus_undated_cover_everything(flights in prop::collection::vec(arb_flight(), 0..40)) {
        let s = calculate(&flights);
        let bucketed: usize = s.flights_by_month.values().sum();
        prop_assert_eq!(bucketed + s.undated_flights, flights.len());
    }

    #[test]
    fn recent_is_sorted_capped_and_input_untouched(flights in prop::collection::vec(arb_flight(), 0..40)) {
        let before = flights.clone();
        let s = calculate(&flights);
        prop_assert_eq!(&flights, &before);
        prop_assert_eq!(s.recent_flights.len(), flights.len().min(5));

        // ISO dates compare correctly as strings; undated ones trail
        let keys: Vec<Option<&str>> = s.recent_flights.iter()
            .map(|f| if f.date.len() == 10 && f.date.as_bytes()[4] == b'-' { Some(f.date.as_str()) } else { None })
            .collect();
        for w in keys.windows(2) {
            match (w[0], w[1]) {
                (Some(a), Some(b)) => prop_assert!(a >= b),
                (None, Some(_)) => prop_assert!(false, "undated flight ahead of a dated one"),
                _ => {}
            }
        }
    }
}
