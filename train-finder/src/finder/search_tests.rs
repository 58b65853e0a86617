//! Unit tests for the query pipeline.

use super::*;
use crate::data::{DecodeError, decode_trains};
use crate::domain::SortCriterion;
use std::cell::Cell;
use std::path::PathBuf;

/// Fixture shared with the on-disk timetable in `testdata/data.json`.
const FIXTURE: &str = include_str!("../../testdata/data.json");

fn fixture() -> Vec<Train> {
    decode_trains(FIXTURE).unwrap()
}

fn ids(trains: &[Train]) -> Vec<i64> {
    trains.iter().map(|t| t.id).collect()
}

/// Source that counts loads, to check validation runs first.
struct CountingSource {
    trains: Vec<Train>,
    loads: Cell<usize>,
}

impl CountingSource {
    fn new(trains: Vec<Train>) -> Self {
        Self {
            trains,
            loads: Cell::new(0),
        }
    }
}

impl TrainSource for CountingSource {
    fn load(&self) -> Result<Vec<Train>, DataError> {
        self.loads.set(self.loads.get() + 1);
        Ok(self.trains.clone())
    }
}

/// Source whose backing store is always unreadable.
struct BrokenSource;

impl TrainSource for BrokenSource {
    fn load(&self) -> Result<Vec<Train>, DataError> {
        Err(DataError::Unavailable {
            path: PathBuf::from("gone.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        })
    }
}

#[test]
fn validation_errors() {
    let trains = fixture();
    let cases = [
        (["", "1", "price"], QueryError::EmptyDeparture),
        (["1", "", "price"], QueryError::EmptyArrival),
        (["bad", "1", "price"], QueryError::BadDeparture),
        (["1", "bad", "price"], QueryError::BadArrival),
        (["1", "1", "bad"], QueryError::BadCriterion),
        (["1", "1", "xyz"], QueryError::BadCriterion),
        (["", "", "bad"], QueryError::EmptyDeparture),
    ];

    for ([dep, arr, by], want) in cases {
        match find_trains(&trains, dep, arr, by) {
            Err(FindError::Query(got)) => assert_eq!(got, want, "input {dep:?} {arr:?} {by:?}"),
            other => panic!("input {dep:?} {arr:?} {by:?}: expected {want:?}, got {other:?}"),
        }
    }
}

#[test]
fn validation_runs_before_loading() {
    let source = CountingSource::new(fixture());

    assert!(find_trains(&source, "", "1", "price").is_err());
    assert!(find_trains(&source, "1", "1", "bad").is_err());
    assert_eq!(source.loads.get(), 0);

    assert!(find_trains(&source, "1", "2", "price").is_ok());
    assert_eq!(source.loads.get(), 1);
}

#[test]
fn no_route_is_empty_not_error() {
    let result = find_trains(&fixture(), "1", "1", "price").unwrap();
    assert!(result.is_empty());

    let result = find_trains(&fixture(), "100", "200", "arrival-time").unwrap();
    assert!(result.is_empty());
}

#[test]
fn empty_timetable_is_empty_not_error() {
    let empty: Vec<Train> = Vec::new();
    assert!(find_trains(&empty, "1", "2", "price").unwrap().is_empty());
}

#[test]
fn station_1_to_2_every_criterion() {
    // Four trains run 1 -> 2; all orderings agree on the cheapest/earliest three
    for criterion in SortCriterion::ALL {
        let result = find_trains(&fixture(), "1", "2", criterion.name()).unwrap();
        assert_eq!(ids(&result), vec![1, 6, 7], "criterion {criterion}");
    }
}

#[test]
fn station_2_to_1_by_departure_time() {
    let result = find_trains(&fixture(), "2", "1", "departure-time").unwrap();
    assert_eq!(ids(&result), vec![9, 2]);
    assert_eq!(result[0].price.value(), 9.0);
    assert_eq!(result[0].departure_time.to_string(), "00:00:02");
    assert_eq!(result[1].price.value(), 2.0);
    assert_eq!(result[1].departure_time.to_string(), "09:00:00");
}

#[test]
fn station_2_to_1_by_price() {
    let result = find_trains(&fixture(), "2", "1", "price").unwrap();
    assert_eq!(ids(&result), vec![2, 9]);
}

#[test]
fn station_2_to_1_by_arrival_time() {
    let result = find_trains(&fixture(), "2", "1", "arrival-time").unwrap();
    assert_eq!(ids(&result), vec![2, 9]);
}

#[test]
fn returns_full_records() {
    let result = find_trains(&fixture(), "1", "2", "price").unwrap();
    let first = &result[0];

    assert_eq!(first.departure_station.get(), 1);
    assert_eq!(first.arrival_station.get(), 2);
    assert_eq!(first.price.value(), 1.0);
    assert_eq!(first.departure_time.to_string(), "00:00:01");
    assert_eq!(first.arrival_time.to_string(), "00:00:01");
}

#[test]
fn data_errors_propagate_unchanged() {
    match find_trains(&BrokenSource, "1", "2", "price") {
        Err(FindError::Data(DataError::Unavailable { path, source })) => {
            assert_eq!(path, PathBuf::from("gone.json"));
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[test]
fn query_errors_win_over_data_errors() {
    match find_trains(&BrokenSource, "x", "2", "price") {
        Err(FindError::Query(QueryError::BadDeparture)) => {}
        other => panic!("expected BadDeparture, got {other:?}"),
    }
}

#[test]
fn decode_error_is_data_error() {
    let err = FindError::from(DataError::from(DecodeError::Field {
        index: 0,
        field: "price",
        reason: "invalid price: must not be negative".into(),
    }));
    assert_eq!(
        err.to_string(),
        "failed to decode train data: record 0: invalid `price`: invalid price: must not be negative"
    );
}

#[test]
fn error_display_is_transparent() {
    let err = FindError::from(QueryError::BadCriterion);
    assert_eq!(err.to_string(), "unsupported criteria");
}

#[test]
fn custom_result_limit() {
    let finder = TrainFinder::new(fixture(), 10);
    let result = finder.find_trains("1", "2", "price").unwrap();
    assert_eq!(ids(&result), vec![1, 6, 7, 10]);

    let finder = TrainFinder::new(fixture(), 1);
    let result = finder.find_trains("1", "2", "price").unwrap();
    assert_eq!(ids(&result), vec![1]);
}

#[test]
fn run_validated_query() {
    let finder = TrainFinder::new(fixture(), DEFAULT_MAX_RESULTS);
    let query = validate("2", "1", "departure-time").unwrap();

    assert_eq!(ids(&finder.run(&query).unwrap()), vec![9, 2]);
    assert_eq!(finder.max_results(), 3);
}

#[test]
fn from_config_reads_configured_file() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/data.json");
    let config = FinderConfig::new(&path).with_max_results(2);
    let finder = TrainFinder::from_config(&config);

    assert_eq!(finder.max_results(), 2);
    let result = finder.find_trains("1", "2", "price").unwrap();
    assert_eq!(ids(&result), vec![1, 6]);
}

#[test]
fn ties_keep_timetable_order() {
    let json = r#"[
        {"trainId": 21, "departureStationId": 5, "arrivalStationId": 6, "price": 4,
         "departureTime": "10:00:00", "arrivalTime": "11:00:00"},
        {"trainId": 22, "departureStationId": 5, "arrivalStationId": 6, "price": 4,
         "departureTime": "10:00:00", "arrivalTime": "11:00:00"},
        {"trainId": 23, "departureStationId": 5, "arrivalStationId": 6, "price": 3,
         "departureTime": "10:00:00", "arrivalTime": "11:00:00"},
        {"trainId": 24, "departureStationId": 5, "arrivalStationId": 6, "price": 4,
         "departureTime": "10:00:00", "arrivalTime": "11:00:00"}
    ]"#;
    let trains = decode_trains(json).unwrap();

    let by_price = find_trains(&trains, "5", "6", "price").unwrap();
    assert_eq!(ids(&by_price), vec![23, 21, 22]);

    let by_departure = find_trains(&trains, "5", "6", "departure-time").unwrap();
    assert_eq!(ids(&by_departure), vec![21, 22, 23]);

    let by_arrival = find_trains(&trains, "5", "6", "arrival-time").unwrap();
    assert_eq!(ids(&by_arrival), vec![21, 22, 23]);
}
