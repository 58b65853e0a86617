//! Conversion between timetable DTOs and domain types.
//!
//! Decoding is all-or-nothing: the first malformed record aborts the whole
//! load and is reported with its position and, where possible, the name of
//! the offending field.

use tracing::trace;

use crate::domain::{ClockTime, Price, StationId, Train};

use super::error::DecodeError;
use super::types::TrainRecord;

/// Decode a JSON timetable document into trains.
///
/// The document must be a JSON array of train records. Records are decoded
/// one at a time so errors can name the record that failed.
pub fn decode_trains(json: &str) -> Result<Vec<Train>, DecodeError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json).map_err(DecodeError::Json)?;

    let mut trains = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let record: TrainRecord = serde_path_to_error::deserialize(value)
            .map_err(|e| record_error(index, e))?;
        trains.push(convert_record(&record, index)?);
    }

    trace!(count = trains.len(), "decoded train records");
    Ok(trains)
}

/// Keep the path to the failing value so wrong-typed fields are named.
fn record_error(index: usize, err: serde_path_to_error::Error<serde_json::Error>) -> DecodeError {
    let path = err.path().to_string();
    // The root path renders as "."
    let field = (path != ".").then_some(path);
    DecodeError::Record {
        index,
        field,
        source: err.into_inner(),
    }
}

/// Convert a single record into a domain train.
///
/// `index` is only used to label errors.
pub fn convert_record(record: &TrainRecord, index: usize) -> Result<Train, DecodeError> {
    let price = Price::new(record.price).map_err(|e| DecodeError::Field {
        index,
        field: "price",
        reason: e.to_string(),
    })?;

    let departure_time = parse_time(&record.departure_time, index, "departureTime")?;
    let arrival_time = parse_time(&record.arrival_time, index, "arrivalTime")?;

    Ok(Train {
        id: record.train_id,
        departure_station: StationId::new(record.departure_station_id),
        arrival_station: StationId::new(record.arrival_station_id),
        price,
        departure_time,
        arrival_time,
    })
}

/// Convert a domain train back into its stored representation.
pub fn to_record(train: &Train) -> TrainRecord {
    TrainRecord {
        train_id: train.id,
        departure_station_id: train.departure_station.get(),
        arrival_station_id: train.arrival_station.get(),
        price: train.price.value(),
        departure_time: train.departure_time.to_string(),
        arrival_time: train.arrival_time.to_string(),
    }
}

fn parse_time(s: &str, index: usize, field: &'static str) -> Result<ClockTime, DecodeError> {
    ClockTime::parse_hhmmss(s).map_err(|e| DecodeError::Field {
        index,
        field,
        reason: format!("{e} ({s:?})"),
    })
}
