//! Timetable record DTOs.
//!
//! These types map directly to the JSON timetable file: an array of flat
//! objects with camelCase keys. Times stay as strings here; they are parsed
//! into domain types in `convert`.

use serde::{Deserialize, Serialize};

/// One train as stored in the timetable file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRecord {
    /// Train number.
    pub train_id: i64,

    /// Station the train departs from.
    pub departure_station_id: u64,

    /// Station the train arrives at.
    pub arrival_station_id: u64,

    /// Ticket price.
    pub price: f64,

    /// Departure time as "HH:MM:SS".
    pub departure_time: String,

    /// Arrival time as "HH:MM:SS".
    pub arrival_time: String,
}
