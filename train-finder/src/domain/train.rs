//! Scheduled train record.

use std::fmt;

use super::{ClockTime, Price, StationId};

/// A direct, scheduled train between two stations.
///
/// Trains are plain values: they are built once when the timetable is
/// loaded and are never modified afterwards. Pipeline stages that filter or
/// reorder trains produce new collections rather than editing in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    /// Opaque train number. Not guaranteed unique.
    pub id: i64,
    /// Station the train leaves from.
    pub departure_station: StationId,
    /// Station the train runs to.
    pub arrival_station: StationId,
    /// Ticket price.
    pub price: Price,
    /// Scheduled departure time.
    pub departure_time: ClockTime,
    /// Scheduled arrival time.
    pub arrival_time: ClockTime,
}

impl Train {
    /// Returns true if this train runs directly from `departure` to `arrival`.
    pub fn connects(&self, departure: StationId, arrival: StationId) -> bool {
        self.departure_station == departure && self.arrival_station == arrival
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "train {}: {} -> {}, price {}, departs {}, arrives {}",
            self.id,
            self.departure_station,
            self.arrival_station,
            self.price,
            self.departure_time,
            self.arrival_time
        )
    }
}
