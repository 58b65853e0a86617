//! Direct-connection lookup.

use crate::domain::{StationId, Train};

/// Find every train running directly from `departure` to `arrival`.
///
/// Matches keep their relative order from `trains`. No matches is an
/// empty vec, not an error.
pub fn find(trains: &[Train], departure: StationId, arrival: StationId) -> Vec<Train> {
    trains
        .iter()
        .filter(|t| t.connects(departure, arrival))
        .cloned()
        .collect()
}
