//! Result ordering and truncation.
//!
//! Orders matching trains by the requested criterion and keeps the best
//! few. The sort is stable: trains with equal keys stay in the order they
//! had in the timetable, so output is reproducible for a given file.

use crate::domain::{SortCriterion, Train};

/// Default number of trains returned by a query.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Sort a copy of `trains` by `criterion` and keep at most `limit` of them.
///
/// The caller's slice is not modified.
pub fn sort_and_limit(trains: &[Train], criterion: SortCriterion, limit: usize) -> Vec<Train> {
    let mut sorted = trains.to_vec();

    // slice::sort_by_key is stable
    match criterion {
        SortCriterion::ByPrice => sorted.sort_by_key(|t| t.price),
        SortCriterion::ByArrivalTime => sorted.sort_by_key(|t| t.arrival_time),
        SortCriterion::ByDepartureTime => sorted.sort_by_key(|t| t.departure_time),
    }

    sorted.truncate(limit);
    sorted
}
