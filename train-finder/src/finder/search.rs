//! The train query pipeline.
//!
//! A query runs validation, loading, lookup and ranking in that order and
//! stops at the first error. Validation happens before anything is loaded,
//! so bad input never touches the timetable.

use tracing::{debug, info};

use crate::data::{DataError, JsonFileSource, TrainSource};
use crate::domain::Train;

use super::config::FinderConfig;
use super::filter::find;
use super::rank::{DEFAULT_MAX_RESULTS, sort_and_limit};
use super::validate::{Query, QueryError, validate};

/// Error from a train query.
#[derive(Debug, thiserror::Error)]
pub enum FindError {
    /// The query input was invalid
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The timetable could not be loaded
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Answers train queries against a timetable source.
///
/// The source decides where trains come from; the finder only applies the
/// result limit. Use [`TrainFinder::from_config`] to build one over the
/// timetable file named in a [`FinderConfig`].
#[derive(Debug, Clone)]
pub struct TrainFinder<S> {
    source: S,
    max_results: usize,
}

impl TrainFinder<JsonFileSource> {
    /// Create a finder reading the timetable named in `config`.
    pub fn from_config(config: &FinderConfig) -> Self {
        Self::new(config.source(), config.max_results)
    }
}

impl<S: TrainSource> TrainFinder<S> {
    /// Create a finder over `source` returning at most `max_results` trains.
    pub fn new(source: S, max_results: usize) -> Self {
        Self {
            source,
            max_results,
        }
    }

    /// Returns the result limit.
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Validate raw input and run the query.
    ///
    /// An empty result means no train connects the two stations; it is not
    /// an error.
    pub fn find_trains(
        &self,
        departure: &str,
        arrival: &str,
        criterion: &str,
    ) -> Result<Vec<Train>, FindError> {
        let query = validate(departure, arrival, criterion)?;
        self.run(&query)
    }

    /// Run an already-validated query.
    pub fn run(&self, query: &Query) -> Result<Vec<Train>, FindError> {
        let trains = self.source.load()?;
        debug!(total = trains.len(), "timetable loaded");

        let matches = find(&trains, query.departure, query.arrival);
        debug!(
            departure = %query.departure,
            arrival = %query.arrival,
            matches = matches.len(),
            "found direct connections"
        );

        let result = sort_and_limit(&matches, query.criterion, self.max_results);
        info!(
            departure = %query.departure,
            arrival = %query.arrival,
            criterion = %query.criterion,
            returned = result.len(),
            "query complete"
        );

        Ok(result)
    }
}

/// Run a query against `source` with the default result limit.
///
/// # Examples
///
/// ```
/// use train_finder::domain::{ClockTime, Price, StationId, Train};
/// use train_finder::finder::find_trains;
///
/// let trains = vec![Train {
///     id: 1,
///     departure_station: StationId::new(1),
///     arrival_station: StationId::new(2),
///     price: Price::new(1.0).unwrap(),
///     departure_time: ClockTime::parse_hhmmss("08:00:00").unwrap(),
///     arrival_time: ClockTime::parse_hhmmss("09:00:00").unwrap(),
/// }];
///
/// let found = find_trains(&trains, "1", "2", "price").unwrap();
/// assert_eq!(found.len(), 1);
///
/// // No connection is an empty result, not an error
/// assert!(find_trains(&trains, "2", "1", "price").unwrap().is_empty());
/// ```
pub fn find_trains<S: TrainSource + ?Sized>(
    source: &S,
    departure: &str,
    arrival: &str,
    criterion: &str,
) -> Result<Vec<Train>, FindError> {
    TrainFinder::new(source, DEFAULT_MAX_RESULTS).find_trains(departure, arrival, criterion)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
