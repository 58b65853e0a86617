//! Query validation.
//!
//! Raw query input arrives as three strings. Validation turns them into a
//! typed [`Query`] or reports the first problem found, checking fields in
//! a fixed order: departure, then arrival, then criterion.

use crate::domain::{SortCriterion, StationId};

/// Errors from validating raw query input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Departure station was not given
    #[error("empty departure station")]
    EmptyDeparture,

    /// Departure station is not a non-negative integer
    #[error("bad departure station input")]
    BadDeparture,

    /// Arrival station was not given
    #[error("empty arrival station")]
    EmptyArrival,

    /// Arrival station is not a non-negative integer
    #[error("bad arrival station input")]
    BadArrival,

    /// Criterion is not one of the supported sort keys
    #[error("unsupported criteria")]
    BadCriterion,
}

/// A validated train query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    /// Station to depart from.
    pub departure: StationId,
    /// Station to arrive at.
    pub arrival: StationId,
    /// How to order the results.
    pub criterion: SortCriterion,
}

impl Query {
    /// Create a query from already-typed parts.
    pub fn new(departure: StationId, arrival: StationId, criterion: SortCriterion) -> Self {
        Self {
            departure,
            arrival,
            criterion,
        }
    }
}

/// Validate raw query input.
///
/// # Examples
///
/// ```
/// use train_finder::domain::SortCriterion;
/// use train_finder::finder::{QueryError, validate};
///
/// let query = validate("1", "2", "price").unwrap();
/// assert_eq!(query.departure.get(), 1);
/// assert_eq!(query.criterion, SortCriterion::ByPrice);
///
/// // The first failing check wins
/// assert_eq!(validate("", "", "bad"), Err(QueryError::EmptyDeparture));
/// ```
pub fn validate(departure: &str, arrival: &str, criterion: &str) -> Result<Query, QueryError> {
    if departure.is_empty() {
        return Err(QueryError::EmptyDeparture);
    }
    let departure = StationId::parse(departure).map_err(|_| QueryError::BadDeparture)?;

    if arrival.is_empty() {
        return Err(QueryError::EmptyArrival);
    }
    let arrival = StationId::parse(arrival).map_err(|_| QueryError::BadArrival)?;

    let criterion = SortCriterion::parse(criterion).map_err(|_| QueryError::BadCriterion)?;

    Ok(Query::new(departure, arrival, criterion))
}
