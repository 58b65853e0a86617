//! Sort criterion selection.

use std::fmt;
use std::str::FromStr;

/// Error returned when a criterion name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort criterion: {0:?}")]
pub struct UnknownCriterion(pub String);

/// The key used to order matching trains.
///
/// The external names are `price`, `arrival-time` and `departure-time`.
/// Parsing and rendering go through [`SortCriterion::name`] so the mapping
/// exists in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    /// Cheapest first.
    ByPrice,
    /// Earliest arrival first.
    ByArrivalTime,
    /// Earliest departure first.
    ByDepartureTime,
}

impl SortCriterion {
    /// All criteria, in the order they are offered to users.
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::ByPrice,
        SortCriterion::ByArrivalTime,
        SortCriterion::ByDepartureTime,
    ];

    /// The external name of this criterion.
    pub const fn name(self) -> &'static str {
        match self {
            SortCriterion::ByPrice => "price",
            SortCriterion::ByArrivalTime => "arrival-time",
            SortCriterion::ByDepartureTime => "departure-time",
        }
    }

    /// Look up a criterion by its exact external name.
    ///
    /// Matching is case-sensitive and does not trim whitespace.
    pub fn parse(s: &str) -> Result<Self, UnknownCriterion> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCriterion(s.to_string()))
    }

    /// The valid names joined with `|`, for prompts and help text.
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl FromStr for SortCriterion {
    type Err = UnknownCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
