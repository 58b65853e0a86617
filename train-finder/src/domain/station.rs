//! Station identifier type.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// An opaque, non-negative station identifier.
///
/// Stations carry no data beyond their number, so two stations are the same
/// station exactly when their identifiers are equal.
///
/// # Examples
///
/// ```
/// use train_finder::domain::StationId;
///
/// let station = StationId::parse("42").unwrap();
/// assert_eq!(station.get(), 42);
///
/// // Negative numbers are rejected
/// assert!(StationId::parse("-1").is_err());
///
/// // So is anything that isn't a plain decimal integer
/// assert!(StationId::parse("4 2").is_err());
/// assert!(StationId::parse("bad").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(u64);

impl StationId {
    /// Create a station id from a raw number.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parse a station id from user input.
    ///
    /// Accepts a signed decimal integer (an explicit `+` is allowed) and
    /// rejects negative values, so `-0` parses as station 0. Surrounding
    /// whitespace is not trimmed.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let signed: i64 = s.parse().map_err(|_| InvalidStationId {
            reason: "must be a decimal integer",
        })?;

        u64::try_from(signed)
            .map(Self)
            .map_err(|_| InvalidStationId {
                reason: "must not be negative",
            })
    }

    /// Returns the raw identifier.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
