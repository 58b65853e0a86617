//! Ticket price type.

use std::cmp::Ordering;
use std::fmt;

/// Error returned when a price is negative or not a finite number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {reason}")]
pub struct InvalidPrice {
    reason: &'static str,
}

/// A non-negative, finite ticket price.
///
/// Because NaN and infinities are rejected at construction, prices have a
/// total order and can be used directly as a sort key.
///
/// # Examples
///
/// ```
/// use train_finder::domain::Price;
///
/// let cheap = Price::new(1.5).unwrap();
/// let dear = Price::new(20.0).unwrap();
/// assert!(cheap < dear);
///
/// assert!(Price::new(-1.0).is_err());
/// assert!(Price::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct Price(f64);

impl Price {
    /// Create a price, rejecting negative and non-finite values.
    pub fn new(value: f64) -> Result<Self, InvalidPrice> {
        if !value.is_finite() {
            return Err(InvalidPrice {
                reason: "must be a finite number",
            });
        }
        if value < 0.0 {
            return Err(InvalidPrice {
                reason: "must not be negative",
            });
        }
        // Collapse -0.0 so that equal prices compare equal under total_cmp
        Ok(Self(value + 0.0))
    }

    /// Returns the price as a float.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Price {}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({})", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
