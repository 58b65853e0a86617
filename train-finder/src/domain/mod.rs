//! Domain types for the train finder.
//!
//! These types represent validated timetable data. All of them enforce
//! their invariants at construction time, so code that receives them can
//! trust their validity.

mod criterion;
mod price;
mod station;
mod time;
mod train;

pub use criterion::{SortCriterion, UnknownCriterion};
pub use price::{InvalidPrice, Price};
pub use station::{InvalidStationId, StationId};
pub use time::{ClockTime, TimeError};
pub use train::Train;
