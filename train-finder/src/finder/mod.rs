//! Direct train search.
//!
//! This module answers "which trains run directly from station A to
//! station B?", returning the best few ordered by price, arrival time or
//! departure time.
//!
//! The pipeline is validate → load → find → rank. Each stage is a plain
//! function over immutable trains and is usable on its own.

mod config;
mod filter;
mod rank;
mod search;
mod validate;

pub use config::FinderConfig;
pub use filter::find;
pub use rank::{DEFAULT_MAX_RESULTS, sort_and_limit};
pub use search::{FindError, TrainFinder, find_trains};
pub use validate::{Query, QueryError, validate};
