//! Timetable loading.
//!
//! The timetable is a JSON array of flat train records:
//!
//! ```json
//! [{"trainId": 1, "departureStationId": 1, "arrivalStationId": 2,
//!   "price": 1, "departureTime": "00:00:01", "arrivalTime": "00:00:01"}]
//! ```
//!
//! Records are decoded with one typed pass each. A single malformed record
//! fails the whole load; nothing is skipped.

mod convert;
mod error;
mod source;
mod types;

pub use convert::{convert_record, decode_trains, to_record};
pub use error::{DataError, DecodeError};
pub use source::{DEFAULT_DATA_PATH, JsonFileSource, TrainSource};
pub use types::TrainRecord;
