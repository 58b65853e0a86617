//! Timetable loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading the timetable.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The backing store could not be read
    #[error("failed to read train data from {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing store was read but is malformed
    #[error("failed to decode train data: {0}")]
    Decode(#[from] DecodeError),
}

/// Errors from decoding timetable JSON into trains.
///
/// Every variant that concerns a single record carries the record's
/// zero-based position in the array.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The document is not a JSON array
    #[error("invalid JSON document: {0}")]
    Json(#[source] serde_json::Error),

    /// A record is missing a field or has a field of the wrong type
    ///
    /// `field` is the path to the offending value, or `None` when the
    /// problem is with the record as a whole (a missing field, or a
    /// record that is not an object). Serde names missing fields itself.
    #[error("record {index}: {}{source}", field_prefix(field))]
    Record {
        index: usize,
        field: Option<String>,
        #[source]
        source: serde_json::Error,
    },

    /// A field decoded but holds an invalid value
    #[error("record {index}: invalid `{field}`: {reason}")]
    Field {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

fn field_prefix(field: &Option<String>) -> String {
    match field {
        Some(field) => format!("invalid `{field}`: "),
        None => String::new(),
    }
}

impl DecodeError {
    /// The position of the offending record, if the error concerns one.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            DecodeError::Json(_) => None,
            DecodeError::Record { index, .. } | DecodeError::Field { index, .. } => Some(*index),
        }
    }
}
