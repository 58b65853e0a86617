//! Configuration for the train finder.

use std::path::PathBuf;

use crate::data::{DEFAULT_DATA_PATH, JsonFileSource};

use super::rank::DEFAULT_MAX_RESULTS;

/// Configuration parameters for train queries.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Path to the JSON timetable.
    pub data_path: PathBuf,

    /// Maximum number of trains to return.
    pub max_results: usize,
}

impl FinderConfig {
    /// Create a new configuration reading from the given timetable.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set a custom result limit.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Returns a source reading the configured timetable.
    pub fn source(&self) -> JsonFileSource {
        JsonFileSource::new(&self.data_path)
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}
