//! Train data sources.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Train;

use super::convert::decode_trains;
use super::error::DataError;

/// Default timetable file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Trait for supplying the full train collection.
///
/// This abstraction allows the finder to be run against a file on disk or
/// an in-memory timetable in tests. Each call returns a fresh, independent
/// collection; sources are read-only.
pub trait TrainSource {
    /// Load every train known to this source.
    fn load(&self) -> Result<Vec<Train>, DataError>;
}

impl TrainSource for [Train] {
    fn load(&self) -> Result<Vec<Train>, DataError> {
        Ok(self.to_vec())
    }
}

impl TrainSource for Vec<Train> {
    fn load(&self) -> Result<Vec<Train>, DataError> {
        self.as_slice().load()
    }
}

impl<T: TrainSource + ?Sized> TrainSource for &T {
    fn load(&self) -> Result<Vec<Train>, DataError> {
        (**self).load()
    }
}

/// Reads trains from a JSON timetable file.
///
/// The file is re-read on every [`load`](TrainSource::load), so each query
/// sees the file as it is at that moment.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the timetable file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

impl TrainSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Train>, DataError> {
        debug!(path = %self.path.display(), "loading train data");

        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| DataError::Unavailable {
                path: self.path.clone(),
                source,
            })?;

        let trains = decode_trains(&contents)?;
        debug!(count = trains.len(), "loaded trains");
        Ok(trains)
    }
}
