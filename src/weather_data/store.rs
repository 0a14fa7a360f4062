//! JSON cache file holding the parsed observations between runs.

use crate::types::observation::ObservationRecord;
use crate::utils::ensure_parent_dir_exists;
use crate::weather_data::error::WeatherDataError;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes the observation table as a JSON array of flat objects.
#[derive(Debug, Clone)]
pub struct ObservationStore {
    path: PathBuf,
}

impl ObservationStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Overwrites the cache file with `records`, creating parent directories first.
    pub fn save(&self, records: &[ObservationRecord]) -> Result<(), WeatherDataError> {
        ensure_parent_dir_exists(&self.path)
            .map_err(|(dir, e)| WeatherDataError::CacheDirCreation(dir, e))?;

        let json = serde_json::to_string(records).map_err(WeatherDataError::CacheEncode)?;
        fs::write(&self.path, json)
            .map_err(|e| WeatherDataError::CacheWrite(self.path.clone(), e))?;
        info!(
            "Cached {} observations to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<ObservationRecord>, WeatherDataError> {
        if !self.exists() {
            return Err(WeatherDataError::CacheMissing(self.path.clone()));
        }
        let bytes =
            fs::read(&self.path).map_err(|e| WeatherDataError::CacheRead(self.path.clone(), e))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| WeatherDataError::CacheDecode(self.path.clone(), e))
    }
}
