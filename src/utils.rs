use log::info;
use std::io;
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = "migration_outlook";
pub const DATA_FILE_NAME: &str = "weather_data.json";

/// Default location of the observation cache file.
///
/// Lives under the system cache directory; falls back to the working directory
/// when that cannot be determined.
pub fn default_data_file() -> PathBuf {
    dirs::cache_dir()
        .map(|p| p.join(DATA_DIR_NAME).join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}

pub fn ensure_dir_exists(path: &Path) -> io::Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("Path exists but is not a directory: {}", path.display()),
                ));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating directory: {}", path.display());
            std::fs::create_dir_all(path)
        }
        Err(e) => Err(e),
    }
}

/// Creates the parent directory of `file` if it has one and it is missing.
///
/// On failure the offending directory is returned alongside the error.
pub fn ensure_parent_dir_exists(file: &Path) -> Result<(), (PathBuf, io::Error)> {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            ensure_dir_exists(dir).map_err(|e| (dir.to_path_buf(), e))
        }
        _ => Ok(()),
    }
}
