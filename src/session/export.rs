//! Writes a finished session's reports to a plain-text file.

use crate::session::error::ExportError;
use crate::session::session_log::SessionLog;
use crate::utils::ensure_parent_dir_exists;
use chrono::NaiveDateTime;
use log::info;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPORT_STEM: &str = "weather_analysis_result";
const REPORT_EXTENSION: &str = ".txt";

/// Chooses where a report goes.
///
/// A user-supplied name gets `.txt` appended unless it already has it. Without
/// a name (or with a blank one) the file is called
/// `weather_analysis_result_<YYYYMMDD_HHMMSS>.txt`, stamped with `now`.
/// Relative names resolve against `output_dir`.
pub fn resolve_report_path(output_dir: &Path, name: Option<&str>, now: NaiveDateTime) -> PathBuf {
    let file_name = match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(n) if n.ends_with(REPORT_EXTENSION) => n.to_string(),
        Some(n) => format!("{}{}", n, REPORT_EXTENSION),
        None => format!(
            "{}_{}{}",
            DEFAULT_REPORT_STEM,
            now.format("%Y%m%d_%H%M%S"),
            REPORT_EXTENSION
        ),
    };
    output_dir.join(file_name)
}

/// Writes every report in `log` to `path`, creating parent directories as needed.
pub fn save_report(path: &Path, log: &SessionLog) -> Result<(), ExportError> {
    if log.is_empty() {
        return Err(ExportError::NothingToSave);
    }
    ensure_parent_dir_exists(path).map_err(|(dir, e)| ExportError::DirCreation(dir, e))?;
    std::fs::write(path, log.joined()).map_err(|e| ExportError::Write(path.to_path_buf(), e))?;
    info!("Saved {} report(s) to {}", log.len(), path.display());
    Ok(())
}
