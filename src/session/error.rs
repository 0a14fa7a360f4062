use std::path::PathBuf;
use thiserror::Error;

/// Recoverable problems with a single query; the session re-prompts after each.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Input is empty. Please enter a timestamp.")]
    EmptyInput,

    #[error("Invalid format '{0}'. Enter 12 digits as YYYYMMDDHHmm.")]
    InvalidFormat(String),

    #[error("Hour '{hour}' in '{input}' is not on the 6-hour cadence (00, 06, 12, 18).")]
    OffCadence { input: String, hour: String },

    #[error("No observation found for '{0}'. Please search again.")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("There are no reports to save")]
    NothingToSave,

    #[error("Failed to create report directory '{0}'")]
    DirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to write report file '{0}'")]
    Write(PathBuf, #[source] std::io::Error),
}
