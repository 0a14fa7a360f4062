use crate::weather_data::error::WeatherDataError;
use thiserror::Error;

/// Errors that end the program. Query and export failures are recovered
/// inside the console loop and never reach this level.
#[derive(Debug, Error)]
pub enum OutlookError {
    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error("Console I/O failed")]
    Console(#[source] std::io::Error),
}
