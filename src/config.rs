//! Command-line configuration.

use crate::utils::default_data_file;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::fetcher::ObservationFetcher;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Heuksando, Sinan-gun, Jeollanam-do.
pub const DEFAULT_STATION: &str = "47169";
pub const DEFAULT_STATION_NAME: &str = "Heuksando";
pub const AUTH_KEY_ENV: &str = "KMA_AUTH_KEY";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "migration-outlook",
    version,
    about = "Assess bird migration conditions from historic KMA upper-air observations"
)]
pub struct Args {
    /// KMA station number
    #[arg(long, default_value = DEFAULT_STATION)]
    pub station: String,

    /// Display name of the station
    #[arg(long, default_value = DEFAULT_STATION_NAME)]
    pub station_name: String,

    /// First day of the observation range (YYYY-MM-DD)
    #[arg(long, default_value = "2023-03-01")]
    pub start: NaiveDate,

    /// Last day of the observation range (YYYY-MM-DD)
    #[arg(long, default_value = "2023-05-31")]
    pub end: NaiveDate,

    /// API hub authentication key
    #[arg(long, env = AUTH_KEY_ENV, hide_env_values = true)]
    pub auth_key: Option<String>,

    /// Override the API endpoint
    #[arg(long)]
    pub base_url: Option<String>,

    /// Connect and read timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Observation cache file [default: <cache dir>/migration_outlook/weather_data.json]
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Directory saved reports are written to
    #[arg(long, default_value = ".")]
    pub report_dir: PathBuf,

    /// Ignore HTTP(S)_PROXY settings from the environment
    #[arg(long)]
    pub no_proxy: bool,

    /// Skip the download and use the cache file only
    #[arg(long)]
    pub offline: bool,
}

impl Args {
    pub fn data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(default_data_file)
    }

    /// Fetcher for the configured station, or `None` when offline or no key is set.
    pub fn fetcher(&self) -> Result<Option<ObservationFetcher>, WeatherDataError> {
        if self.offline {
            return Ok(None);
        }
        let Some(auth_key) = self.auth_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            return Ok(None);
        };

        ObservationFetcher::builder()
            .station(self.station.as_str())
            .start(self.start)
            .end(self.end)
            .auth_key(auth_key)
            .maybe_base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .system_proxy(!self.no_proxy)
            .build()
            .map(Some)
    }

    pub fn banner(&self) -> String {
        format!(
            "===== {} (station {}) bird migration lookup, {} to {} =====",
            self.station_name,
            self.station,
            self.start.format("%Y%m%d0000"),
            self.end.format("%Y%m%d0000")
        )
    }
}
