//! Bird migration outlook from historic KMA upper-air observations.
//!
//! The pipeline downloads one station's observations for a date range, keeps
//! them in a JSON cache file, and assesses individual timestamps against fixed
//! temperature, wind, precipitation and humidity thresholds.

mod analysis;
pub mod config;
mod error;
mod session;
mod types;
mod utils;
mod weather_data;

pub use error::OutlookError;

pub use analysis::analyzer::{analyze, classify_altitude, Assessment};
pub use analysis::classifier::{
    classify, Threshold, CATCH_ALL, HUMIDITY_THRESHOLDS, PRECIPITATION_THRESHOLDS,
    TEMPERATURE_THRESHOLDS, WIND_SPEED_THRESHOLDS,
};

pub use types::observation::ObservationRecord;
pub use types::schema::{COMMENT_MARKER, DELIMITER, PAYLOAD_COLUMNS, RECORD_COLUMNS};
pub use types::verdict::{AltitudeVerdict, Overall, Verdict};

pub use session::console::Console;
pub use session::export::{resolve_report_path, save_report};
pub use session::input::{parse_input, SessionInput, CADENCE_HOURS, EXIT_KEYWORDS};
pub use session::report::{lookup, render_report};
pub use session::session_log::SessionLog;
pub use session::QuerySession;

pub use utils::default_data_file;

pub use weather_data::data_loader::ObservationLoader;
pub use weather_data::fetcher::ObservationFetcher;
pub use weather_data::parser::parse_payload;
pub use weather_data::store::ObservationStore;

pub use session::error::{ExportError, QueryError};
pub use weather_data::error::WeatherDataError;
