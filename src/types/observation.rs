//! A single upper-air observation as delivered by the KMA API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One weather reading at one timestamp.
///
/// All values are kept exactly as the API sent them. Numeric views are derived
/// on demand: the four surface readings coerce to `NaN` when unparseable, the
/// three pressure levels coerce to `None`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// Observation time, `YYYYMMDDHHmm`.
    #[serde(rename = "YYMMDDHHMI")]
    pub timestamp: String,
    /// Air temperature in °C.
    #[serde(rename = "TA")]
    pub temperature: String,
    /// Relative humidity in %.
    #[serde(rename = "HM")]
    pub humidity: String,
    /// Wind speed.
    #[serde(rename = "WS")]
    pub wind_speed: String,
    /// Total precipitable water.
    #[serde(rename = "TPW")]
    pub precipitation: String,
    /// Pressure at the upper cloud layer.
    #[serde(rename = "UPRESS")]
    pub upper_pressure: String,
    /// Pressure at the middle cloud layer.
    #[serde(rename = "MPRESS")]
    pub mid_pressure: String,
    /// Pressure at the lower cloud layer.
    #[serde(rename = "LPRESS")]
    pub lower_pressure: String,
}

impl ObservationRecord {
    pub fn temperature_value(&self) -> f64 {
        parse_or_nan(&self.temperature)
    }

    pub fn humidity_value(&self) -> f64 {
        parse_or_nan(&self.humidity)
    }

    pub fn wind_speed_value(&self) -> f64 {
        parse_or_nan(&self.wind_speed)
    }

    pub fn precipitation_value(&self) -> f64 {
        parse_or_nan(&self.precipitation)
    }

    /// Upper, mid and lower pressure, each `None` when missing or unparseable.
    pub fn pressure_levels(&self) -> (Option<f64>, Option<f64>, Option<f64>) {
        (
            parse_optional(&self.upper_pressure),
            parse_optional(&self.mid_pressure),
            parse_optional(&self.lower_pressure),
        )
    }
}

fn parse_or_nan(raw: &str) -> f64 {
    parse_optional(raw).unwrap_or(f64::NAN)
}

fn parse_optional(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

impl fmt::Display for ObservationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "time={} TA={} HM={} WS={} TPW={} UPRESS={} MPRESS={} LPRESS={}",
            self.timestamp,
            self.temperature,
            self.humidity,
            self.wind_speed,
            self.precipitation,
            self.upper_pressure,
            self.mid_pressure,
            self.lower_pressure
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(
        timestamp: &str,
        surface: [&str; 4],
        pressures: [&str; 3],
    ) -> ObservationRecord {
        ObservationRecord {
            timestamp: timestamp.to_string(),
            temperature: surface[0].to_string(),
            humidity: surface[1].to_string(),
            wind_speed: surface[2].to_string(),
            precipitation: surface[3].to_string(),
            upper_pressure: pressures[0].to_string(),
            mid_pressure: pressures[1].to_string(),
            lower_pressure: pressures[2].to_string(),
        }
    }

    #[test]
    fn numeric_views_parse_plain_values() {
        let obs = record("202303010000", ["15", "60", "3", "200"], ["900", "800", "700"]);
        assert_eq!(obs.temperature_value(), 15.0);
        assert_eq!(obs.humidity_value(), 60.0);
        assert_eq!(obs.wind_speed_value(), 3.0);
        assert_eq!(obs.precipitation_value(), 200.0);
        assert_eq!(
            obs.pressure_levels(),
            (Some(900.0), Some(800.0), Some(700.0))
        );
    }

    #[test]
    fn unparseable_surface_values_become_nan() {
        let obs = record("202303010000", ["-", "", "abc", "1.5.2"], ["900", "800", "700"]);
        assert!(obs.temperature_value().is_nan());
        assert!(obs.humidity_value().is_nan());
        assert!(obs.wind_speed_value().is_nan());
        assert!(obs.precipitation_value().is_nan());
    }

    #[test]
    fn unparseable_pressure_is_absent_not_zero() {
        let obs = record("202303010000", ["1", "2", "3", "4"], ["", "x", "700"]);
        assert_eq!(obs.pressure_levels(), (None, None, Some(700.0)));
    }

    #[test]
    fn serializes_with_api_column_names() -> Result<(), Box<dyn std::error::Error>> {
        let obs = record("202303010600", ["1", "2", "3", "4"], ["5", "6", "7"]);
        let json = serde_json::to_value(&obs)?;
        let object = json.as_object().ok_or("expected a JSON object")?;

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut expected = crate::types::schema::RECORD_COLUMNS.to_vec();
        expected.sort_unstable();
        assert_eq!(keys, expected);
        assert_eq!(object["YYMMDDHHMI"], "202303010600");
        Ok(())
    }
}
