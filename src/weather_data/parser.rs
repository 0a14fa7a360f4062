//! Turns the raw text body of the KMA API into [`ObservationRecord`]s.

use crate::types::observation::ObservationRecord;
use crate::types::schema::{payload_index, COMMENT_MARKER, DELIMITER, PAYLOAD_COLUMNS};
use crate::weather_data::error::WeatherDataError;
use log::debug;

/// Parses a raw payload into records, preserving line order.
///
/// Blank lines and lines starting with [`COMMENT_MARKER`] are discarded. Every
/// remaining line is split on [`DELIMITER`] and matched positionally against
/// [`PAYLOAD_COLUMNS`]; lines with fewer values than that are skipped. Extra
/// trailing values are ignored.
///
/// # Errors
///
/// Returns [`WeatherDataError::EmptyPayload`] if no line survives the blank and
/// comment filter. A payload whose data lines are all too short is *not* an
/// error and yields an empty vector.
pub fn parse_payload(raw: &str) -> Result<Vec<ObservationRecord>, WeatherDataError> {
    let lines: Vec<&str> = raw
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with(COMMENT_MARKER))
        .collect();

    if lines.is_empty() {
        return Err(WeatherDataError::EmptyPayload);
    }

    let mut records = Vec::with_capacity(lines.len());
    let mut skipped = 0usize;
    for line in lines {
        let values: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
        match record_from_values(&values) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(
            "Skipped {} line(s) with fewer than {} values",
            skipped,
            PAYLOAD_COLUMNS.len()
        );
    }
    Ok(records)
}

fn record_from_values(values: &[&str]) -> Option<ObservationRecord> {
    if values.len() < PAYLOAD_COLUMNS.len() {
        return None;
    }
    let column = |name: &str| -> Option<String> {
        payload_index(name).map(|index| values[index].to_string())
    };

    Some(ObservationRecord {
        timestamp: column("YYMMDDHHMI")?,
        temperature: column("TA")?,
        humidity: column("HM")?,
        wind_speed: column("WS")?,
        precipitation: column("TPW")?,
        upper_pressure: column("UPRESS")?,
        mid_pressure: column("MPRESS")?,
        lower_pressure: column("LPRESS")?,
    })
}
