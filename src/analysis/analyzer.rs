use crate::analysis::classifier::{
    classify, HUMIDITY_THRESHOLDS, PRECIPITATION_THRESHOLDS, TEMPERATURE_THRESHOLDS,
    WIND_SPEED_THRESHOLDS,
};
use crate::types::observation::ObservationRecord;
use crate::types::verdict::{AltitudeVerdict, Overall, Verdict};

/// Per-category verdicts for one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub temperature: Verdict,
    pub wind: Verdict,
    pub precipitation: Verdict,
    pub humidity: Verdict,
    pub altitude: AltitudeVerdict,
}

impl Assessment {
    /// Suitable only when all four surface verdicts are suitable. Altitude is not consulted.
    pub fn overall(&self) -> Overall {
        let Assessment {
            temperature,
            wind,
            precipitation,
            humidity,
            altitude: _,
        } = self;

        if [temperature, wind, precipitation, humidity]
            .iter()
            .all(|verdict| verdict.is_suitable())
        {
            Overall::Suitable
        } else {
            Overall::Unsuitable
        }
    }

    /// Labelled verdict lines in report order.
    pub fn categories(&self) -> [(&'static str, String); 5] {
        [
            ("Temperature", self.temperature.to_string()),
            ("Wind speed", self.wind.to_string()),
            ("Precipitation", self.precipitation.to_string()),
            ("Humidity", self.humidity.to_string()),
            ("Altitude", self.altitude.to_string()),
        ]
    }
}

pub fn analyze(record: &ObservationRecord) -> Assessment {
    let (upper, mid, lower) = record.pressure_levels();
    Assessment {
        temperature: classify(record.temperature_value(), TEMPERATURE_THRESHOLDS),
        wind: classify(record.wind_speed_value(), WIND_SPEED_THRESHOLDS),
        precipitation: classify(record.precipitation_value(), PRECIPITATION_THRESHOLDS),
        humidity: classify(record.humidity_value(), HUMIDITY_THRESHOLDS),
        altitude: classify_altitude(upper, mid, lower),
    }
}

pub fn classify_altitude(
    upper: Option<f64>,
    mid: Option<f64>,
    lower: Option<f64>,
) -> AltitudeVerdict {
    let (Some(upper), Some(mid), Some(lower)) = (upper, mid, lower) else {
        return AltitudeVerdict::InsufficientData;
    };

    if upper > mid && mid > lower {
        AltitudeVerdict::StableHighAltitude
    } else if upper < mid && mid < lower {
        AltitudeVerdict::UnstableLowAltitude
    } else {
        AltitudeVerdict::Inconclusive
    }
}
