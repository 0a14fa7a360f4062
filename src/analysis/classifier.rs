//! Threshold classification of a single numeric reading.

use crate::types::verdict::Verdict;

/// Upper bound (inclusive) paired with the verdict it selects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub upper_bound: f64,
    pub verdict: Verdict,
}

impl Threshold {
    pub const fn new(upper_bound: f64, verdict: Verdict) -> Self {
        Self {
            upper_bound,
            verdict,
        }
    }
}

/// Bound used as the final entry of a table to make it total.
pub const CATCH_ALL: f64 = f64::MAX;

// No catch-all: readings above 20 °C come back as Verdict::Unclear.
pub const TEMPERATURE_THRESHOLDS: &[Threshold] = &[
    Threshold::new(10.0, Verdict::CoolTemperature),
    Threshold::new(20.0, Verdict::WarmTemperature),
];

pub const WIND_SPEED_THRESHOLDS: &[Threshold] = &[
    Threshold::new(5.0, Verdict::CalmWind),
    Threshold::new(20.0, Verdict::ModerateWind),
    Threshold::new(CATCH_ALL, Verdict::Headwind),
];

pub const PRECIPITATION_THRESHOLDS: &[Threshold] = &[
    Threshold::new(1000.0, Verdict::NoRain),
    Threshold::new(5000.0, Verdict::LightRain),
    Threshold::new(CATCH_ALL, Verdict::HeavyRain),
];

pub const HUMIDITY_THRESHOLDS: &[Threshold] = &[
    Threshold::new(40.0, Verdict::DryAir),
    Threshold::new(70.0, Verdict::ComfortableHumidity),
    Threshold::new(85.0, Verdict::SlightlyHighHumidity),
    Threshold::new(CATCH_ALL, Verdict::HighHumidity),
];

/// Returns the verdict of the first threshold whose bound is `>= value`.
///
/// Thresholds are scanned in the order given and must be ascending; they are
/// not sorted here. `NaN` always yields [`Verdict::InvalidData`], and a value
/// above every bound yields [`Verdict::Unclear`].
pub fn classify(value: f64, thresholds: &[Threshold]) -> Verdict {
    if value.is_nan() {
        return Verdict::InvalidData;
    }
    thresholds
        .iter()
        .find(|threshold| value <= threshold.upper_bound)
        .map(|threshold| threshold.verdict)
        .unwrap_or(Verdict::Unclear)
}
