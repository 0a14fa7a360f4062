//! Defines the verdict types produced when an observation is assessed for bird migration.

use std::fmt;

/// Outcome of classifying one weather dimension against its threshold table.
///
/// Each variant carries a fixed suitability flag, exposed via [`Verdict::is_suitable`].
/// The display text is for humans only and plays no part in any decision.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Verdict {
    /// Temperature at or below 10 °C.
    CoolTemperature,
    /// Temperature above 10 °C and at or below 20 °C.
    WarmTemperature,
    /// Wind speed at or below 5.
    CalmWind,
    /// Wind speed above 5 and at or below 20.
    ModerateWind,
    /// Wind speed above 20.
    Headwind,
    /// Precipitation at or below 1000.
    NoRain,
    /// Precipitation above 1000 and at or below 5000.
    LightRain,
    /// Precipitation above 5000.
    HeavyRain,
    /// Humidity at or below 40 %.
    DryAir,
    /// Humidity above 40 % and at or below 70 %.
    ComfortableHumidity,
    /// Humidity above 70 % and at or below 85 %.
    SlightlyHighHumidity,
    /// Humidity above 85 %.
    HighHumidity,
    /// The reading could not be parsed as a number.
    InvalidData,
    /// The reading exceeded every bound in the table.
    Unclear,
}

impl Verdict {
    /// Whether this verdict counts towards a favourable overall assessment.
    pub fn is_suitable(&self) -> bool {
        matches!(
            self,
            Verdict::CoolTemperature
                | Verdict::WarmTemperature
                | Verdict::CalmWind
                | Verdict::ModerateWind
                | Verdict::NoRain
                | Verdict::LightRain
                | Verdict::ComfortableHumidity
                | Verdict::SlightlyHighHumidity
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            Verdict::CoolTemperature => "Temperature is pleasantly cool; suitable for migration.",
            Verdict::WarmTemperature => "Temperature is on the warm side but still suitable for migration.",
            Verdict::CalmWind => "Wind is light; suitable for migration.",
            Verdict::ModerateWind => "Wind is somewhat strong but still suitable for migration.",
            Verdict::Headwind => "Strong headwind; migration may be difficult.",
            Verdict::NoRain => "No significant rain; suitable for migration.",
            Verdict::LightRain => "Only light precipitation; suitable for migration.",
            Verdict::HeavyRain => "Heavy precipitation; migration may be difficult.",
            Verdict::DryAir => "Humidity is low; migration may be difficult.",
            Verdict::ComfortableHumidity => "Humidity is moderate; suitable for migration.",
            Verdict::SlightlyHighHumidity => "Humidity is slightly high but still suitable for migration.",
            Verdict::HighHumidity => "Humidity is high; migration may be difficult.",
            Verdict::InvalidData => "Data is invalid.",
            Verdict::Unclear => "Condition is unclear.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of comparing the three pressure levels of one observation.
///
/// Informational only: it is reported alongside the field verdicts but never
/// influences the [`Overall`] assessment.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum AltitudeVerdict {
    /// At least one of the three pressure levels is missing.
    InsufficientData,
    /// Upper > mid > lower.
    StableHighAltitude,
    /// Upper < mid < lower.
    UnstableLowAltitude,
    /// Any other ordering, including ties.
    Inconclusive,
}

impl AltitudeVerdict {
    pub fn description(&self) -> &'static str {
        match self {
            AltitudeVerdict::InsufficientData => "Insufficient pressure data across altitudes.",
            AltitudeVerdict::StableHighAltitude => {
                "Pressure is stable; birds are likely to favour high altitude."
            }
            AltitudeVerdict::UnstableLowAltitude => {
                "Pressure is unstable; birds are likely to favour low altitude."
            }
            AltitudeVerdict::Inconclusive => {
                "Pressure trend is complex; altitude analysis is inconclusive."
            }
        }
    }
}

impl fmt::Display for AltitudeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Combined migration assessment for one observation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Overall {
    Suitable,
    Unsuitable,
}

impl fmt::Display for Overall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overall::Suitable => f.write_str("Conditions are suitable for bird migration."),
            Overall::Unsuitable => f.write_str("Conditions are not suitable for bird migration."),
        }
    }
}
