//! Threshold tables and condition weights used by the weather analysis

use serde::{Deserialize, Serialize};

use crate::models::WeatherCondition;

/// Inclusive numeric band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Temperature bands in °C
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureBands {
    /// Best conditions for Caribbean tourism
    pub ideal: Band,
    /// Not checked by the alert generator, only the critical band is
    pub warning: Band,
    pub critical: Band,
}

/// Precipitation limits in mm per 3-hour bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationLimits {
    pub warning: f64,
    pub critical: f64,
}

/// Wind limits in m/s
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindLimits {
    /// Used by the impact score only
    pub warning: f64,
    pub critical: f64,
}

/// All thresholds applied by the analyzers and the impact scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherThresholds {
    pub temperature: TemperatureBands,
    pub precipitation: PrecipitationLimits,
    pub wind: WindLimits,
}

impl Default for WeatherThresholds {
    fn default() -> Self {
        Self {
            temperature: TemperatureBands {
                ideal: Band::new(25.0, 30.0),
                warning: Band::new(20.0, 35.0),
                critical: Band::new(15.0, 40.0),
            },
            precipitation: PrecipitationLimits {
                warning: 5.0,
                critical: 15.0,
            },
            wind: WindLimits {
                warning: 20.0,
                critical: 30.0,
            },
        }
    }
}

/// Per-condition favourability weights, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionImpactWeights {
    pub clear: f64,
    pub clouds: f64,
    pub rain: f64,
    pub thunderstorm: f64,
    pub snow: f64,
    /// Neutral weight for categories outside the known five
    pub unknown: f64,
}

impl ConditionImpactWeights {
    /// Weight of a known category, `None` for [`WeatherCondition::Other`]
    pub fn weight_for(&self, condition: &WeatherCondition) -> Option<f64> {
        match condition {
            WeatherCondition::Clear => Some(self.clear),
            WeatherCondition::Clouds => Some(self.clouds),
            WeatherCondition::Rain => Some(self.rain),
            WeatherCondition::Thunderstorm => Some(self.thunderstorm),
            WeatherCondition::Snow => Some(self.snow),
            WeatherCondition::Other(_) => None,
        }
    }
}

impl Default for ConditionImpactWeights {
    fn default() -> Self {
        Self {
            clear: 1.0,
            clouds: 0.8,
            rain: 0.4,
            thunderstorm: 0.2,
            snow: 0.1,
            unknown: 1.0,
        }
    }
}
