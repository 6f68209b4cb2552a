//! Weather data models

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One 3-hour forecast bucket returned by the forecast provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: f64,
    /// Rain volume over the bucket; providers omit it when dry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation_mm: Option<f64>,
    pub wind_speed_mps: f64,
    pub condition: WeatherCondition,
}

impl ForecastSample {
    /// Precipitation with a missing reading counted as zero
    pub fn precipitation_or_zero(&self) -> f64 {
        self.precipitation_mm.unwrap_or(0.0)
    }
}

/// Primary weather condition category of a forecast bucket
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    /// Any other provider category (Drizzle, Mist, ...), kept verbatim
    Other(String),
}

impl WeatherCondition {
    pub fn as_str(&self) -> &str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Clouds => "Clouds",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Other(name) => name,
        }
    }
}

impl From<&str> for WeatherCondition {
    fn from(s: &str) -> Self {
        match s {
            "Clear" => WeatherCondition::Clear,
            "Clouds" => WeatherCondition::Clouds,
            "Rain" => WeatherCondition::Rain,
            "Thunderstorm" => WeatherCondition::Thunderstorm,
            "Snow" => WeatherCondition::Snow,
            other => WeatherCondition::Other(other.to_string()),
        }
    }
}

impl From<String> for WeatherCondition {
    fn from(s: String) -> Self {
        WeatherCondition::from(s.as_str())
    }
}

impl From<WeatherCondition> for String {
    fn from(c: WeatherCondition) -> Self {
        match c {
            WeatherCondition::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a metric over the forecast window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// Weather alert raised by a single forecast bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    #[serde(rename = "type")]
    pub severity: AlertSeverity,
    pub message: String,
}

impl WeatherAlert {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Critical,
            message: message.into(),
        }
    }
}

/// Temperature statistics over the forecast window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub trend: Trend,
    pub alerts: Vec<WeatherAlert>,
}

/// Precipitation statistics over the forecast window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationSummary {
    pub average: f64,
    pub max: f64,
    pub trend: Trend,
    pub alerts: Vec<WeatherAlert>,
}

/// Wind speed statistics over the forecast window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSummary {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub trend: Trend,
    pub alerts: Vec<WeatherAlert>,
}

/// Occurrence counts keyed by condition category, in first-seen order
pub type ConditionCounts = IndexMap<WeatherCondition, u32>;

/// Distribution of condition categories over the forecast window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSummary {
    pub dominant: WeatherCondition,
    pub distribution: ConditionCounts,
    /// Rounded independently, so the values may not add up to exactly 100
    pub percentages: IndexMap<WeatherCondition, u32>,
    pub alerts: Vec<WeatherAlert>,
}

/// Trend per metric, repeated from the summaries for quick access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherTrends {
    pub temperature: Trend,
    pub precipitation: Trend,
    pub wind: Trend,
    pub conditions: ConditionCounts,
}

/// Full weather outlook for a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAnalysis {
    pub temperature: TemperatureSummary,
    pub precipitation: PrecipitationSummary,
    pub wind: WindSummary,
    pub conditions: ConditionSummary,
    /// Tourism favourability of the outlook, 0.0 (poor) to 1.0 (ideal)
    pub impact_score: f64,
    pub alerts: Vec<WeatherAlert>,
    pub trends: WeatherTrends,
}
