//! Weather signal analysis for tourism demand forecasting
//!
//! Turns a window of 3-hour forecast buckets into per-metric summaries,
//! threshold alerts, trends and a single impact score. Everything here is
//! pure and synchronous; fetching the forecast is the caller's job.

mod alerts;
mod impact;
mod metrics;
mod thresholds;
mod trend;

use thiserror::Error;

use crate::models::{ForecastSample, WeatherAnalysis, WeatherTrends};

pub use alerts::{condition_alerts, precipitation_alerts, temperature_alerts, wind_alerts};
pub use impact::compute_impact_score;
pub use metrics::{
    analyze_conditions, analyze_precipitation, analyze_temperature, analyze_wind,
    count_conditions,
};
pub use thresholds::{
    Band, ConditionImpactWeights, PrecipitationLimits, TemperatureBands, WeatherThresholds,
    WindLimits,
};
pub use trend::compute_trend;

/// Analysis error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No forecast samples to analyze")]
    EmptyInput,
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Runs the full analysis with a fixed set of thresholds and weights
#[derive(Debug, Clone, Default)]
pub struct WeatherAnalyzer {
    thresholds: WeatherThresholds,
    weights: ConditionImpactWeights,
}

impl WeatherAnalyzer {
    /// Analyze a forecast window.
    ///
    /// The flattened `alerts` list repeats the per-summary alerts in the
    /// order temperature, precipitation, wind, conditions.
    pub fn analyze(&self, samples: &[ForecastSample]) -> AnalysisResult<WeatherAnalysis> {
        if samples.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let temperature = analyze_temperature(samples, &self.thresholds)?;
        let precipitation = analyze_precipitation(samples, &self.thresholds)?;
        let wind = analyze_wind(samples, &self.thresholds)?;
        let conditions = analyze_conditions(samples)?;
        let impact_score = compute_impact_score(samples, &self.thresholds, &self.weights)?;

        let alerts = temperature
            .alerts
            .iter()
            .chain(&precipitation.alerts)
            .chain(&wind.alerts)
            .chain(&conditions.alerts)
            .cloned()
            .collect();

        let trends = WeatherTrends {
            temperature: temperature.trend,
            precipitation: precipitation.trend,
            wind: wind.trend,
            conditions: conditions.distribution.clone(),
        };

        Ok(WeatherAnalysis {
            temperature,
            precipitation,
            wind,
            conditions,
            impact_score,
            alerts,
            trends,
        })
    }
}
