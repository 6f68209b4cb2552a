//! Per-metric summaries over a forecast window

use crate::models::{
    ConditionCounts, ConditionSummary, ForecastSample, PrecipitationSummary, TemperatureSummary,
    WeatherCondition, WindSummary,
};

use super::alerts::{condition_alerts, precipitation_alerts, temperature_alerts, wind_alerts};
use super::thresholds::WeatherThresholds;
use super::trend::compute_trend;
use super::{AnalysisError, AnalysisResult};

/// Summarise temperature: mean, extremes, trend and critical alerts
pub fn analyze_temperature(
    samples: &[ForecastSample],
    thresholds: &WeatherThresholds,
) -> AnalysisResult<TemperatureSummary> {
    let temps: Vec<f64> = samples.iter().map(|s| s.temperature_celsius).collect();
    let (average, min, max) = stats(&temps)?;

    Ok(TemperatureSummary {
        average,
        min,
        max,
        trend: compute_trend(&temps),
        alerts: temperature_alerts(&temps, &thresholds.temperature),
    })
}

/// Summarise rainfall; the minimum is not reported
pub fn analyze_precipitation(
    samples: &[ForecastSample],
    thresholds: &WeatherThresholds,
) -> AnalysisResult<PrecipitationSummary> {
    let precip: Vec<f64> = samples.iter().map(ForecastSample::precipitation_or_zero).collect();
    let (average, _, max) = stats(&precip)?;

    Ok(PrecipitationSummary {
        average,
        max,
        trend: compute_trend(&precip),
        alerts: precipitation_alerts(&precip, &thresholds.precipitation),
    })
}

pub fn analyze_wind(
    samples: &[ForecastSample],
    thresholds: &WeatherThresholds,
) -> AnalysisResult<WindSummary> {
    let winds: Vec<f64> = samples.iter().map(|s| s.wind_speed_mps).collect();
    let (average, min, max) = stats(&winds)?;

    Ok(WindSummary {
        average,
        min,
        max,
        trend: compute_trend(&winds),
        alerts: wind_alerts(&winds, &thresholds.wind),
    })
}

/// Count condition categories and pick the dominant one.
///
/// Ties go to the category that appears first in the window.
pub fn analyze_conditions(samples: &[ForecastSample]) -> AnalysisResult<ConditionSummary> {
    let conditions: Vec<WeatherCondition> = samples.iter().map(|s| s.condition.clone()).collect();
    let distribution = count_conditions(samples);

    let dominant = distribution
        .iter()
        .fold(None::<(&WeatherCondition, u32)>, |best, (condition, &count)| match best {
            Some(b) if b.1 >= count => Some(b),
            _ => Some((condition, count)),
        })
        .map(|(condition, _)| condition.clone())
        .ok_or(AnalysisError::EmptyInput)?;

    let total = conditions.len() as f64;
    let percentages = distribution
        .iter()
        .map(|(condition, &count)| {
            let pct = (count as f64 / total * 100.0).round() as u32;
            (condition.clone(), pct)
        })
        .collect();

    Ok(ConditionSummary {
        dominant,
        distribution,
        percentages,
        alerts: condition_alerts(&conditions),
    })
}

/// Occurrence counts of each condition category, keyed in first-seen order
pub fn count_conditions(samples: &[ForecastSample]) -> ConditionCounts {
    let mut counts = ConditionCounts::new();
    for sample in samples {
        *counts.entry(sample.condition.clone()).or_insert(0) += 1;
    }
    counts
}

/// Mean of a non-empty series
pub(crate) fn mean(values: &[f64]) -> AnalysisResult<f64> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

fn stats(values: &[f64]) -> AnalysisResult<(f64, f64, f64)> {
    let average = mean(values)?;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((average, min, max))
}
