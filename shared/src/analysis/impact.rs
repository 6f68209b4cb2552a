//! Composite tourism impact score

use tracing::warn;

use crate::models::ForecastSample;

use super::metrics::{count_conditions, mean};
use super::thresholds::{ConditionImpactWeights, WeatherThresholds};
use super::AnalysisResult;

const OFF_IDEAL_TEMPERATURE_FACTOR: f64 = 0.8;
const WET_FACTOR: f64 = 0.6;
const WINDY_FACTOR: f64 = 0.7;

/// Score how favourable a forecast window is for tourism, rounded to 2 decimals.
///
/// Penalty factors and condition weights all lie in [0, 1] and the condition
/// shares sum to 1, so the product never leaves [0, 1].
pub fn compute_impact_score(
    samples: &[ForecastSample],
    thresholds: &WeatherThresholds,
    weights: &ConditionImpactWeights,
) -> AnalysisResult<f64> {
    let temps: Vec<f64> = samples.iter().map(|s| s.temperature_celsius).collect();
    let precip: Vec<f64> = samples.iter().map(ForecastSample::precipitation_or_zero).collect();
    let winds: Vec<f64> = samples.iter().map(|s| s.wind_speed_mps).collect();

    let avg_temp = mean(&temps)?;
    let avg_precip = mean(&precip)?;
    let avg_wind = mean(&winds)?;

    let mut score = 1.0;

    if !thresholds.temperature.ideal.contains(avg_temp) {
        score *= OFF_IDEAL_TEMPERATURE_FACTOR;
    }

    // Only the warning limit counts; heavier rain is not penalised further
    if avg_precip > thresholds.precipitation.warning {
        score *= WET_FACTOR;
    }

    if avg_wind > thresholds.wind.warning {
        score *= WINDY_FACTOR;
    }

    let total = samples.len() as f64;
    let condition_score: f64 = count_conditions(samples)
        .iter()
        .map(|(condition, &count)| {
            let weight = weights.weight_for(condition).unwrap_or_else(|| {
                warn!(
                    condition = %condition,
                    "Unknown weather condition, using neutral impact weight"
                );
                weights.unknown
            });
            weight * (count as f64 / total)
        })
        .sum();

    score *= condition_score;

    Ok((score * 100.0).round() / 100.0)
}
