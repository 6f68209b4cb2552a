//! Per-bucket threshold alerts
//!
//! Every generator emits one alert per breaching bucket, in input order.
//! Nothing is deduplicated.

use crate::models::{WeatherAlert, WeatherCondition};

use super::thresholds::{PrecipitationLimits, TemperatureBands, WindLimits};

/// Critical alerts for temperatures outside the critical band.
///
/// The warning band raises no alerts.
pub fn temperature_alerts(temps: &[f64], bands: &TemperatureBands) -> Vec<WeatherAlert> {
    temps
        .iter()
        .filter_map(|&temp| {
            if temp < bands.critical.min {
                Some(WeatherAlert::critical(format!(
                    "Critical low temperature: {}°C",
                    temp
                )))
            } else if temp > bands.critical.max {
                Some(WeatherAlert::critical(format!(
                    "Critical high temperature: {}°C",
                    temp
                )))
            } else {
                None
            }
        })
        .collect()
}

/// Warning or critical alerts for rainfall per 3-hour bucket
pub fn precipitation_alerts(precip: &[f64], limits: &PrecipitationLimits) -> Vec<WeatherAlert> {
    precip
        .iter()
        .filter_map(|&mm| {
            if mm > limits.critical {
                Some(WeatherAlert::critical(format!(
                    "Heavy rainfall expected: {}mm in 3 hours",
                    one_decimal(mm)
                )))
            } else if mm > limits.warning {
                Some(WeatherAlert::warning(format!(
                    "Moderate rainfall expected: {}mm in 3 hours",
                    one_decimal(mm)
                )))
            } else {
                None
            }
        })
        .collect()
}

/// Critical alerts for wind above the critical limit; there is no warning level
pub fn wind_alerts(winds: &[f64], limits: &WindLimits) -> Vec<WeatherAlert> {
    winds
        .iter()
        .filter(|&&speed| speed > limits.critical)
        .map(|speed| WeatherAlert::critical(format!("Critical wind speed: {}m/s", speed)))
        .collect()
}

/// Critical alert for every thunderstorm bucket
pub fn condition_alerts(conditions: &[WeatherCondition]) -> Vec<WeatherAlert> {
    conditions
        .iter()
        .filter(|c| **c == WeatherCondition::Thunderstorm)
        .map(|_| WeatherAlert::critical("Thunderstorm conditions detected"))
        .collect()
}

/// One decimal place with exact ties rounded away from zero.
///
/// Only odd multiples of 0.25 sit exactly halfway at one decimal; `{:.1}`
/// would send those to the even digit.
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
