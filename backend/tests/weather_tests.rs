//! Weather analysis integration tests
//!
//! Tests for weather analysis including:
//! - Property: Impact score stays within [0, 1]
//! - Property: Temperature alerts fire only outside the critical band
//! - Property: Averages equal sum / count
//! - Scenario: Full 5-day forecast windows

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use shared::analysis::{
    analyze_precipitation, analyze_temperature, analyze_wind, compute_impact_score,
    precipitation_alerts, temperature_alerts, wind_alerts, ConditionImpactWeights,
    WeatherAnalyzer, WeatherThresholds,
};
use shared::models::{AlertSeverity, ForecastSample, Trend, WeatherCondition};

fn window_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 20, 0, 0, 0).unwrap()
}

fn sample(index: usize, temp: f64, rain: Option<f64>, wind: f64, condition: WeatherCondition) -> ForecastSample {
    ForecastSample {
        timestamp: window_start() + Duration::hours(3 * index as i64),
        temperature_celsius: temp,
        precipitation_mm: rain,
        wind_speed_mps: wind,
        condition,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// 40 clear buckets at 27°C: ideal on every axis
    #[test]
    fn test_ideal_five_day_window() {
        let samples: Vec<_> = (0..40)
            .map(|i| sample(i, 27.0, None, 5.0, WeatherCondition::Clear))
            .collect();

        let analysis = WeatherAnalyzer::default().analyze(&samples).unwrap();

        assert_eq!(analysis.impact_score, 1.0);
        assert!(analysis.alerts.is_empty());
        assert_eq!(analysis.conditions.dominant, WeatherCondition::Clear);
        assert_eq!(analysis.trends.temperature, Trend::Stable);
    }

    /// 40 thunderstorm buckets: one critical alert each
    #[test]
    fn test_thunderstorm_five_day_window() {
        let samples: Vec<_> = (0..40)
            .map(|i| sample(i, 27.0, None, 5.0, WeatherCondition::Thunderstorm))
            .collect();

        let analysis = WeatherAnalyzer::default().analyze(&samples).unwrap();

        assert_eq!(analysis.impact_score, 0.2);
        assert_eq!(analysis.conditions.alerts.len(), 40);
        assert!(analysis
            .alerts
            .iter()
            .all(|a| a.severity == AlertSeverity::Critical));
    }

    /// Warming, drying, calming window
    #[test]
    fn test_improving_outlook_trends() {
        let samples: Vec<_> = (0..40)
            .map(|i| {
                let t = i as f64;
                let condition = if i < 20 {
                    WeatherCondition::Rain
                } else {
                    WeatherCondition::Clear
                };
                let rain = if i < 20 { Some(8.0 - t * 0.3) } else { None };
                sample(i, 22.0 + t * 0.2, rain, 18.0 - t * 0.3, condition)
            })
            .collect();

        let analysis = WeatherAnalyzer::default().analyze(&samples).unwrap();

        assert_eq!(analysis.trends.temperature, Trend::Increasing);
        assert_eq!(analysis.trends.precipitation, Trend::Decreasing);
        assert_eq!(analysis.trends.wind, Trend::Decreasing);
        // Rain comes first, so it wins the 20/20 tie
        assert_eq!(analysis.conditions.dominant, WeatherCondition::Rain);
        assert_eq!(analysis.conditions.percentages[&WeatherCondition::Rain], 50);
    }

    /// Regression: the warning band is not alerted on
    #[test]
    fn test_warning_band_temperatures_do_not_alert() {
        let bands = WeatherThresholds::default().temperature;
        assert!(temperature_alerts(&[20.0, 35.0], &bands).is_empty());
        assert_eq!(temperature_alerts(&[14.9, 40.1], &bands).len(), 2);
    }

    /// Wind between the warning and critical limits is silent
    #[test]
    fn test_wind_warning_range_is_silent() {
        let limits = WeatherThresholds::default().wind;
        assert!(wind_alerts(&[20.5, 25.0, 30.0], &limits).is_empty());
    }

    #[test]
    fn test_precipitation_alert_order_matches_input() {
        let limits = WeatherThresholds::default().precipitation;
        let alerts = precipitation_alerts(&[0.0, 3.0, 6.0, 16.0, 0.0], &limits);

        let severities: Vec<_> = alerts.iter().map(|a| a.severity).collect();
        assert_eq!(severities, vec![AlertSeverity::Warning, AlertSeverity::Critical]);
        assert!(alerts[0].message.contains("6.0mm"));
        assert!(alerts[1].message.contains("16.0mm"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating Caribbean-ish temperatures, with outliers
    fn temperature_strategy() -> impl Strategy<Value = f64> {
        -10.0f64..50.0
    }

    /// Strategy for generating rain amounts, sometimes missing
    fn rain_strategy() -> impl Strategy<Value = Option<f64>> {
        prop::option::of(0.0f64..40.0)
    }

    /// Strategy for generating wind speeds
    fn wind_strategy() -> impl Strategy<Value = f64> {
        0.0f64..45.0
    }

    /// Strategy for the five known condition categories
    fn condition_strategy() -> impl Strategy<Value = WeatherCondition> {
        prop_oneof![
            Just(WeatherCondition::Clear),
            Just(WeatherCondition::Clouds),
            Just(WeatherCondition::Rain),
            Just(WeatherCondition::Thunderstorm),
            Just(WeatherCondition::Snow),
        ]
    }

    fn window_strategy() -> impl Strategy<Value = Vec<ForecastSample>> {
        prop::collection::vec(
            (
                temperature_strategy(),
                rain_strategy(),
                wind_strategy(),
                condition_strategy(),
            ),
            1..48,
        )
        .prop_map(|points| {
            points
                .into_iter()
                .enumerate()
                .map(|(i, (temp, rain, wind, condition))| sample(i, temp, rain, wind, condition))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Impact score is bounded for known categories
        #[test]
        fn prop_impact_score_bounded(samples in window_strategy()) {
            let score = compute_impact_score(
                &samples,
                &WeatherThresholds::default(),
                &ConditionImpactWeights::default(),
            )
            .unwrap();

            prop_assert!(score >= 0.0);
            prop_assert!(score <= 1.0);
        }

        /// Property: Temperature alert iff outside the critical band
        #[test]
        fn prop_temperature_alert_iff_critical(temp in temperature_strategy()) {
            let bands = WeatherThresholds::default().temperature;
            let alerts = temperature_alerts(&[temp], &bands);
            let should_alert = temp < 15.0 || temp > 40.0;

            prop_assert_eq!(alerts.len(), usize::from(should_alert));
        }

        /// Property: Precipitation alert severity follows the limits
        #[test]
        fn prop_precipitation_severity(mm in 0.0f64..40.0) {
            let limits = WeatherThresholds::default().precipitation;
            let alerts = precipitation_alerts(&[mm], &limits);

            if mm > 15.0 {
                prop_assert_eq!(alerts[0].severity, AlertSeverity::Critical);
            } else if mm > 5.0 {
                prop_assert_eq!(alerts[0].severity, AlertSeverity::Warning);
            } else {
                prop_assert!(alerts.is_empty());
            }
        }

        /// Property: Averages are sum / count
        #[test]
        fn prop_averages_are_means(samples in window_strategy()) {
            let thresholds = WeatherThresholds::default();
            let n = samples.len() as f64;

            let temp_mean = samples.iter().map(|s| s.temperature_celsius).sum::<f64>() / n;
            let rain_mean = samples.iter().map(|s| s.precipitation_or_zero()).sum::<f64>() / n;
            let wind_mean = samples.iter().map(|s| s.wind_speed_mps).sum::<f64>() / n;

            let temperature = analyze_temperature(&samples, &thresholds).unwrap();
            let precipitation = analyze_precipitation(&samples, &thresholds).unwrap();
            let wind = analyze_wind(&samples, &thresholds).unwrap();

            prop_assert!((temperature.average - temp_mean).abs() < 1e-9);
            prop_assert!((precipitation.average - rain_mean).abs() < 1e-9);
            prop_assert!((wind.average - wind_mean).abs() < 1e-9);
            prop_assert!(temperature.min <= temperature.average);
            prop_assert!(temperature.average <= temperature.max);
        }

        /// Property: Flattened alerts are the concatenation of the per-metric ones
        #[test]
        fn prop_alerts_flattened(samples in window_strategy()) {
            let analysis = WeatherAnalyzer::default().analyze(&samples).unwrap();
            let expected = analysis.temperature.alerts.len()
                + analysis.precipitation.alerts.len()
                + analysis.wind.alerts.len()
                + analysis.conditions.alerts.len();

            prop_assert_eq!(analysis.alerts.len(), expected);
        }

        /// Property: Condition counts cover every sample
        #[test]
        fn prop_condition_counts_cover_window(samples in window_strategy()) {
            let analysis = WeatherAnalyzer::default().analyze(&samples).unwrap();
            let counted: u32 = analysis.conditions.distribution.values().sum();

            prop_assert_eq!(counted as usize, samples.len());
            prop_assert!(analysis.conditions.distribution.contains_key(&analysis.conditions.dominant));
        }
    }
}
