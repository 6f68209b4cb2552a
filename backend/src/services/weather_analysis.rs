//! Weather analysis service
//!
//! Fetches the forecast for a destination and turns it into a
//! [`WeatherAnalysis`]. Failures never reach the caller: they are logged
//! and reported as `None`, meaning "weather unavailable".

use chrono::NaiveDate;
use shared::analysis::WeatherAnalyzer;
use shared::models::{ForecastSample, WeatherAnalysis};
use shared::types::DateRange;
use tracing::{error, info, warn};

use crate::error::AppResult;
use crate::external::weather::WeatherClient;

/// Weather analysis service
#[derive(Clone)]
pub struct WeatherAnalysisService {
    weather_client: WeatherClient,
    analyzer: WeatherAnalyzer,
    filter_to_date_range: bool,
}

impl WeatherAnalysisService {
    /// Create a new WeatherAnalysisService with the default thresholds
    pub fn new(weather_client: WeatherClient) -> Self {
        Self {
            weather_client,
            analyzer: WeatherAnalyzer::default(),
            filter_to_date_range: false,
        }
    }

    /// Keep only forecast buckets that fall inside the requested dates
    pub fn with_date_range_filter(mut self, enabled: bool) -> Self {
        self.filter_to_date_range = enabled;
        self
    }

    /// Get the weather outlook for a trip, or `None` when it cannot be produced.
    ///
    /// Unless date filtering is enabled, the provider's whole forecast
    /// horizon (about five days) is analysed regardless of the trip dates.
    pub async fn get_weather_analysis(
        &self,
        latitude: f64,
        longitude: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Option<WeatherAnalysis> {
        info!(
            latitude,
            longitude,
            %start_date,
            %end_date,
            "Starting weather analysis"
        );

        match self
            .try_weather_analysis(latitude, longitude, DateRange::new(start_date, end_date))
            .await
        {
            Ok(analysis) => {
                info!(
                    impact_score = analysis.impact_score,
                    alerts = analysis.alerts.len(),
                    "Weather analysis complete"
                );
                Some(analysis)
            }
            Err(e) => {
                error!(error = %e, latitude, longitude, "Weather analysis unavailable");
                None
            }
        }
    }

    async fn try_weather_analysis(
        &self,
        latitude: f64,
        longitude: f64,
        range: DateRange,
    ) -> AppResult<WeatherAnalysis> {
        let samples = self.weather_client.get_forecast(latitude, longitude).await?;
        info!(samples = samples.len(), "Fetched forecast entries");

        let samples = if self.filter_to_date_range {
            let kept = filter_to_range(samples, &range);
            if kept.is_empty() {
                warn!(
                    start = %range.start,
                    end = %range.end,
                    "No forecast entries inside the requested dates"
                );
            }
            kept
        } else {
            samples
        };

        Ok(self.analyzer.analyze(&samples)?)
    }
}

/// Keep samples whose UTC date lies within the range
fn filter_to_range(samples: Vec<ForecastSample>, range: &DateRange) -> Vec<ForecastSample> {
    samples
        .into_iter()
        .filter(|s| range.contains(s.timestamp.date_naive()))
        .collect()
}
