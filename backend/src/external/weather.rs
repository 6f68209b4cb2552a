//! Weather API client for fetching forecast data
//!
//! Integrates with the OpenWeatherMap 5 day / 3 hour forecast API

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use shared::models::{ForecastSample, WeatherCondition};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    #[serde(default)]
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt: i64,
    main: OWMMain,
    weather: Vec<OWMWeather>,
    wind: OWMWind,
    rain: Option<OWMForecastRain>,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMForecastRain {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient with custom base URL (for testing)
    #[cfg(test)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Create a WeatherClient whose requests give up after `timeout`
    pub fn with_timeout(api_key: String, base_url: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Weather HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Fetch the provider's forecast horizon by GPS coordinates.
    ///
    /// The provider has no date filter; it always returns its full horizon.
    pub async fn get_forecast(&self, latitude: f64, longitude: f64) -> AppResult<Vec<ForecastSample>> {
        let url = format!("{}/forecast", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::ProviderFetch(format!("Weather API request failed: {}", e)))?;

        tracing::debug!(status = %response.status(), "Weather API responded");

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ProviderFetch(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OWMForecastResponse = response.json().await.map_err(|e| {
            AppError::ProviderFetch(format!("Failed to parse forecast response: {}", e))
        })?;

        convert_forecast_response(data)
    }
}

/// Convert OpenWeatherMap forecast response to our format
fn convert_forecast_response(data: OWMForecastResponse) -> AppResult<Vec<ForecastSample>> {
    data.list
        .into_iter()
        .map(|item| -> AppResult<ForecastSample> {
            let condition = item
                .weather
                .into_iter()
                .next()
                .map(|w| WeatherCondition::from(w.main))
                .ok_or_else(|| {
                    AppError::ProviderFetch(format!(
                        "Forecast entry at {} has no weather condition",
                        item.dt
                    ))
                })?;

            let timestamp = DateTime::<Utc>::from_timestamp(item.dt, 0).ok_or_else(|| {
                AppError::ProviderFetch(format!("Invalid forecast timestamp: {}", item.dt))
            })?;

            Ok(ForecastSample {
                timestamp,
                temperature_celsius: item.main.temp,
                precipitation_mm: item.rain.and_then(|r| r.three_hour),
                wind_speed_mps: item.wind.speed,
                condition,
            })
        })
        .collect()
}
