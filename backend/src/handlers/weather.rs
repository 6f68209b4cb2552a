//! HTTP handlers for weather analysis endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::locations::find_destination;
use shared::models::WeatherAnalysis;
use shared::types::{DateRange, GpsCoordinates};
use shared::validation::{validate_coordinates, validate_date_range};
use validator::{Validate, ValidationErrors};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters for analysis by coordinates
#[derive(Debug, Deserialize, Validate)]
pub struct CoordinatesQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Query parameters for analysis of a named destination
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Get the weather analysis for a trip by coordinates
pub async fn get_weather_analysis(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> AppResult<Json<WeatherAnalysis>> {
    query.validate().map_err(validation_error)?;
    let coords = checked_coordinates(query.latitude, query.longitude)?;
    let range = checked_range(query.start_date, query.end_date)?;

    analyze(&state, coords, range).await
}

/// Get the weather analysis for a trip to a named destination
pub async fn get_destination_weather_analysis(
    State(state): State<AppState>,
    Path(location): Path<String>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<WeatherAnalysis>> {
    let destination =
        find_destination(&location).ok_or_else(|| AppError::NotFound(format!("Location '{}'", location)))?;
    let range = checked_range(query.start_date, query.end_date)?;

    tracing::debug!(destination = destination.name, "Resolved destination");
    analyze(&state, destination.coordinates(), range).await
}

async fn analyze(
    state: &AppState,
    coords: GpsCoordinates,
    range: DateRange,
) -> AppResult<Json<WeatherAnalysis>> {
    state
        .weather_analysis
        .get_weather_analysis(coords.latitude, coords.longitude, range.start, range.end)
        .await
        .map(Json)
        .ok_or(AppError::WeatherServiceUnavailable)
}

/// Range checks alone let NaN through, so finiteness is checked here
fn checked_coordinates(latitude: f64, longitude: f64) -> AppResult<GpsCoordinates> {
    let coords = GpsCoordinates::new(latitude, longitude);
    validate_coordinates(&coords).map_err(|msg| {
        let field = if (-90.0..=90.0).contains(&latitude) {
            "longitude"
        } else {
            "latitude"
        };
        AppError::Validation {
            field: field.to_string(),
            message: msg.to_string(),
        }
    })?;
    Ok(coords)
}

fn checked_range(start: NaiveDate, end: NaiveDate) -> AppResult<DateRange> {
    let range = DateRange::new(start, end);
    validate_date_range(&range).map_err(|msg| AppError::Validation {
        field: "end_date".to_string(),
        message: msg.to_string(),
    })?;
    Ok(range)
}

fn validation_error(errors: ValidationErrors) -> AppError {
    let field = errors
        .field_errors()
        .keys()
        .next()
        .map(|f| f.to_string())
        .unwrap_or_default();

    AppError::Validation {
        message: format!("Invalid value for {}", field),
        field,
    }
}
