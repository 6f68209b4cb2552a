//! Validation utilities for forecast requests

use crate::types::{DateRange, GpsCoordinates};

/// Validate latitude and longitude are within WGS84 bounds
pub fn validate_coordinates(coords: &GpsCoordinates) -> Result<(), &'static str> {
    if !coords.latitude.is_finite() || !coords.longitude.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    if coords.latitude < -90.0 || coords.latitude > 90.0 {
        return Err("Latitude must be between -90 and 90");
    }
    if coords.longitude < -180.0 || coords.longitude > 180.0 {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate the trip does not end before it starts
pub fn validate_date_range(range: &DateRange) -> Result<(), &'static str> {
    if range.end < range.start {
        return Err("End date must not be before start date");
    }
    Ok(())
}
