//! Business logic services for the Tourism Demand Forecast server

pub mod weather_analysis;

pub use weather_analysis::WeatherAnalysisService;
