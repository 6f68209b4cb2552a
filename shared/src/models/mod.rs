//! Domain models for the tourism demand forecaster

mod weather;

pub use weather::*;
