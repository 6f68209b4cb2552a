//! Shared types and weather analysis for the tourism demand forecaster
//!
//! This crate holds the domain models and the pure analysis engine so they
//! can be used by the backend and by offline tooling alike.

pub mod analysis;
pub mod locations;
pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
