//! Data models for the weather outfit service
//!
//! This module contains the per-request value types organized by concern:
//! - Location: coordinates, lookup queries and resolved locations
//! - Weather: the flat weather summary returned to clients
//! - Outfit: clothing recommendations and tips

pub mod location;
pub mod outfit;
pub mod weather;

// Re-export all public types for convenient access
pub use location::{Coordinates, LocationQuery, ResolvedLocation};
pub use outfit::{OutfitRecommendation, TipIcon, WeatherTip};
pub use weather::{DailyForecast, WeatherSummary};
