//! Data models for generated itinerary output
//!
//! This module contains the record shapes the generator is expected to
//! produce, organized by concern:
//! - Theme / Transport: closed vocabularies used to classify items
//! - Weather: report categories attached to itinerary items
//! - Activity: standalone activities and their lightweight projections
//! - Itinerary: full-day itineraries, display projections, and facts

pub mod activity;
pub mod itinerary;
pub mod theme;
pub mod transport;
pub mod weather;

// Re-export all public types for convenient access
pub use activity::{Activity, ActivityList, ActivityTitle, ActivityTitles};
pub use itinerary::{Facts, FullItinerary, ItineraryItem, ItinerarySummary, SimpleItineraryItem};
pub use theme::Theme;
pub use transport::TransportMode;
pub use weather::WeatherCondition;
