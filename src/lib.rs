//! `JourneyAI` - Schema conformance gate for AI-generated travel itineraries
//!
//! This library defines the canonical record shapes a generative model is
//! asked to produce when building travel itineraries, and the gate every
//! generated payload must pass before downstream use: conformance
//! validation against per-field constraint tables, followed by
//! deterministic normalization of salvageable payloads.

pub mod config;
pub mod error;
pub mod gate;
pub mod models;
pub mod schema;

// Re-export core types for public API
pub use config::{GateConfig, LimitsConfig, LoggingConfig};
pub use error::JourneyAiError;
pub use gate::{
    ConformanceGate, FailureReport, Record, ValidationOutcome, Violation, ViolationKind,
};
pub use models::{
    Activity, ActivityList, ActivityTitle, ActivityTitles, Facts, FullItinerary, ItineraryItem,
    ItinerarySummary, SimpleItineraryItem, Theme, TransportMode, WeatherCondition,
};
pub use schema::{
    Bounds, FieldSpec, FieldType, RecordKind, Schema, SchemaRegistry, all_generation_schemas,
    generation_schema,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, JourneyAiError>;
