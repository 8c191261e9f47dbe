//! Canonical record schemas and their constraint tables
//!
//! This module is the registry side of the conformance gate:
//! - Registry: record kinds, per-field constraint tables, name lookup
//! - Json: JSON Schema rendering used to instruct the generator

pub mod json;
pub mod registry;

// Re-export commonly used types from submodules
pub use json::{all_generation_schemas, generation_schema};
pub use registry::{Bounds, FieldSpec, FieldType, RecordKind, Schema, SchemaRegistry};
