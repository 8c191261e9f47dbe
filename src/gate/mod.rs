//! Conformance gate between generated payloads and downstream consumers
//!
//! This module wraps the record schemas with the checks a client must run
//! on generated output before it is usable:
//! - Validator: per-field, cross-field and collection checks against the
//!   registry constraint tables
//! - Normalizer: deterministic fix-ups for salvageable violations
//! - Gate: the validate-then-normalize entry point returning a typed
//!   record or a structured rejection

pub mod normalizer;
pub mod validator;
pub mod violation;

// Re-export commonly used types from submodules
pub use violation::{FailureReport, Violation, ViolationKind};

use crate::config::GateConfig;
use crate::models::{
    Activity, ActivityList, ActivityTitle, ActivityTitles, Facts, FullItinerary, ItineraryItem,
    ItinerarySummary, SimpleItineraryItem,
};
use crate::schema::{RecordKind, SchemaRegistry};
use serde_json::Value;

/// A fully validated record of any registered kind
///
/// Only the gate produces these, and only from payloads with no remaining
/// violations; partial records are never constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Activity(Activity),
    ActivityTitle(ActivityTitle),
    ActivityTitles(ActivityTitles),
    ActivityList(ActivityList),
    ItineraryItem(Box<ItineraryItem>),
    FullItinerary(FullItinerary),
    SimpleItineraryItem(SimpleItineraryItem),
    ItinerarySummary(ItinerarySummary),
    Facts(Facts),
}

impl Record {
    /// The kind this record was validated against
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Activity(_) => RecordKind::Activity,
            Record::ActivityTitle(_) => RecordKind::ActivityTitle,
            Record::ActivityTitles(_) => RecordKind::ActivityTitles,
            Record::ActivityList(_) => RecordKind::ActivityList,
            Record::ItineraryItem(_) => RecordKind::ItineraryItem,
            Record::FullItinerary(_) => RecordKind::FullItinerary,
            Record::SimpleItineraryItem(_) => RecordKind::SimpleItineraryItem,
            Record::ItinerarySummary(_) => RecordKind::ItinerarySummary,
            Record::Facts(_) => RecordKind::Facts,
        }
    }
}

/// Outcome of a validation pass
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// The payload conforms; here is the typed record
    Valid(Record),
    /// The payload does not conform; violations in validation order
    Invalid(Vec<Violation>),
}

impl ValidationOutcome {
    /// Whether the payload conformed as-is
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }
}

/// The validate-then-normalize boundary for generated output
///
/// Pure and stateless apart from configuration; a single gate can be
/// shared across threads and calls are independent per payload.
#[derive(Debug, Clone, Default)]
pub struct ConformanceGate {
    config: GateConfig,
}

impl ConformanceGate {
    /// Create a gate with explicit configuration
    #[must_use]
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Create a gate with default configuration
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The registry of schemas this gate validates against
    #[must_use]
    pub fn registry(&self) -> &'static SchemaRegistry {
        SchemaRegistry::global()
    }

    /// The configuration this gate applies
    #[must_use]
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Check a raw payload against the schema for `kind`.
    ///
    /// Never mutates the payload and never fails for data reasons: the
    /// result is either the typed record or the full violation list.
    #[tracing::instrument(name = "validate", level = "debug", skip(self, payload))]
    pub fn validate(&self, payload: &Value, kind: RecordKind) -> ValidationOutcome {
        let violations = validator::validate_value(payload, kind, &self.config.limits);
        if violations.is_empty() {
            match decode(payload, kind) {
                Ok(record) => ValidationOutcome::Valid(record),
                Err(violation) => ValidationOutcome::Invalid(vec![violation]),
            }
        } else {
            ValidationOutcome::Invalid(violations)
        }
    }

    /// Apply fix-ups for previously reported violations and re-validate.
    ///
    /// Fails with the original violations when any of them has no
    /// canonical correction.
    #[tracing::instrument(name = "normalize", level = "debug", skip(self, payload, violations))]
    pub fn normalize(
        &self,
        payload: &Value,
        kind: RecordKind,
        violations: &[Violation],
    ) -> Result<Record, FailureReport> {
        let corrected =
            normalizer::normalize_value(payload, kind, violations, &self.config.limits)?;
        match self.validate(&corrected, kind) {
            ValidationOutcome::Valid(record) => Ok(record),
            ValidationOutcome::Invalid(_) => {
                Err(FailureReport::new(kind, violations.to_vec()))
            }
        }
    }

    /// The single call downstream consumers use: validate, salvage if
    /// possible, and return a typed record or an explicit rejection.
    pub fn validate_and_normalize(
        &self,
        payload: &Value,
        kind: RecordKind,
    ) -> Result<Record, FailureReport> {
        match self.validate(payload, kind) {
            ValidationOutcome::Valid(record) => Ok(record),
            ValidationOutcome::Invalid(violations) => {
                tracing::debug!(
                    kind = kind.name(),
                    violations = violations.len(),
                    "payload rejected on first pass, attempting fix-ups"
                );
                self.normalize(payload, kind, &violations)
            }
        }
    }
}

/// Decode a violation-free payload into its typed record
fn decode(payload: &Value, kind: RecordKind) -> Result<Record, Violation> {
    fn typed<T: serde::de::DeserializeOwned>(payload: &Value, kind: RecordKind) -> Result<T, Violation> {
        serde_json::from_value(payload.clone()).map_err(|error| {
            Violation::type_mismatch("payload", format!("{} object", kind.name()), error.to_string())
        })
    }

    Ok(match kind {
        RecordKind::Activity => Record::Activity(typed(payload, kind)?),
        RecordKind::ActivityTitle => Record::ActivityTitle(typed(payload, kind)?),
        RecordKind::ActivityTitles => Record::ActivityTitles(typed(payload, kind)?),
        RecordKind::ActivityList => Record::ActivityList(typed(payload, kind)?),
        RecordKind::ItineraryItem => Record::ItineraryItem(Box::new(typed(payload, kind)?)),
        RecordKind::FullItinerary => Record::FullItinerary(typed(payload, kind)?),
        RecordKind::SimpleItineraryItem => Record::SimpleItineraryItem(typed(payload, kind)?),
        RecordKind::ItinerarySummary => Record::ItinerarySummary(typed(payload, kind)?),
        RecordKind::Facts => Record::Facts(typed(payload, kind)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gate() -> ConformanceGate {
        ConformanceGate::with_defaults()
    }

    #[test]
    fn test_valid_payload_decodes_to_typed_record() {
        let payload = json!({
            "facts": ["London has over 170 museums."]
        });
        let record = gate()
            .validate_and_normalize(&payload, RecordKind::Facts)
            .unwrap();
        assert_eq!(record.kind(), RecordKind::Facts);
        match record {
            Record::Facts(facts) => assert_eq!(facts.len(), 1),
            other => panic!("expected Facts, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_payload_reports_outcome() {
        let payload = json!({"facts": "not a list"});
        let outcome = gate().validate(&payload, RecordKind::Facts);
        assert!(!outcome.is_valid());
        match outcome {
            ValidationOutcome::Invalid(violations) => {
                assert_eq!(violations[0].field, "facts");
            }
            ValidationOutcome::Valid(_) => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_validate_never_mutates_payload() {
        let payload = json!({
            "title": "Tate Modern",
            "id": 4
        });
        let before = payload.clone();
        let _ = gate().validate(&payload, RecordKind::ActivityTitle);
        assert_eq!(payload, before);
    }

    #[test]
    fn test_gate_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConformanceGate>();
    }
}
