//! Violation reporting for the conformance gate

use crate::schema::RecordKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Category of a single conformance violation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A required field is absent or null
    MissingField,
    /// A value does not match the field's semantic type
    TypeMismatch,
    /// A value is not a member of the field's closed set
    EnumViolation,
    /// Two or more fields contradict each other
    CrossFieldInconsistency,
    /// A numeric value is outside the field's bounds
    RangeViolation,
}

impl ViolationKind {
    /// Stable name used in reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ViolationKind::MissingField => "missing field",
            ViolationKind::TypeMismatch => "type mismatch",
            ViolationKind::EnumViolation => "enum violation",
            ViolationKind::CrossFieldInconsistency => "cross-field inconsistency",
            ViolationKind::RangeViolation => "range violation",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One conformance violation found in a generated payload
///
/// `field` is a path into the payload ("price", "itinerary[2].weather").
/// `expected` states the violated constraint; `actual` is the offending
/// value rendered as text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    /// Path of the offending field
    pub field: String,
    /// Violation category
    pub kind: ViolationKind,
    /// The constraint that was violated
    pub expected: String,
    /// The offending value, rendered as text
    pub actual: String,
}

impl Violation {
    /// Create a violation with explicit parts
    #[must_use]
    pub fn new<F, E, A>(field: F, kind: ViolationKind, expected: E, actual: A) -> Self
    where
        F: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Self {
            field: field.into(),
            kind,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// A required field was absent or null
    #[must_use]
    pub fn missing_field<F: Into<String>, E: Into<String>>(field: F, expected: E) -> Self {
        Self::new(field, ViolationKind::MissingField, expected, "absent")
    }

    /// A value had the wrong shape for its semantic type
    #[must_use]
    pub fn type_mismatch<F, E, A>(field: F, expected: E, actual: A) -> Self
    where
        F: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Self::new(field, ViolationKind::TypeMismatch, expected, actual)
    }

    /// A value was not a member of its closed set
    #[must_use]
    pub fn enum_violation<F, E, A>(field: F, expected: E, actual: A) -> Self
    where
        F: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Self::new(field, ViolationKind::EnumViolation, expected, actual)
    }

    /// Two fields contradicted each other
    #[must_use]
    pub fn cross_field<F, E, A>(field: F, expected: E, actual: A) -> Self
    where
        F: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Self::new(field, ViolationKind::CrossFieldInconsistency, expected, actual)
    }

    /// A numeric value fell outside its bounds
    #[must_use]
    pub fn range<F, E, A>(field: F, expected: E, actual: A) -> Self
    where
        F: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Self::new(field, ViolationKind::RangeViolation, expected, actual)
    }

    /// Last path segment without any list index ("weather" for
    /// "itinerary[2].weather")
    #[must_use]
    pub fn leaf_field(&self) -> &str {
        let leaf = self.field.rsplit('.').next().unwrap_or(&self.field);
        leaf.split('[').next().unwrap_or(leaf)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (expected {}, got {})",
            self.field, self.kind, self.expected, self.actual
        )
    }
}

/// Structured rejection of a generated payload
///
/// Carries every violation found, in validation order. A report is never
/// empty: a payload is either fully valid or rejected with at least one
/// violation.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{} payload rejected with {} violation(s)", .kind, .violations.len())]
pub struct FailureReport {
    /// The record kind the payload was validated against
    pub kind: RecordKind,
    /// All violations, in validation order
    pub violations: Vec<Violation>,
}

impl FailureReport {
    /// Build a report from a non-empty violation list
    #[must_use]
    pub fn new(kind: RecordKind, violations: Vec<Violation>) -> Self {
        Self { kind, violations }
    }

    /// First violation in validation order
    #[must_use]
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    /// Whether any violation has the given category
    #[must_use]
    pub fn contains(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|violation| violation.kind == kind)
    }

    /// Violations recorded against the given field path
    #[must_use]
    pub fn for_field(&self, field: &str) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|violation| violation.field == field)
            .collect()
    }

    /// Multi-line rendering for logs and user-facing error detail
    #[must_use]
    pub fn detail(&self) -> String {
        let mut lines = vec![self.to_string()];
        for violation in &self.violations {
            lines.push(format!("  - {violation}"));
        }
        lines.join("\n")
    }
}
