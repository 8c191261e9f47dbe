//! Deterministic fix-ups for near-conformant payloads
//!
//! A violation is salvageable only when a canonical correction exists
//! that invents no information: blanking an optional weather report,
//! clearing an out-of-range temperature, forcing transportMode to "N/A"
//! for a non-transport item, clearing a booking URL that should not be
//! there. Ids, titles, descriptions, themes, prices and durations are
//! never touched; violations on those fail closed.

use crate::config::LimitsConfig;
use crate::gate::validator::validate_value;
use crate::gate::violation::{FailureReport, Violation, ViolationKind};
use crate::schema::RecordKind;
use serde_json::{Map, Value};

/// A single deterministic correction, addressed by field path
#[derive(Debug, Clone, PartialEq, Eq)]
enum Fix {
    /// Replace the field value with `""`
    Blank(String),
    /// Replace the field value with `null`
    Clear(String),
    /// Replace the field value with the "N/A" transport mode
    ForceModeNa(String),
}

impl Fix {
    fn path(&self) -> &str {
        match self {
            Fix::Blank(path) | Fix::Clear(path) | Fix::ForceModeNa(path) => path,
        }
    }
}

/// Apply fix-ups for the given violations, returning the corrected
/// payload.
///
/// Fails with a [`FailureReport`] carrying the original violations if any
/// of them has no canonical correction. The input payload is never
/// mutated; the caller re-validates the returned value.
pub(crate) fn normalize_value(
    payload: &Value,
    kind: RecordKind,
    violations: &[Violation],
    limits: &LimitsConfig,
) -> Result<Value, FailureReport> {
    let mut fixes = Vec::with_capacity(violations.len());
    for violation in violations {
        match classify(violation, payload) {
            Some(fix) => fixes.push(fix),
            None => {
                tracing::debug!(
                    kind = kind.name(),
                    field = %violation.field,
                    violation = %violation.kind,
                    "violation is not salvageable"
                );
                return Err(FailureReport::new(kind, violations.to_vec()));
            }
        }
    }

    let mut corrected = payload.clone();
    for fix in &fixes {
        apply_fix(&mut corrected, fix);
    }
    tracing::debug!(kind = kind.name(), fixes = fixes.len(), "applied fix-ups");

    // The corrected payload must now conform; anything left over means the
    // violations were not independently fixable after all.
    if validate_value(&corrected, kind, limits).is_empty() {
        Ok(corrected)
    } else {
        Err(FailureReport::new(kind, violations.to_vec()))
    }
}

/// Decide the canonical correction for one violation, if any exists
fn classify(violation: &Violation, payload: &Value) -> Option<Fix> {
    match (violation.leaf_field(), violation.kind) {
        // A bad weather report is dropped rather than rejecting the record.
        ("weather", ViolationKind::EnumViolation) => Some(Fix::Blank(violation.field.clone())),
        // An implausible temperature is dropped the same way.
        ("temperature", ViolationKind::RangeViolation) => {
            Some(Fix::Clear(violation.field.clone()))
        }
        // transportMode has a canonical value only for non-transport items.
        // When transport is true the correct mode cannot be inferred.
        (
            "transportMode",
            ViolationKind::CrossFieldInconsistency | ViolationKind::EnumViolation,
        ) => {
            if sibling_bool(payload, &violation.field, "transport") == Some(false) {
                Some(Fix::ForceModeNa(violation.field.clone()))
            } else {
                None
            }
        }
        // A booking URL on an item that needs no booking is surplus.
        ("booking_url", ViolationKind::CrossFieldInconsistency) => {
            Some(Fix::Clear(violation.field.clone()))
        }
        _ => None,
    }
}

fn apply_fix(root: &mut Value, fix: &Fix) {
    let Some((parent, leaf)) = leaf_parent_mut(root, fix.path()) else {
        return;
    };
    let replacement = match fix {
        Fix::Blank(_) => Value::String(String::new()),
        Fix::Clear(_) => Value::Null,
        Fix::ForceModeNa(_) => Value::String("N/A".to_string()),
    };
    parent.insert(leaf, replacement);
}

/// Read a boolean sibling of the field addressed by `path`
fn sibling_bool(root: &Value, path: &str, name: &str) -> Option<bool> {
    let (parent, _) = leaf_parent(root, path)?;
    parent.get(name).and_then(Value::as_bool)
}

fn leaf_parent<'a>(root: &'a Value, path: &str) -> Option<(&'a Map<String, Value>, String)> {
    let segments = parse_path(path)?;
    let (leaf, parents) = segments.split_last()?;
    // Corrections only target plain object fields, never list entries.
    if leaf.index.is_some() {
        return None;
    }

    let mut current = root;
    for segment in parents {
        current = current.as_object()?.get(segment.name)?;
        if let Some(index) = segment.index {
            current = current.as_array()?.get(index)?;
        }
    }
    current.as_object().map(|map| (map, leaf.name.to_string()))
}

fn leaf_parent_mut<'a>(
    root: &'a mut Value,
    path: &str,
) -> Option<(&'a mut Map<String, Value>, String)> {
    let segments = parse_path(path)?;
    let (leaf, parents) = segments.split_last()?;
    if leaf.index.is_some() {
        return None;
    }

    let mut current = root;
    for segment in parents {
        current = current.as_object_mut()?.get_mut(segment.name)?;
        if let Some(index) = segment.index {
            current = current.as_array_mut()?.get_mut(index)?;
        }
    }
    current
        .as_object_mut()
        .map(|map| (map, leaf.name.to_string()))
}

struct PathSegment<'a> {
    name: &'a str,
    index: Option<usize>,
}

/// Parse "itinerary[2].weather" into its segments
fn parse_path(path: &str) -> Option<Vec<PathSegment<'_>>> {
    let mut segments = Vec::new();
    for raw in path.split('.') {
        if let Some(open) = raw.find('[') {
            let name = &raw[..open];
            let close = raw.rfind(']')?;
            let index: usize = raw.get(open + 1..close)?.parse().ok()?;
            if name.is_empty() {
                return None;
            }
            segments.push(PathSegment {
                name,
                index: Some(index),
            });
        } else {
            if raw.is_empty() {
                return None;
            }
            segments.push(PathSegment {
                name: raw,
                index: None,
            });
        }
    }
    Some(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn limits() -> LimitsConfig {
        LimitsConfig::default()
    }

    fn item_with(overrides: &[(&str, Value)]) -> Value {
        let mut item = json!({
            "title": "Museum visit",
            "transport": false,
            "start": "09:00",
            "end": "11:00",
            "description": "Explore the permanent collection.",
            "price": 0.0,
            "theme": "Culture",
            "transportMode": "N/A",
            "requires_booking": false,
            "image_link": [],
            "duration": 120,
            "id": 1
        });
        for (field, value) in overrides {
            item[*field] = value.clone();
        }
        item
    }

    fn violations_for(payload: &Value, kind: RecordKind) -> Vec<Violation> {
        validate_value(payload, kind, &limits())
    }

    #[test]
    fn test_bad_weather_is_blanked() {
        let payload = item_with(&[("weather", json!("Drizzle"))]);
        let violations = violations_for(&payload, RecordKind::ItineraryItem);
        assert_eq!(violations.len(), 1);

        let corrected =
            normalize_value(&payload, RecordKind::ItineraryItem, &violations, &limits()).unwrap();
        assert_eq!(corrected["weather"], json!(""));
        assert!(validate_value(&corrected, RecordKind::ItineraryItem, &limits()).is_empty());
    }

    #[test]
    fn test_implausible_temperature_is_cleared() {
        let payload = item_with(&[("temperature", json!(150))]);
        let violations = violations_for(&payload, RecordKind::ItineraryItem);

        let corrected =
            normalize_value(&payload, RecordKind::ItineraryItem, &violations, &limits()).unwrap();
        assert_eq!(corrected["temperature"], Value::Null);
    }

    #[test]
    fn test_surplus_booking_url_is_cleared() {
        let payload = item_with(&[("booking_url", json!("https://example.com/tickets"))]);
        let violations = violations_for(&payload, RecordKind::ItineraryItem);

        let corrected =
            normalize_value(&payload, RecordKind::ItineraryItem, &violations, &limits()).unwrap();
        assert_eq!(corrected["booking_url"], Value::Null);
    }

    #[test]
    fn test_wrong_mode_on_non_transport_item_forced_to_na() {
        let payload = item_with(&[("transportMode", json!("Bus"))]);
        let violations = violations_for(&payload, RecordKind::ItineraryItem);

        let corrected =
            normalize_value(&payload, RecordKind::ItineraryItem, &violations, &limits()).unwrap();
        assert_eq!(corrected["transportMode"], json!("N/A"));
    }

    #[test]
    fn test_bad_mode_string_on_non_transport_item_forced_to_na() {
        let payload = item_with(&[("transportMode", json!("bus"))]);
        let violations = violations_for(&payload, RecordKind::ItineraryItem);

        let corrected =
            normalize_value(&payload, RecordKind::ItineraryItem, &violations, &limits()).unwrap();
        assert_eq!(corrected["transportMode"], json!("N/A"));
    }

    #[test]
    fn test_na_mode_on_transport_item_fails_closed() {
        let payload = item_with(&[("transport", json!(true))]);
        let violations = violations_for(&payload, RecordKind::ItineraryItem);

        let report = normalize_value(&payload, RecordKind::ItineraryItem, &violations, &limits())
            .unwrap_err();
        assert_eq!(report.kind, RecordKind::ItineraryItem);
        assert_eq!(report.violations, violations);
    }

    #[test]
    fn test_negative_price_fails_closed_even_with_fixable_neighbours() {
        let payload = item_with(&[
            ("price", json!(-5.0)),
            ("booking_url", json!("https://example.com/tickets")),
        ]);
        let violations = violations_for(&payload, RecordKind::ItineraryItem);
        assert_eq!(violations.len(), 2);

        let report = normalize_value(&payload, RecordKind::ItineraryItem, &violations, &limits())
            .unwrap_err();
        assert_eq!(report.violations.len(), 2);
    }

    #[test]
    fn test_fixups_reach_into_collections() {
        let bad = item_with(&[("weather", json!("Drizzle"))]);
        let payload = json!({"itinerary": [bad]});
        let violations = violations_for(&payload, RecordKind::FullItinerary);
        assert_eq!(violations[0].field, "itinerary[0].weather");

        let corrected =
            normalize_value(&payload, RecordKind::FullItinerary, &violations, &limits()).unwrap();
        assert_eq!(corrected["itinerary"][0]["weather"], json!(""));
    }

    #[test]
    fn test_ids_are_never_rewritten() {
        let payload = item_with(&[("weather", json!("Drizzle"))]);
        let violations = violations_for(&payload, RecordKind::ItineraryItem);
        let corrected =
            normalize_value(&payload, RecordKind::ItineraryItem, &violations, &limits()).unwrap();
        assert_eq!(corrected["id"], payload["id"]);
        assert_eq!(corrected["title"], payload["title"]);
    }

    #[test]
    fn test_path_parsing() {
        let segments = parse_path("itinerary[2].weather").unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].name, "itinerary");
        assert_eq!(segments[0].index, Some(2));
        assert_eq!(segments[1].name, "weather");
        assert_eq!(segments[1].index, None);

        assert!(parse_path("").is_none());
        assert!(parse_path("itinerary[x].weather").is_none());
    }
}
