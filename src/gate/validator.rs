//! Conformance validation of raw generated payloads
//!
//! A pure pass over a `serde_json::Value` against the registry constraint
//! tables. Checks run in a fixed order per field: presence, semantic
//! type, closed-set membership, numeric bounds. Cross-field rules and
//! collection sweeps (id uniqueness, chronology, non-overlap) run after
//! the per-field pass. Input is never mutated.

use crate::config::LimitsConfig;
use crate::gate::violation::Violation;
use crate::models::TransportMode;
use crate::schema::{Bounds, FieldSpec, FieldType, RecordKind, SchemaRegistry};
use chrono::NaiveTime;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Validate a raw payload against the schema for `kind`.
///
/// Returns every violation found, in validation order; an empty list
/// means the payload conforms.
pub(crate) fn validate_value(
    payload: &Value,
    kind: RecordKind,
    limits: &LimitsConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    match payload.as_object() {
        Some(object) => validate_record(object, kind, "", limits, &mut violations),
        None => violations.push(Violation::type_mismatch(
            "payload",
            format!("{} object", kind.name()),
            render(payload),
        )),
    }
    tracing::debug!(
        kind = kind.name(),
        violations = violations.len(),
        "validated payload"
    );
    violations
}

fn validate_record(
    object: &Map<String, Value>,
    kind: RecordKind,
    prefix: &str,
    limits: &LimitsConfig,
    out: &mut Vec<Violation>,
) {
    let schema = SchemaRegistry::global().schema(kind);

    for field in schema.fields {
        check_field(object, field, prefix, limits, out);
    }

    match kind {
        RecordKind::ItineraryItem => check_item_consistency(object, prefix, out),
        RecordKind::FullItinerary => {
            if let Some(items) = object.get("itinerary").and_then(Value::as_array) {
                let base = join_path(prefix, "itinerary");
                check_unique_ids(items, &base, out);
                check_chronology(items, &base, out);
            }
        }
        RecordKind::ItinerarySummary => {
            if let Some(items) = object.get("itinerary").and_then(Value::as_array) {
                let base = join_path(prefix, "itinerary");
                check_unique_ids(items, &base, out);
                check_start_ordering(items, &base, out);
            }
        }
        RecordKind::ActivityList | RecordKind::ActivityTitles => {
            if let Some(items) = object.get("activities").and_then(Value::as_array) {
                let base = join_path(prefix, "activities");
                check_unique_ids(items, &base, out);
            }
        }
        _ => {}
    }
}

fn check_field(
    object: &Map<String, Value>,
    field: &FieldSpec,
    prefix: &str,
    limits: &LimitsConfig,
    out: &mut Vec<Violation>,
) {
    let path = join_path(prefix, field.name);
    let value = object.get(field.name).filter(|value| !value.is_null());

    let Some(value) = value else {
        if field.required {
            out.push(Violation::missing_field(path, field.ty.describe()));
        }
        return;
    };

    match field.ty {
        FieldType::Text => {
            if value.as_str().is_none() {
                out.push(Violation::type_mismatch(
                    path,
                    field.ty.describe(),
                    render(value),
                ));
            }
        }
        FieldType::TimeOfDay => match value.as_str() {
            None => out.push(Violation::type_mismatch(
                path,
                field.ty.describe(),
                render(value),
            )),
            Some(raw) => {
                if parse_time_of_day(raw).is_none() {
                    out.push(Violation::type_mismatch(
                        path,
                        "time-of-day string such as \"09:30\"",
                        raw,
                    ));
                }
            }
        },
        FieldType::Integer => match as_integer(value) {
            None => out.push(Violation::type_mismatch(
                path,
                field.ty.describe(),
                render(value),
            )),
            #[allow(clippy::cast_precision_loss)]
            Some(number) => check_bounds(&path, number as f64, field, limits, out),
        },
        FieldType::Float => match value.as_f64() {
            None => out.push(Violation::type_mismatch(
                path,
                field.ty.describe(),
                render(value),
            )),
            Some(number) => check_bounds(&path, number, field, limits, out),
        },
        FieldType::Boolean => {
            if value.as_bool().is_none() {
                out.push(Violation::type_mismatch(
                    path,
                    field.ty.describe(),
                    render(value),
                ));
            }
        }
        FieldType::UrlList => check_string_list(value, &path, field, true, out),
        FieldType::TextList => check_string_list(value, &path, field, false, out),
        FieldType::Theme | FieldType::TransportMode => {
            check_closed_set(value, &path, field, false, out);
        }
        FieldType::Weather => check_closed_set(value, &path, field, true, out),
        FieldType::Items(item_kind) => match value.as_array() {
            None => out.push(Violation::type_mismatch(
                path,
                field.ty.describe(),
                render(value),
            )),
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{path}[{index}]");
                    match item.as_object() {
                        Some(nested) => {
                            validate_record(nested, item_kind, &item_path, limits, out);
                        }
                        None => out.push(Violation::type_mismatch(
                            item_path,
                            format!("{} object", item_kind.name()),
                            render(item),
                        )),
                    }
                }
            }
        },
    }
}

fn check_closed_set(
    value: &Value,
    path: &str,
    field: &FieldSpec,
    allow_blank: bool,
    out: &mut Vec<Violation>,
) {
    let values = field.ty.allowed_values().unwrap_or_default();
    match value.as_str() {
        None => out.push(Violation::type_mismatch(
            path,
            field.ty.describe(),
            render(value),
        )),
        Some("") if allow_blank => {}
        Some(raw) => {
            if !values.contains(&raw) {
                out.push(Violation::enum_violation(
                    path,
                    format!("one of: {}", values.join(", ")),
                    raw,
                ));
            }
        }
    }
}

fn check_string_list(
    value: &Value,
    path: &str,
    field: &FieldSpec,
    require_url: bool,
    out: &mut Vec<Violation>,
) {
    let Some(entries) = value.as_array() else {
        out.push(Violation::type_mismatch(
            path,
            field.ty.describe(),
            render(value),
        ));
        return;
    };

    for (index, entry) in entries.iter().enumerate() {
        let entry_path = format!("{path}[{index}]");
        match entry.as_str() {
            None => out.push(Violation::type_mismatch(
                entry_path,
                "string",
                render(entry),
            )),
            Some(raw) if require_url => {
                if !raw.starts_with("http://") && !raw.starts_with("https://") {
                    out.push(Violation::type_mismatch(entry_path, "http(s) URL", raw));
                }
            }
            Some(_) => {}
        }
    }
}

fn check_bounds(
    path: &str,
    value: f64,
    field: &FieldSpec,
    limits: &LimitsConfig,
    out: &mut Vec<Violation>,
) {
    let Some(bounds) = bounds_for(field, limits) else {
        return;
    };
    if !bounds.contains(value) {
        out.push(Violation::range(path, bounds.describe(), value.to_string()));
    }
}

/// Effective bounds for a field. Temperature plausibility is deployment
/// policy and comes from configuration; every other bound is registry
/// data.
fn bounds_for(field: &FieldSpec, limits: &LimitsConfig) -> Option<Bounds> {
    if field.name == "temperature" {
        return Some(Bounds::between(
            limits.temperature_min_c,
            limits.temperature_max_c,
        ));
    }
    field.bounds
}

fn check_item_consistency(object: &Map<String, Value>, prefix: &str, out: &mut Vec<Violation>) {
    let transport = object.get("transport").and_then(Value::as_bool);
    let mode = object
        .get("transportMode")
        .and_then(Value::as_str)
        .and_then(TransportMode::from_name);

    // Only judge the pairing when both sides are individually well-formed;
    // type and enum problems are already reported.
    if let (Some(transport), Some(mode)) = (transport, mode) {
        if transport && mode == TransportMode::NotApplicable {
            out.push(Violation::cross_field(
                join_path(prefix, "transportMode"),
                "a concrete transport mode when transport is true",
                mode.as_str(),
            ));
        }
        if !transport && mode != TransportMode::NotApplicable {
            out.push(Violation::cross_field(
                join_path(prefix, "transportMode"),
                "\"N/A\" when transport is false",
                mode.as_str(),
            ));
        }
    }

    if object.get("requires_booking").and_then(Value::as_bool) == Some(false) {
        if let Some(url) = object.get("booking_url").and_then(Value::as_str) {
            if !url.is_empty() {
                out.push(Violation::cross_field(
                    join_path(prefix, "booking_url"),
                    "absent or blank when requires_booking is false",
                    url,
                ));
            }
        }
    }

    let start_raw = object.get("start").and_then(Value::as_str);
    let end_raw = object.get("end").and_then(Value::as_str);
    if let (Some(start_raw), Some(end_raw)) = (start_raw, end_raw) {
        let parsed = (parse_time_of_day(start_raw), parse_time_of_day(end_raw));
        if let (Some(start), Some(end)) = parsed {
            if end < start {
                out.push(Violation::cross_field(
                    join_path(prefix, "end"),
                    "end time at or after start time",
                    format!("start {start_raw}, end {end_raw}"),
                ));
            }
        }
    }
}

fn check_unique_ids(items: &[Value], base: &str, out: &mut Vec<Violation>) {
    let mut seen: HashSet<i64> = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        let id = item
            .as_object()
            .and_then(|object| object.get("id"))
            .and_then(as_integer);
        let Some(id) = id else { continue };
        if !seen.insert(id) {
            out.push(Violation::cross_field(
                format!("{base}[{index}].id"),
                "id unique within the collection",
                id.to_string(),
            ));
        }
    }
}

/// Chronology sweep for a full day: items ordered by start time, and no
/// overlap between non-transport items. Items whose times failed their
/// own field checks are skipped here.
fn check_chronology(items: &[Value], base: &str, out: &mut Vec<Violation>) {
    let mut prev_start: Option<NaiveTime> = None;
    let mut last_activity_end: Option<NaiveTime> = None;

    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            continue;
        };
        let start = object
            .get("start")
            .and_then(Value::as_str)
            .and_then(parse_time_of_day);
        let end = object
            .get("end")
            .and_then(Value::as_str)
            .and_then(parse_time_of_day);
        let transport = object
            .get("transport")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if let Some(start) = start {
            if let Some(previous) = prev_start {
                if start < previous {
                    out.push(Violation::cross_field(
                        format!("{base}[{index}].start"),
                        "start at or after the previous item's start",
                        start.format("%H:%M").to_string(),
                    ));
                }
            }
            prev_start = Some(start);

            if !transport {
                if let Some(previous_end) = last_activity_end {
                    if start < previous_end {
                        out.push(Violation::cross_field(
                            format!("{base}[{index}].start"),
                            "no overlap with the previous non-transport item",
                            start.format("%H:%M").to_string(),
                        ));
                    }
                }
            }
        }

        if !transport {
            if let Some(end) = end {
                last_activity_end = Some(end);
            }
        }
    }
}

fn check_start_ordering(items: &[Value], base: &str, out: &mut Vec<Violation>) {
    let mut prev_start: Option<NaiveTime> = None;
    for (index, item) in items.iter().enumerate() {
        let start = item
            .as_object()
            .and_then(|object| object.get("start"))
            .and_then(Value::as_str)
            .and_then(parse_time_of_day);
        let Some(start) = start else { continue };
        if let Some(previous) = prev_start {
            if start < previous {
                out.push(Violation::cross_field(
                    format!("{base}[{index}].start"),
                    "start at or after the previous item's start",
                    start.format("%H:%M").to_string(),
                ));
            }
        }
        prev_start = Some(start);
    }
}

/// Parse a time-of-day string. Accepted formats: "09:30", "09:30:00",
/// "2:15 PM".
pub(crate) fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    const FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%I:%M %p"];
    FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
}

/// Accept JSON integers plus whole-valued floats, which some generators
/// emit for integer fields.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    if let Some(number) = value.as_i64() {
        return Some(number);
    }
    let float = value.as_f64()?;
    if float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
