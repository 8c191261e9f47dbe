//! JSON Schema rendering for generator instruction
//!
//! The generator must be told the exact output shape it is expected to
//! produce: field names, usage hints, and closed-set wire strings
//! verbatim. This module renders any registered schema as a
//! provider-neutral JSON Schema object suitable for structured-output
//! prompting.

use super::registry::{FieldType, RecordKind, Schema, SchemaRegistry};
use serde_json::{Map, Value, json};

/// Render the schema for one record kind.
///
/// Produces `{"name", "description", "schema"}` where `schema` is a JSON
/// Schema object: `type`/`properties`/`required`, `enum` arrays for the
/// closed sets, numeric `minimum`/`maximum` where the constraint table
/// carries bounds, and field descriptions passed through verbatim.
#[must_use]
pub fn generation_schema(kind: RecordKind) -> Value {
    let schema = SchemaRegistry::global().schema(kind);
    json!({
        "name": schema.kind.name(),
        "description": schema.description,
        "schema": object_schema(schema),
    })
}

/// Render every registered schema, sorted by record kind name
#[must_use]
pub fn all_generation_schemas() -> Vec<Value> {
    let mut kinds = RecordKind::ALL.to_vec();
    kinds.sort_by_key(|kind| kind.name());
    kinds.into_iter().map(generation_schema).collect()
}

fn object_schema(schema: &Schema) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in schema.fields {
        properties.insert(field.name.to_string(), property_schema(field));
        if field.required {
            required.push(json!(field.name));
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn property_schema(field: &super::registry::FieldSpec) -> Value {
    let mut prop = Map::new();

    match &field.ty {
        FieldType::Text | FieldType::TimeOfDay => {
            prop.insert("type".to_string(), json!("string"));
        }
        FieldType::Integer => {
            prop.insert("type".to_string(), json!("integer"));
        }
        FieldType::Float => {
            prop.insert("type".to_string(), json!("number"));
        }
        FieldType::Boolean => {
            prop.insert("type".to_string(), json!("boolean"));
        }
        FieldType::UrlList | FieldType::TextList => {
            prop.insert("type".to_string(), json!("array"));
            prop.insert("items".to_string(), json!({"type": "string"}));
        }
        FieldType::Theme | FieldType::TransportMode | FieldType::Weather => {
            prop.insert("type".to_string(), json!("string"));
            if let Some(values) = field.ty.allowed_values() {
                prop.insert("enum".to_string(), json!(values));
            }
        }
        FieldType::Items(item_kind) => {
            let item_schema = SchemaRegistry::global().schema(*item_kind);
            prop.insert("type".to_string(), json!("array"));
            prop.insert("items".to_string(), object_schema(item_schema));
        }
    }

    if let Some(bounds) = field.bounds {
        if let Some(min) = bounds.min {
            prop.insert("minimum".to_string(), json!(min));
        }
        if let Some(max) = bounds.max {
            prop.insert("maximum".to_string(), json!(max));
        }
    }

    prop.insert("description".to_string(), json!(field.description));
    Value::Object(prop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_schema_shape() {
        let schema = generation_schema(RecordKind::Activity);

        assert_eq!(schema["name"], "Activity");
        assert_eq!(schema["schema"]["type"], "object");

        let theme = &schema["schema"]["properties"]["theme"];
        assert_eq!(theme["type"], "string");
        let themes = theme["enum"].as_array().unwrap();
        assert_eq!(themes.len(), 11);
        assert!(themes.contains(&json!("Food and drink")));

        let price = &schema["schema"]["properties"]["price"];
        assert_eq!(price["type"], "number");
        assert_eq!(price["minimum"], 0.0);

        let required = schema["schema"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 6);
        assert!(required.contains(&json!("image_link")));
    }

    #[test]
    fn test_nested_collection_schema() {
        let schema = generation_schema(RecordKind::FullItinerary);

        let items = &schema["schema"]["properties"]["itinerary"];
        assert_eq!(items["type"], "array");
        assert_eq!(items["items"]["type"], "object");

        let mode = &items["items"]["properties"]["transportMode"];
        let modes = mode["enum"].as_array().unwrap();
        assert!(modes.contains(&json!("N/A")));

        // Optional fields stay out of the required list
        let required = items["items"]["required"].as_array().unwrap();
        assert!(!required.contains(&json!("weather")));
        assert!(!required.contains(&json!("booking_url")));
        assert!(required.contains(&json!("transportMode")));
    }

    #[test]
    fn test_descriptions_pass_through_verbatim() {
        let schema = generation_schema(RecordKind::Activity);
        let image_link = &schema["schema"]["properties"]["image_link"];
        assert_eq!(
            image_link["description"],
            "URLs of images representing the activity. Do not generate."
        );
    }

    #[test]
    fn test_all_schemas_sorted_by_name() {
        let schemas = all_generation_schemas();
        assert_eq!(schemas.len(), 9);

        let names: Vec<&str> = schemas
            .iter()
            .map(|schema| schema["name"].as_str().unwrap())
            .collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_temperature_bounds_rendered() {
        let schema = generation_schema(RecordKind::ItineraryItem);
        let temperature = &schema["schema"]["properties"]["temperature"];
        assert_eq!(temperature["minimum"], -60.0);
        assert_eq!(temperature["maximum"], 60.0);
    }
}
