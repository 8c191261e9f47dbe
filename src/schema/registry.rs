//! Record kinds and their field constraint tables
//!
//! Record shape (the serde structs in [`crate::models`]) is kept separate
//! from validation constraints: the tables here drive the validator
//! without any reflection over the structs. The registry is static data,
//! read-only for the whole process lifetime, and safe to share across
//! threads without synchronization.

use crate::models::{Theme, TransportMode, WeatherCondition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the named schema shapes a generator can be asked to produce
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Activity,
    ActivityTitle,
    ActivityTitles,
    ActivityList,
    ItineraryItem,
    FullItinerary,
    SimpleItineraryItem,
    ItinerarySummary,
    Facts,
}

impl RecordKind {
    /// Every registered kind, in registry order
    pub const ALL: [RecordKind; 9] = [
        RecordKind::Activity,
        RecordKind::ActivityTitle,
        RecordKind::ActivityTitles,
        RecordKind::ActivityList,
        RecordKind::ItineraryItem,
        RecordKind::FullItinerary,
        RecordKind::SimpleItineraryItem,
        RecordKind::ItinerarySummary,
        RecordKind::Facts,
    ];

    /// Canonical name used for lookup and reporting
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RecordKind::Activity => "Activity",
            RecordKind::ActivityTitle => "ActivityTitle",
            RecordKind::ActivityTitles => "ActivityTitles",
            RecordKind::ActivityList => "ActivityList",
            RecordKind::ItineraryItem => "ItineraryItem",
            RecordKind::FullItinerary => "FullItinerary",
            RecordKind::SimpleItineraryItem => "SimpleItineraryItem",
            RecordKind::ItinerarySummary => "ItinerarySummary",
            RecordKind::Facts => "Facts",
        }
    }

    /// Resolve a kind by its canonical name
    ///
    /// Fails with [`JourneyAiError::SchemaNotFound`](crate::JourneyAiError)
    /// for names that are not registered.
    pub fn from_name(name: &str) -> crate::Result<RecordKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| crate::JourneyAiError::schema_not_found(name))
    }

    const fn index(self) -> usize {
        match self {
            RecordKind::Activity => 0,
            RecordKind::ActivityTitle => 1,
            RecordKind::ActivityTitles => 2,
            RecordKind::ActivityList => 3,
            RecordKind::ItineraryItem => 4,
            RecordKind::FullItinerary => 5,
            RecordKind::SimpleItineraryItem => 6,
            RecordKind::ItinerarySummary => 7,
            RecordKind::Facts => 8,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive numeric bounds on a field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest accepted value, if bounded below
    pub min: Option<f64>,
    /// Largest accepted value, if bounded above
    pub max: Option<f64>,
}

impl Bounds {
    /// Bounded below only
    #[must_use]
    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Bounded on both sides
    #[must_use]
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Whether the value satisfies both bounds
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }

    /// Human-readable constraint description for violation reports
    #[must_use]
    pub fn describe(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("between {min} and {max}"),
            (Some(min), None) => format!("at least {min}"),
            (None, Some(max)) => format!("at most {max}"),
            (None, None) => "unbounded".to_string(),
        }
    }
}

/// Semantic type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Free-form string
    Text,
    /// Whole number fitting `i64`; whole-valued floats are accepted
    Integer,
    /// Any finite number
    Float,
    /// Boolean flag
    Boolean,
    /// Time-of-day string such as "09:30" or "2:15 PM"
    TimeOfDay,
    /// Sequence of http(s) URL strings
    UrlList,
    /// Sequence of free-form strings
    TextList,
    /// Member of the closed [`Theme`] set
    Theme,
    /// Member of the closed [`TransportMode`] set
    TransportMode,
    /// Blank, or member of the closed [`WeatherCondition`] set
    Weather,
    /// Sequence of nested records of the given kind
    Items(RecordKind),
}

impl FieldType {
    /// Human-readable type name for violation reports
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            FieldType::Text => "string".to_string(),
            FieldType::Integer => "integer".to_string(),
            FieldType::Float => "number".to_string(),
            FieldType::Boolean => "boolean".to_string(),
            FieldType::TimeOfDay => "time-of-day string".to_string(),
            FieldType::UrlList => "list of http(s) URL strings".to_string(),
            FieldType::TextList => "list of strings".to_string(),
            FieldType::Theme => "Theme value".to_string(),
            FieldType::TransportMode => "TransportMode value".to_string(),
            FieldType::Weather => "weather category or blank".to_string(),
            FieldType::Items(kind) => format!("list of {} records", kind.name()),
        }
    }

    /// Enumerated wire strings for closed-set types, if any
    #[must_use]
    pub fn allowed_values(&self) -> Option<Vec<&'static str>> {
        match self {
            FieldType::Theme => Some(Theme::names().to_vec()),
            FieldType::TransportMode => Some(TransportMode::names().to_vec()),
            FieldType::Weather => Some(WeatherCondition::names().to_vec()),
            _ => None,
        }
    }
}

/// Constraint entry for a single schema field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Wire name of the field
    pub name: &'static str,
    /// Semantic type checked by the validator
    pub ty: FieldType,
    /// Whether the field must be present and non-null
    pub required: bool,
    /// Numeric bounds, for fields that carry them
    pub bounds: Option<Bounds>,
    /// Usage hint passed verbatim to the generator
    pub description: &'static str,
}

impl FieldSpec {
    const fn required(name: &'static str, ty: FieldType, description: &'static str) -> Self {
        Self {
            name,
            ty,
            required: true,
            bounds: None,
            description,
        }
    }

    const fn optional(name: &'static str, ty: FieldType, description: &'static str) -> Self {
        Self {
            name,
            ty,
            required: false,
            bounds: None,
            description,
        }
    }

    const fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

/// A registered record schema: ordered fields plus their constraints
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// The record kind this schema describes
    pub kind: RecordKind,
    /// One-line description of the record shape
    pub description: &'static str,
    /// Ordered field constraint table
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Look up a field constraint by wire name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Wire names of all required fields, in schema order
    #[must_use]
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name)
            .collect()
    }
}

const ACTIVITY_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "id",
        FieldType::Integer,
        "Unique identifier for the activity. If one is provided you must keep the original ID.",
    ),
    FieldSpec::required(
        "title",
        FieldType::Text,
        "Brief title of the activity, max a few words.",
    ),
    FieldSpec::required(
        "description",
        FieldType::Text,
        "Brief description of the activity - maximum two sentences. It should just tell me what the activity is - it should not try and fit it into an itinerary timeline.",
    ),
    FieldSpec::required(
        "image_link",
        FieldType::UrlList,
        "URLs of images representing the activity. Do not generate.",
    ),
    FieldSpec::required(
        "price",
        FieldType::Float,
        "Cost of the itinerary item, in GBP. If free, write 0.",
    )
    .with_bounds(Bounds::at_least(0.0)),
    FieldSpec::required("theme", FieldType::Theme, "Theme of the activity."),
];

const ACTIVITY_TITLE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "title",
        FieldType::Text,
        "Brief title of the activity, max a few words.",
    ),
    FieldSpec::required("id", FieldType::Integer, "Unique id for the activity."),
];

const ACTIVITY_TITLES_FIELDS: &[FieldSpec] = &[FieldSpec::required(
    "activities",
    FieldType::Items(RecordKind::ActivityTitle),
    "List of titles of activities that could make for exciting activities in the given location.",
)];

const ACTIVITY_LIST_FIELDS: &[FieldSpec] = &[FieldSpec::required(
    "activities",
    FieldType::Items(RecordKind::Activity),
    "List of activities.",
)];

const ITINERARY_ITEM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "title",
        FieldType::Text,
        "Brief title of the itinerary item.",
    ),
    FieldSpec::required(
        "transport",
        FieldType::Boolean,
        "Only TRUE if the itinerary item is not an actual activity of any kind but is just transport from one location to another.",
    ),
    FieldSpec::required(
        "start",
        FieldType::TimeOfDay,
        "Start time of the itinerary item.",
    ),
    FieldSpec::required(
        "end",
        FieldType::TimeOfDay,
        "End time of the itinerary item.",
    ),
    FieldSpec::required(
        "description",
        FieldType::Text,
        "Brief description of the activity - maximum two sentences.",
    ),
    FieldSpec::required(
        "price",
        FieldType::Float,
        "Cost of the itinerary item, in GBP. If free, write 0.",
    )
    .with_bounds(Bounds::at_least(0.0)),
    FieldSpec::required("theme", FieldType::Theme, "Theme of the itinerary item."),
    FieldSpec::required(
        "transportMode",
        FieldType::TransportMode,
        "Mode of transport if it is a transport step. Only required if it is transport. MUST be one of the following: Tube, Walking, Bus, Taxi, Train, Ferry, N/A.",
    ),
    FieldSpec::required(
        "requires_booking",
        FieldType::Boolean,
        "Indicates if the item requires booking.",
    ),
    FieldSpec::optional(
        "booking_url",
        FieldType::Text,
        "URL for booking the itinerary item.",
    ),
    FieldSpec::optional(
        "weather",
        FieldType::Weather,
        "Weather conditions for the given activity. Generate ONLY if you are given conditions in context that match with the time of this activity. Must be either blank, or exactly match one of the following categories: sunny, cloudy with sun, cloudy, rainy, snowy.",
    ),
    FieldSpec::optional(
        "temperature",
        FieldType::Integer,
        "Temperature in celsius for the given activity. Generate ONLY if you are given conditions in context that match with the time of this activity. Must be either blank, or match the number that was given in context for the given start time.",
    )
    .with_bounds(Bounds::between(-60.0, 60.0)),
    FieldSpec::required(
        "image_link",
        FieldType::UrlList,
        "URLs of images representing the activity. Do not generate.",
    ),
    FieldSpec::required(
        "duration",
        FieldType::Integer,
        "Duration of the itinerary item in minutes.",
    )
    .with_bounds(Bounds::at_least(1.0)),
    FieldSpec::required(
        "id",
        FieldType::Integer,
        "Unique identifier for the itinerary item.",
    ),
    FieldSpec::optional(
        "latitude",
        FieldType::Float,
        "Latitude position of the given activity.",
    )
    .with_bounds(Bounds::between(-90.0, 90.0)),
    FieldSpec::optional(
        "longitude",
        FieldType::Float,
        "Longitude position of the given activity.",
    )
    .with_bounds(Bounds::between(-180.0, 180.0)),
];

const FULL_ITINERARY_FIELDS: &[FieldSpec] = &[FieldSpec::required(
    "itinerary",
    FieldType::Items(RecordKind::ItineraryItem),
    "A full day itinerary for the given location.",
)];

const SIMPLE_ITINERARY_ITEM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "title",
        FieldType::Text,
        "Brief title of the itinerary item.",
    ),
    FieldSpec::required(
        "imageTag",
        FieldType::Text,
        "A search term to find a relevant image tag for the given activity or location.",
    ),
    FieldSpec::required(
        "start",
        FieldType::TimeOfDay,
        "Start time of the itinerary item.",
    ),
    FieldSpec::required(
        "end",
        FieldType::TimeOfDay,
        "End time of the itinerary item.",
    ),
    FieldSpec::required(
        "id",
        FieldType::Integer,
        "Unique identifier for the itinerary item.",
    ),
];

const ITINERARY_SUMMARY_FIELDS: &[FieldSpec] = &[FieldSpec::required(
    "itinerary",
    FieldType::Items(RecordKind::SimpleItineraryItem),
    "A full day itinerary for the given location.",
)];

const FACTS_FIELDS: &[FieldSpec] = &[FieldSpec::required(
    "facts",
    FieldType::TextList,
    "A list of interesting facts about the given location.",
)];

static SCHEMAS: [Schema; 9] = [
    Schema {
        kind: RecordKind::Activity,
        description: "An activity that could be part of an itinerary",
        fields: ACTIVITY_FIELDS,
    },
    Schema {
        kind: RecordKind::ActivityTitle,
        description: "Activity title and id",
        fields: ACTIVITY_TITLE_FIELDS,
    },
    Schema {
        kind: RecordKind::ActivityTitles,
        description: "Titles of activities that could be part of an itinerary",
        fields: ACTIVITY_TITLES_FIELDS,
    },
    Schema {
        kind: RecordKind::ActivityList,
        description: "Unordered collection of activities with unique ids",
        fields: ACTIVITY_LIST_FIELDS,
    },
    Schema {
        kind: RecordKind::ItineraryItem,
        description: "An entry for an itinerary item",
        fields: ITINERARY_ITEM_FIELDS,
    },
    Schema {
        kind: RecordKind::FullItinerary,
        description: "Chronologically ordered single-day itinerary",
        fields: FULL_ITINERARY_FIELDS,
    },
    Schema {
        kind: RecordKind::SimpleItineraryItem,
        description: "An entry for a simplified itinerary item",
        fields: SIMPLE_ITINERARY_ITEM_FIELDS,
    },
    Schema {
        kind: RecordKind::ItinerarySummary,
        description: "Lightweight single-day itinerary view",
        fields: ITINERARY_SUMMARY_FIELDS,
    },
    Schema {
        kind: RecordKind::Facts,
        description: "Interesting facts about a location",
        fields: FACTS_FIELDS,
    },
];

/// Process-wide read-only registry of record schemas
#[derive(Debug)]
pub struct SchemaRegistry {
    schemas: &'static [Schema],
}

static REGISTRY: SchemaRegistry = SchemaRegistry { schemas: &SCHEMAS };

impl SchemaRegistry {
    /// Shared registry instance
    #[must_use]
    pub fn global() -> &'static SchemaRegistry {
        &REGISTRY
    }

    /// Schema for a known record kind
    #[must_use]
    pub fn schema(&self, kind: RecordKind) -> &Schema {
        &self.schemas[kind.index()]
    }

    /// Schema lookup by canonical kind name
    ///
    /// Fails with [`JourneyAiError::SchemaNotFound`](crate::JourneyAiError)
    /// for names that are not registered.
    pub fn schema_by_name(&self, name: &str) -> crate::Result<&Schema> {
        RecordKind::from_name(name).map(|kind| self.schema(kind))
    }

    /// All registered schemas, in registry order
    #[must_use]
    pub fn schemas(&self) -> &[Schema] {
        self.schemas
    }
}
