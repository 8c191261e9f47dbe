//! Full-day itinerary records, display projections, and location facts

use super::{Theme, TransportMode, WeatherCondition, weather};
use serde::{Deserialize, Deserializer, Serialize};

/// An entry for an itinerary item
///
/// A superset of [`Activity`](super::Activity)'s descriptive fields with
/// scheduling, transport and booking information added. Weather and
/// temperature are only populated when matching conditions were supplied
/// in the generation context.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItineraryItem {
    /// Brief title of the itinerary item
    pub title: String,
    /// True only if the item is not an actual activity of any kind but is
    /// just transport from one location to another
    pub transport: bool,
    /// Start time of the itinerary item (time of day, e.g. "09:30")
    pub start: String,
    /// End time of the itinerary item (time of day)
    pub end: String,
    /// Brief description of the activity, maximum two sentences
    pub description: String,
    /// Cost of the itinerary item in GBP. 0 means free.
    pub price: f64,
    /// Theme of the itinerary item
    pub theme: Theme,
    /// Mode of transport if the item is a transit leg; "N/A" otherwise
    #[serde(rename = "transportMode", default)]
    pub transport_mode: TransportMode,
    /// Whether the item requires booking
    pub requires_booking: bool,
    /// URL for booking the item; only present when booking is required
    #[serde(default, deserialize_with = "blank_string_as_none")]
    pub booking_url: Option<String>,
    /// Weather conditions for the item's time window, when supplied in
    /// context
    #[serde(default, deserialize_with = "weather::blank_as_none")]
    pub weather: Option<WeatherCondition>,
    /// Temperature in celsius for the item's time window, when supplied in
    /// context
    #[serde(default)]
    pub temperature: Option<i64>,
    /// URLs of images representing the activity. Never generated.
    pub image_link: Vec<String>,
    /// Duration of the itinerary item in minutes
    pub duration: i64,
    /// Unique identifier for the itinerary item
    pub id: i64,
    /// Latitude position of the given activity
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude position of the given activity
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl ItineraryItem {
    /// Whether the item is a genuine activity rather than a transit leg
    #[must_use]
    pub fn is_activity(&self) -> bool {
        !self.transport
    }

    /// Geographic position, when both coordinates are present
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Ordered single-day itinerary
///
/// Item order is chronological and semantically meaningful: start/end
/// times follow sequence order, and non-transport items never overlap.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FullItinerary {
    /// A full day itinerary for the given location
    pub itinerary: Vec<ItineraryItem>,
}

impl FullItinerary {
    /// Number of items, transit legs included
    #[must_use]
    pub fn len(&self) -> usize {
        self.itinerary.len()
    }

    /// Whether the day is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.itinerary.is_empty()
    }

    /// Items that are genuine activities, in chronological order
    #[must_use]
    pub fn activities(&self) -> Vec<&ItineraryItem> {
        self.itinerary.iter().filter(|item| item.is_activity()).collect()
    }

    /// Total cost of the day in GBP
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.itinerary.iter().map(|item| item.price).sum()
    }

    /// Total scheduled minutes, transit legs included
    #[must_use]
    pub fn total_duration_minutes(&self) -> i64 {
        self.itinerary.iter().map(|item| item.duration).sum()
    }
}

/// An entry for a simplified itinerary item
///
/// Display-oriented projection of [`ItineraryItem`]; `image_tag` is a
/// free-text image search term, not a URL.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SimpleItineraryItem {
    /// Brief title of the itinerary item
    pub title: String,
    /// A search term to find a relevant image for the activity or location
    #[serde(rename = "imageTag")]
    pub image_tag: String,
    /// Start time of the itinerary item
    pub start: String,
    /// End time of the itinerary item
    pub end: String,
    /// Unique identifier for the itinerary item
    pub id: i64,
}

/// Lightweight single-day itinerary view
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ItinerarySummary {
    /// A full day itinerary for the given location
    pub itinerary: Vec<SimpleItineraryItem>,
}

impl ItinerarySummary {
    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.itinerary.len()
    }

    /// Whether the summary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.itinerary.is_empty()
    }
}

/// Interesting facts about a location
///
/// Each entry is an independent claim; there are no cross-item rules.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Facts {
    /// A list of interesting facts about the given location
    pub facts: Vec<String>,
}

impl Facts {
    /// Number of facts
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether there are no facts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

/// Deserialize an optional string field where absent, `null` and `""` all
/// mean "not provided".
fn blank_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, start: &str, end: &str, transport: bool) -> ItineraryItem {
        ItineraryItem {
            title: if transport { "Tube to museum" } else { "Museum visit" }.to_string(),
            transport,
            start: start.to_string(),
            end: end.to_string(),
            description: "Short description.".to_string(),
            price: if transport { 2.8 } else { 0.0 },
            theme: Theme::Culture,
            transport_mode: if transport {
                TransportMode::Tube
            } else {
                TransportMode::NotApplicable
            },
            requires_booking: false,
            booking_url: None,
            weather: None,
            temperature: None,
            image_link: Vec::new(),
            duration: 60,
            id,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_full_itinerary_totals() {
        let day = FullItinerary {
            itinerary: vec![
                item(1, "09:00", "10:00", false),
                item(2, "10:00", "10:20", true),
                item(3, "10:20", "11:20", false),
            ],
        };
        assert_eq!(day.len(), 3);
        assert_eq!(day.activities().len(), 2);
        assert!((day.total_price() - 2.8).abs() < f64::EPSILON);
        assert_eq!(day.total_duration_minutes(), 180);
    }

    #[test]
    fn test_item_decodes_wire_field_names() {
        let raw = serde_json::json!({
            "title": "River cruise",
            "transport": false,
            "start": "14:00",
            "end": "15:30",
            "description": "A relaxed cruise on the Thames.",
            "price": 18.5,
            "theme": "Relaxation",
            "transportMode": "N/A",
            "requires_booking": true,
            "booking_url": "https://example.com/cruise",
            "weather": "cloudy with sun",
            "temperature": 19,
            "image_link": [],
            "duration": 90,
            "id": 7,
            "latitude": 51.5074,
            "longitude": -0.1278
        });

        let item: ItineraryItem = serde_json::from_value(raw).unwrap();
        assert_eq!(item.transport_mode, TransportMode::NotApplicable);
        assert_eq!(item.weather, Some(WeatherCondition::CloudyWithSun));
        assert_eq!(item.temperature, Some(19));
        assert_eq!(item.position(), Some((51.5074, -0.1278)));
    }

    #[test]
    fn test_blank_optional_fields_decode_to_none() {
        let raw = serde_json::json!({
            "title": "Walk in Hyde Park",
            "transport": false,
            "start": "08:00",
            "end": "09:00",
            "description": "Morning walk.",
            "price": 0.0,
            "theme": "Nature",
            "transportMode": "N/A",
            "requires_booking": false,
            "booking_url": "",
            "weather": "",
            "image_link": [],
            "duration": 60,
            "id": 1
        });

        let item: ItineraryItem = serde_json::from_value(raw).unwrap();
        assert_eq!(item.booking_url, None);
        assert_eq!(item.weather, None);
        assert_eq!(item.temperature, None);
        assert_eq!(item.latitude, None);
    }

    #[test]
    fn test_simple_item_uses_image_tag_wire_name() {
        let entry = SimpleItineraryItem {
            title: "Museum visit".to_string(),
            image_tag: "british museum london".to_string(),
            start: "09:00".to_string(),
            end: "11:00".to_string(),
            id: 1,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["imageTag"], "british museum london");
        assert!(value.get("image_tag").is_none());
    }

    #[test]
    fn test_facts_are_independent_strings() {
        let facts = Facts {
            facts: vec![
                "London has over 170 museums.".to_string(),
                "The Tube opened in 1863.".to_string(),
            ],
        };
        assert_eq!(facts.len(), 2);
        assert!(!facts.is_empty());
    }
}
