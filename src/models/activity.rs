//! Activity records and their lightweight projections

use super::Theme;
use serde::{Deserialize, Serialize};

/// An activity that could be part of an itinerary
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Activity {
    /// Unique identifier for the activity. If one is provided it must be
    /// kept; the generator never reassigns ids.
    pub id: i64,
    /// Brief title of the activity, max a few words
    pub title: String,
    /// Brief description of the activity, maximum two sentences. Describes
    /// the activity standalone, not its place in an itinerary timeline.
    pub description: String,
    /// URLs of images representing the activity. Never generated; empty
    /// unless supplied by the caller.
    pub image_link: Vec<String>,
    /// Cost of the activity in GBP. 0 means free.
    pub price: f64,
    /// Theme of the activity
    pub theme: Theme,
}

impl Activity {
    /// Create a new activity with no images attached
    #[must_use]
    pub fn new(id: i64, title: String, description: String, price: f64, theme: Theme) -> Self {
        Self {
            id,
            title,
            description,
            image_link: Vec::new(),
            price,
            theme,
        }
    }

    /// Whether the activity costs nothing
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

/// Activity title and id, used for cheap enumeration before full
/// activities are generated
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ActivityTitle {
    /// Brief title of the activity, max a few words
    pub title: String,
    /// Unique id for the activity
    pub id: i64,
}

impl ActivityTitle {
    /// Create a new title projection
    #[must_use]
    pub fn new(id: i64, title: String) -> Self {
        Self { title, id }
    }
}

/// Titles of activities that could be part of an itinerary
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ActivityTitles {
    /// List of candidate activity titles for the given location
    pub activities: Vec<ActivityTitle>,
}

impl ActivityTitles {
    /// Number of candidate titles
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether there are no candidate titles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Ids in list order
    #[must_use]
    pub fn ids(&self) -> Vec<i64> {
        self.activities.iter().map(|title| title.id).collect()
    }
}

/// Unordered collection of activities; ids are unique within the list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ActivityList {
    /// List of activities
    pub activities: Vec<Activity>,
}

impl ActivityList {
    /// Number of activities
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Look up an activity by id
    #[must_use]
    pub fn by_id(&self, id: i64) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    /// Activities matching the given theme, in list order
    #[must_use]
    pub fn with_theme(&self, theme: Theme) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|activity| activity.theme == theme)
            .collect()
    }
}
