//! Activity theme vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theme of an activity or itinerary item.
///
/// The wire strings are part of the generation contract and must match
/// exactly, including case. "Food and drink" is the only multi-word form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Theme {
    Adventure,
    Culture,
    #[serde(rename = "Food and drink")]
    FoodAndDrink,
    Nature,
    Relaxation,
    Entertainment,
    Shopping,
    Sports,
    Family,
    Unique,
    Nightlife,
}

impl Theme {
    /// Every member of the closed set, in declaration order
    pub const ALL: [Theme; 11] = [
        Theme::Adventure,
        Theme::Culture,
        Theme::FoodAndDrink,
        Theme::Nature,
        Theme::Relaxation,
        Theme::Entertainment,
        Theme::Shopping,
        Theme::Sports,
        Theme::Family,
        Theme::Unique,
        Theme::Nightlife,
    ];

    /// Exact wire string for this theme
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Adventure => "Adventure",
            Theme::Culture => "Culture",
            Theme::FoodAndDrink => "Food and drink",
            Theme::Nature => "Nature",
            Theme::Relaxation => "Relaxation",
            Theme::Entertainment => "Entertainment",
            Theme::Shopping => "Shopping",
            Theme::Sports => "Sports",
            Theme::Family => "Family",
            Theme::Unique => "Unique",
            Theme::Nightlife => "Nightlife",
        }
    }

    /// Wire strings for the whole set, in declaration order
    #[must_use]
    pub fn names() -> [&'static str; 11] {
        Self::ALL.map(Theme::as_str)
    }

    /// Resolve an exact (case-sensitive) wire string to a theme
    #[must_use]
    pub fn from_name(name: &str) -> Option<Theme> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == name)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::from_name(s).ok_or_else(|| format!("unknown theme '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings_round_trip() {
        for theme in Theme::ALL {
            let serialized = serde_json::to_string(&theme).unwrap();
            assert_eq!(serialized, format!("\"{}\"", theme.as_str()));
            let parsed: Theme = serde_json::from_str(&serialized).unwrap();
            assert_eq!(parsed, theme);
        }
    }

    #[test]
    fn test_food_and_drink_wire_string() {
        assert_eq!(Theme::FoodAndDrink.as_str(), "Food and drink");
        assert_eq!(Theme::from_name("Food and drink"), Some(Theme::FoodAndDrink));
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Theme::from_name("Adventure"), Some(Theme::Adventure));
        assert_eq!(Theme::from_name("adventure"), None);
        assert_eq!(Theme::from_name("ADVENTURE"), None);
        assert_eq!(Theme::from_name("Sightseeing"), None);
    }

    #[test]
    fn test_from_str_reports_unknown_value() {
        let err = "nightlife".parse::<Theme>().unwrap_err();
        assert!(err.contains("nightlife"));
    }
}
