//! Weather report categories attached to itinerary items

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weather condition category for an itinerary item.
///
/// The generator may only emit one of these five lowercase strings, or
/// leave the field blank when no matching conditions were supplied in
/// context. Blank and absent are equivalent; both decode to `None` on the
/// typed record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    #[serde(rename = "sunny")]
    Sunny,
    #[serde(rename = "cloudy with sun")]
    CloudyWithSun,
    #[serde(rename = "cloudy")]
    Cloudy,
    #[serde(rename = "rainy")]
    Rainy,
    #[serde(rename = "snowy")]
    Snowy,
}

impl WeatherCondition {
    /// Every member of the closed set, in declaration order
    pub const ALL: [WeatherCondition; 5] = [
        WeatherCondition::Sunny,
        WeatherCondition::CloudyWithSun,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Snowy,
    ];

    /// Exact wire string for this condition
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::CloudyWithSun => "cloudy with sun",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Snowy => "snowy",
        }
    }

    /// Wire strings for the whole set, in declaration order
    #[must_use]
    pub fn names() -> [&'static str; 5] {
        Self::ALL.map(WeatherCondition::as_str)
    }

    /// Resolve an exact (case-sensitive) wire string to a condition
    #[must_use]
    pub fn from_name(name: &str) -> Option<WeatherCondition> {
        Self::ALL
            .into_iter()
            .find(|condition| condition.as_str() == name)
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeatherCondition::from_name(s).ok_or_else(|| format!("unknown weather condition '{s}'"))
    }
}

/// Deserialize an optional weather field where absent, `null` and `""` all
/// mean "no report".
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<WeatherCondition>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => WeatherCondition::from_name(value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown weather condition '{value}'"))),
    }
}
