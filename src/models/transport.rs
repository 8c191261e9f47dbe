//! Transport mode vocabulary for itinerary transit legs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mode of transport for a transit leg of an itinerary.
///
/// "N/A" is the wire string for non-transport items and is the default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TransportMode {
    Tube,
    Walking,
    Bus,
    Taxi,
    Train,
    Ferry,
    #[default]
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl TransportMode {
    /// Every member of the closed set, in declaration order
    pub const ALL: [TransportMode; 7] = [
        TransportMode::Tube,
        TransportMode::Walking,
        TransportMode::Bus,
        TransportMode::Taxi,
        TransportMode::Train,
        TransportMode::Ferry,
        TransportMode::NotApplicable,
    ];

    /// Exact wire string for this mode
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TransportMode::Tube => "Tube",
            TransportMode::Walking => "Walking",
            TransportMode::Bus => "Bus",
            TransportMode::Taxi => "Taxi",
            TransportMode::Train => "Train",
            TransportMode::Ferry => "Ferry",
            TransportMode::NotApplicable => "N/A",
        }
    }

    /// Wire strings for the whole set, in declaration order
    #[must_use]
    pub fn names() -> [&'static str; 7] {
        Self::ALL.map(TransportMode::as_str)
    }

    /// Resolve an exact (case-sensitive) wire string to a mode
    #[must_use]
    pub fn from_name(name: &str) -> Option<TransportMode> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == name)
    }

    /// True for every mode except "N/A"
    #[must_use]
    pub fn is_transit(self) -> bool {
        self != TransportMode::NotApplicable
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportMode::from_name(s).ok_or_else(|| format!("unknown transport mode '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_applicable() {
        assert_eq!(TransportMode::default(), TransportMode::NotApplicable);
        assert_eq!(TransportMode::default().as_str(), "N/A");
    }

    #[test]
    fn test_wire_strings_round_trip() {
        for mode in TransportMode::ALL {
            let serialized = serde_json::to_string(&mode).unwrap();
            assert_eq!(serialized, format!("\"{}\"", mode.as_str()));
            let parsed: TransportMode = serde_json::from_str(&serialized).unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(TransportMode::from_name("Tube"), Some(TransportMode::Tube));
        assert_eq!(TransportMode::from_name("tube"), None);
        assert_eq!(TransportMode::from_name("n/a"), None);
        assert_eq!(
            TransportMode::from_name("N/A"),
            Some(TransportMode::NotApplicable)
        );
    }

    #[test]
    fn test_is_transit() {
        assert!(TransportMode::Bus.is_transit());
        assert!(TransportMode::Ferry.is_transit());
        assert!(!TransportMode::NotApplicable.is_transit());
    }
}
