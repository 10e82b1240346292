//! Border-crossing events as they appear in a travel log.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a border crossing.
///
/// Unrecognised kinds are kept verbatim so the log survives a round trip, but
/// they never change presence state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Arrival,
    Departure,
    Other(String),
}

impl EventKind {
    /// Returns the kind as written in the log.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Arrival => "Arrival",
            Self::Departure => "Departure",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Arrival" => Self::Arrival,
            "Departure" => Self::Departure,
            other => Self::Other(other.to_string()),
        })
    }
}

impl Serialize for EventKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse::<Self>().unwrap_or_else(|never| match never {}))
    }
}

/// One row of a travel log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Calendar day of the crossing.
    pub date: NaiveDate,
    /// Arrival, departure, or an unrecognised kind.
    pub kind: EventKind,
    /// Port of entry or exit. Informational only.
    pub location: String,
}

impl Event {
    pub fn new(date: NaiveDate, kind: EventKind, location: impl Into<String>) -> Self {
        Self {
            date,
            kind,
            location: location.into(),
        }
    }

    pub fn is_arrival(&self) -> bool {
        matches!(self.kind, EventKind::Arrival)
    }

    pub fn is_departure(&self) -> bool {
        matches!(self.kind, EventKind::Departure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_roundtrip() {
        for raw in ["Arrival", "Departure"] {
            let kind: EventKind = raw.parse().unwrap();
            assert_eq!(kind.to_string(), raw);
            assert!(!matches!(kind, EventKind::Other(_)));
        }
    }

    #[test]
    fn kind_matching_is_case_sensitive() {
        let kind: EventKind = "arrival".parse().unwrap();
        assert_eq!(kind, EventKind::Other("arrival".to_string()));
    }

    #[test]
    fn unknown_kind_is_preserved() {
        let kind: EventKind = "Transit".parse().unwrap();
        assert_eq!(kind.as_str(), "Transit");
    }

    #[test]
    fn event_serializes_kind_as_log_token() {
        let event = Event::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            EventKind::Arrival,
            "NYC",
        );
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2024-05-01","kind":"Arrival","location":"NYC"}"#
        );

        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
