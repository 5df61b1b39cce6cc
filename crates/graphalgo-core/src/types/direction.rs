//! Relationship traversal direction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::ConfigError;

/// Direction in which relationships are followed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Outgoing,
    Incoming,
    Both,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Outgoing, Direction::Incoming, Direction::Both];

    /// Canonical uppercase name, as written back into the parameter map
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Outgoing => "OUTGOING",
            Direction::Incoming => "INCOMING",
            Direction::Both => "BOTH",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses canonical names and the short aliases, ignoring case.
impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OUTGOING" | "OUT" | "O" | ">" => Ok(Direction::Outgoing),
            "INCOMING" | "IN" | "I" | "<" => Ok(Direction::Incoming),
            "BOTH" | "B" | "<>" => Ok(Direction::Both),
            _ => Err(ConfigError::invalid_argument(format!(
                "Unknown direction: {} (expected one of OUTGOING, INCOMING, BOTH)",
                s
            ))),
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
