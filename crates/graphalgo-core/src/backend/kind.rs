//! Closed set of graph storage backends

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{ConfigError, ConfigResult};

/// Graph storage backend selectable by name
///
/// Name and variant map one to one. Both directions of the mapping are
/// exhaustive matches, so adding a variant without a name does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum GraphBackend {
    /// Heavyweight in-memory graph loaded by label and relationship type
    #[default]
    Heavy,
    /// Heavyweight graph loaded from node and relationship queries
    Cypher,
    /// Lightweight in-memory graph
    Light,
    /// Direct view over the storage kernel, nothing is loaded
    Kernel,
    /// Paged graph for node counts beyond the heavy backend's limits
    Huge,
}

impl GraphBackend {
    pub const ALL: [GraphBackend; 5] = [
        GraphBackend::Heavy,
        GraphBackend::Cypher,
        GraphBackend::Light,
        GraphBackend::Kernel,
        GraphBackend::Huge,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            GraphBackend::Heavy => "heavy",
            GraphBackend::Cypher => "cypher",
            GraphBackend::Light => "light",
            GraphBackend::Kernel => "kernel",
            GraphBackend::Huge => "huge",
        }
    }

    /// Resolve a backend name, ignoring case
    ///
    /// No prefix matching and no typo correction: anything that is not one
    /// of the five names fails.
    pub fn from_name(name: &str) -> ConfigResult<Self> {
        match name.to_lowercase().as_str() {
            "heavy" => Ok(GraphBackend::Heavy),
            "cypher" => Ok(GraphBackend::Cypher),
            "light" => Ok(GraphBackend::Light),
            "kernel" => Ok(GraphBackend::Kernel),
            "huge" => Ok(GraphBackend::Huge),
            _ => Err(ConfigError::invalid_argument(format!("Unknown impl: {}", name))),
        }
    }

    /// Whether this backend can serve an algorithm restricted to `allowed`
    ///
    /// The backends are siblings: none provides another one's capability,
    /// so compatibility is plain membership.
    pub fn is_satisfied_by_any(&self, allowed: &[GraphBackend]) -> bool {
        allowed.contains(self)
    }

    /// Render an allowed set as `'heavy' or 'huge'.`
    pub fn describe_allowed(allowed: &[GraphBackend]) -> String {
        let names: Vec<&str> = allowed.iter().map(|b| b.name()).collect();
        format!("'{}'.", names.join("' or '"))
    }
}

impl fmt::Display for GraphBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GraphBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Serialize for GraphBackend {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for GraphBackend {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(serde::de::Error::custom)
    }
}
