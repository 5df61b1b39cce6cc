//! Engine-wide defaults injected into the resolver
//!
//! The execution engine owns these values. The resolver only falls back to
//! them when a procedure call leaves the corresponding key out.

use serde::{Deserialize, Serialize};

use crate::backend::GraphBackend;
use crate::types::Direction;
use super::error::ConfigResult;

/// Default number of nodes handed to one worker
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Default property results are written to
pub const DEFAULT_WRITE_PROPERTY: &str = "writeValue";

/// Fallbacks for keys the caller did not supply
///
/// # Example
///
/// ```
/// use graphalgo_core::config::EngineDefaults;
/// use graphalgo_core::GraphBackend;
///
/// let defaults = EngineDefaults::from_yaml_str("graph: huge\nconcurrency: 4\n").unwrap();
/// assert_eq!(defaults.graph, GraphBackend::Huge);
/// assert_eq!(defaults.concurrency, 4);
/// assert_eq!(defaults.batch_size, 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineDefaults {
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default)]
    pub graph: GraphBackend,
    #[serde(default = "default_direction")]
    pub direction: Direction,
    #[serde(default = "default_write_property")]
    pub write_property: String,
    #[serde(default = "default_weight_property_default")]
    pub weight_property_default: f64,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

/// One worker per available core
fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn default_direction() -> Direction {
    Direction::Both
}

fn default_write_property() -> String {
    DEFAULT_WRITE_PROPERTY.to_string()
}

fn default_weight_property_default() -> f64 {
    1.0
}

fn default_iterations() -> usize {
    1
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            concurrency: default_concurrency(),
            graph: GraphBackend::default(),
            direction: default_direction(),
            write_property: default_write_property(),
            weight_property_default: default_weight_property_default(),
            iterations: default_iterations(),
        }
    }
}

impl EngineDefaults {
    /// Parse defaults from a YAML document; missing fields keep their defaults
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Render as YAML
    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_graph(mut self, graph: GraphBackend) -> Self {
        self.graph = graph;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_write_property(mut self, property: impl Into<String>) -> Self {
        self.write_property = property.into();
        self
    }

    pub fn with_weight_property_default(mut self, weight: f64) -> Self {
        self.weight_property_default = weight;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_defaults() {
        let defaults = EngineDefaults::default();
        assert_eq!(defaults.batch_size, 10_000);
        assert!(defaults.concurrency >= 1);
        assert_eq!(defaults.graph, GraphBackend::Heavy);
        assert_eq!(defaults.direction, Direction::Both);
        assert_eq!(defaults.write_property, "writeValue");
        assert_eq!(defaults.weight_property_default, 1.0);
        assert_eq!(defaults.iterations, 1);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "batchSize: 250\ndirection: OUTGOING\nwriteProperty: rank\n";
        let defaults = EngineDefaults::from_yaml_str(yaml).unwrap();
        assert_eq!(defaults.batch_size, 250);
        assert_eq!(defaults.direction, Direction::Outgoing);
        assert_eq!(defaults.write_property, "rank");
        assert_eq!(defaults.graph, GraphBackend::Heavy);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            EngineDefaults::from_yaml_str("  \n").unwrap(),
            EngineDefaults::default()
        );
    }

    #[test]
    fn test_unknown_graph_in_yaml() {
        let err = EngineDefaults::from_yaml_str("graph: bogus\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains("bogus")));
    }

    #[test]
    fn test_yaml_round_trip() {
        let defaults = EngineDefaults::default()
            .with_graph(GraphBackend::Kernel)
            .with_concurrency(2);
        let yaml = defaults.to_yaml_string().unwrap();
        assert!(yaml.contains("graph: kernel"));
        assert_eq!(EngineDefaults::from_yaml_str(&yaml).unwrap(), defaults);
    }

    #[test]
    fn test_builders() {
        let defaults = EngineDefaults::default()
            .with_batch_size(1)
            .with_direction(Direction::Incoming)
            .with_write_property("score")
            .with_weight_property_default(0.5)
            .with_iterations(20);
        assert_eq!(defaults.batch_size, 1);
        assert_eq!(defaults.direction, Direction::Incoming);
        assert_eq!(defaults.write_property, "score");
        assert_eq!(defaults.weight_property_default, 0.5);
        assert_eq!(defaults.iterations, 20);
    }
}
