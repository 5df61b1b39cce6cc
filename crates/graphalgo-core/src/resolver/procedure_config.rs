//! Typed access to the parameter map of a single procedure call
//!
//! The procedure layer hands over an untyped map. `ConfigurationResolver`
//! copies it and answers typed, defaulted reads on demand; validation is lazy
//! and happens per accessor. Reads distinguish three cases:
//!
//! - key absent (or `null`): the default is returned, never an error
//! - key present with the expected type: the value is returned
//! - key present with another type: `ConfigError::TypeMismatch`
//!
//! Overrides consume the resolver and hand it back, so they can only run
//! while a single owner holds it, before it is shared for reading.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::backend::GraphBackend;
use crate::config::{keys, ConfigError, ConfigResult, EngineDefaults};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::log_debug;
use crate::types::{Direction, ParamMap, ParamValue};

/// Resolved view over a procedure call's parameters
///
/// # Example
///
/// ```
/// use graphalgo_core::{ConfigurationResolver, Direction, GraphBackend};
/// use serde_json::json;
///
/// let config = ConfigurationResolver::from_json(json!({
///     "graph": "Huge",
///     "iterations": 20,
///     "direction": "OUTGOING",
/// }))
/// .unwrap();
///
/// assert_eq!(config.get_graph_impl().unwrap(), GraphBackend::Huge);
/// assert_eq!(config.get_iterations(1).unwrap(), 20);
/// assert_eq!(config.get_direction(Direction::Both).unwrap(), Direction::Outgoing);
/// assert!(config.is_write_flag().unwrap());
/// ```
#[derive(Clone)]
pub struct ConfigurationResolver {
    entries: ParamMap,
    defaults: EngineDefaults,
    logger: SharedLogger,
}

impl fmt::Debug for ConfigurationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationResolver")
            .field("entries", &self.entries)
            .field("defaults", &self.defaults)
            .finish()
    }
}

impl ConfigurationResolver {
    /// Copy the raw parameter map, using the engine's default fallbacks
    pub fn create(raw: &ParamMap) -> Self {
        Self::with_defaults(raw, EngineDefaults::default())
    }

    /// Copy the raw parameter map with injected engine defaults
    pub fn with_defaults(raw: &ParamMap, defaults: EngineDefaults) -> Self {
        Self {
            entries: raw.clone(),
            defaults,
            logger: Arc::new(NoOpLogger),
        }
    }

    /// Build from a JSON object
    pub fn from_json(value: Value) -> ConfigResult<Self> {
        match ParamValue::from(value) {
            ParamValue::Map(entries) => Ok(Self::create(&entries)),
            other => Err(ConfigError::parse(format!(
                "expected a parameter object, got {}",
                other.type_name()
            ))),
        }
    }

    /// Build from a JSON document
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_json(value)
    }

    /// Attach a logger for resolution diagnostics
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn defaults(&self) -> &EngineDefaults {
        &self.defaults
    }

    pub fn entries(&self) -> &ParamMap {
        &self.entries
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Whether every given key is present
    pub fn contains_keys(&self, keys: &[&str]) -> bool {
        keys.iter().all(|key| self.entries.contains_key(*key))
    }

    // ------------------------------------------------------------------
    // Overrides
    // ------------------------------------------------------------------

    pub fn override_node_label_or_query(self, node_label_or_query: impl Into<String>) -> Self {
        self.override_value(keys::NODE_LABEL_QUERY, node_label_or_query.into())
    }

    pub fn override_relationship_type_or_query(self, relationship_type_or_query: impl Into<String>) -> Self {
        self.override_value(keys::RELATIONSHIP_QUERY, relationship_type_or_query.into())
    }

    /// Store a direction name as given; it is validated when read back
    pub fn override_direction(self, direction: impl Into<String>) -> Self {
        self.override_value(keys::DIRECTION, direction.into())
    }

    pub fn override_direction_with(self, direction: Direction) -> Self {
        self.override_value(keys::DIRECTION, direction.name().to_string())
    }

    pub fn override_weight_property(self, weight_property: impl Into<String>) -> Self {
        self.override_value(keys::WEIGHT_PROPERTY, weight_property.into())
    }

    fn override_value(mut self, key: &str, value: String) -> Self {
        log_debug!(self.logger, "override {} = {:?}", key, value);
        self.entries.insert(key.to_string(), ParamValue::String(value));
        self
    }

    // ------------------------------------------------------------------
    // Generic typed reads
    // ------------------------------------------------------------------

    /// Present, non-null value for a key
    fn value(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key).filter(|v| !v.is_null())
    }

    /// String value, with empty strings reported as absent
    pub fn get_string(&self, key: &str) -> ConfigResult<Option<String>> {
        match self.value(key) {
            None => Ok(None),
            Some(ParamValue::String(s)) if s.is_empty() => Ok(None),
            Some(ParamValue::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(ConfigError::type_mismatch(key, "string", other.type_name())),
        }
    }

    /// String value, or `default` if absent or empty
    pub fn get_string_or(&self, key: &str, default: &str) -> ConfigResult<String> {
        Ok(self.get_string(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// String value that must be present and non-empty
    pub fn require_string(&self, key: &str) -> ConfigResult<String> {
        self.get_string(key)?
            .ok_or_else(|| ConfigError::missing_value(key))
    }

    /// Numeric value; `default` covers absence only, never a wrong type
    pub fn get_number(&self, key: &str, default: f64) -> ConfigResult<f64> {
        match self.value(key) {
            None => Ok(default),
            Some(v) => v
                .as_f64()
                .ok_or_else(|| ConfigError::type_mismatch(key, "number", v.type_name())),
        }
    }

    /// Integer value; floats truncate toward zero
    pub fn get_int(&self, key: &str, default: i64) -> ConfigResult<i64> {
        match self.value(key) {
            None => Ok(default),
            Some(v) => v
                .as_i64()
                .ok_or_else(|| ConfigError::type_mismatch(key, "number", v.type_name())),
        }
    }

    /// Non-negative count
    fn get_count(&self, key: &str, default: usize) -> ConfigResult<usize> {
        match self.value(key) {
            None => Ok(default),
            Some(_) => {
                let raw = self.get_int(key, 0)?;
                usize::try_from(raw).map_err(|_| {
                    ConfigError::invalid_argument(format!(
                        "The value of {} must not be negative, got {}",
                        key, raw
                    ))
                })
            }
        }
    }

    pub fn get_bool(&self, key: &str, default: bool) -> ConfigResult<bool> {
        match self.value(key) {
            None => Ok(default),
            Some(v) => v
                .as_bool()
                .ok_or_else(|| ConfigError::type_mismatch(key, "boolean", v.type_name())),
        }
    }

    // ------------------------------------------------------------------
    // Reserved keys
    // ------------------------------------------------------------------

    /// Node label or node query, if given
    pub fn get_node_label_or_query(&self) -> ConfigResult<Option<String>> {
        self.get_string(keys::NODE_LABEL_QUERY)
    }

    pub fn get_node_label_or_query_or(&self, default: &str) -> ConfigResult<String> {
        self.get_string_or(keys::NODE_LABEL_QUERY, default)
    }

    /// Relationship type or relationship query, if given
    pub fn get_relationship_or_query(&self) -> ConfigResult<Option<String>> {
        self.get_string(keys::RELATIONSHIP_QUERY)
    }

    pub fn get_relationship_or_query_or(&self, default: &str) -> ConfigResult<String> {
        self.get_string_or(keys::RELATIONSHIP_QUERY, default)
    }

    /// Property results are written to, falling back to the engine default
    pub fn get_write_property(&self) -> ConfigResult<String> {
        self.get_string_or(keys::WRITE_PROPERTY, &self.defaults.write_property)
    }

    pub fn get_write_property_or(&self, default: &str) -> ConfigResult<String> {
        self.get_string_or(keys::WRITE_PROPERTY, default)
    }

    /// Write-back flag, on unless switched off
    pub fn is_write_flag(&self) -> ConfigResult<bool> {
        self.is_write_flag_or(true)
    }

    pub fn is_write_flag_or(&self, default: bool) -> ConfigResult<bool> {
        self.get_bool(keys::WRITE_FLAG, default)
    }

    /// Whether the node and relationship selectors are queries
    pub fn is_cypher_flag(&self) -> ConfigResult<bool> {
        self.is_cypher_flag_or(false)
    }

    pub fn is_cypher_flag_or(&self, default: bool) -> ConfigResult<bool> {
        self.get_bool(keys::CYPHER_FLAG, default)
    }

    /// Whether additional result statistics are requested
    pub fn is_stats_flag(&self) -> ConfigResult<bool> {
        self.is_stats_flag_or(false)
    }

    pub fn is_stats_flag_or(&self, default: bool) -> ConfigResult<bool> {
        self.get_bool(keys::STATS_FLAG, default)
    }

    /// Key presence only: an empty name still counts, though `get_weight_property` reads it as `None`
    pub fn has_weight_property(&self) -> bool {
        self.contains_keys(&[keys::WEIGHT_PROPERTY])
    }

    pub fn get_weight_property(&self) -> ConfigResult<Option<String>> {
        self.get_string(keys::WEIGHT_PROPERTY)
    }

    /// Weight used for relationships lacking the weight property, falling
    /// back to the engine default
    pub fn get_weight_property_default_value(&self) -> ConfigResult<f64> {
        self.get_weight_property_default_value_or(self.defaults.weight_property_default)
    }

    pub fn get_weight_property_default_value_or(&self, default: f64) -> ConfigResult<f64> {
        self.get_number(keys::WEIGHT_PROPERTY_DEFAULT, default)
    }

    pub fn get_iterations(&self, default: usize) -> ConfigResult<usize> {
        self.get_count(keys::ITERATIONS, default)
    }

    pub fn get_iterations_or_default(&self) -> ConfigResult<usize> {
        self.get_iterations(self.defaults.iterations)
    }

    /// Batch size for parallel evaluation, falling back to the engine default
    pub fn get_batch_size(&self) -> ConfigResult<usize> {
        self.get_batch_size_or(self.defaults.batch_size)
    }

    pub fn get_batch_size_or(&self, default: usize) -> ConfigResult<usize> {
        self.get_count(keys::BATCH_SIZE, default)
    }

    /// Worker count, falling back to the engine default
    pub fn get_concurrency(&self) -> ConfigResult<usize> {
        self.get_concurrency_or(self.defaults.concurrency)
    }

    pub fn get_concurrency_or(&self, default: usize) -> ConfigResult<usize> {
        self.get_count(keys::CONCURRENCY, default)
    }

    /// Raw direction name, unvalidated
    pub fn get_direction_name(&self) -> ConfigResult<String> {
        self.get_direction_name_or(self.defaults.direction.name())
    }

    pub fn get_direction_name_or(&self, default: &str) -> ConfigResult<String> {
        self.get_string_or(keys::DIRECTION, default)
    }

    /// Validated direction; an unknown name is an error, not the default
    pub fn get_direction(&self, default: Direction) -> ConfigResult<Direction> {
        match self.get_string(keys::DIRECTION)? {
            Some(name) => name.parse(),
            None => Ok(default),
        }
    }

    /// Nested query parameters, passed through uninterpreted
    pub fn get_params(&self) -> ConfigResult<ParamMap> {
        match self.value(keys::PARAMS) {
            None => Ok(ParamMap::new()),
            Some(ParamValue::Map(params)) => Ok(params.clone()),
            Some(other) => Err(ConfigError::type_mismatch(keys::PARAMS, "map", other.type_name())),
        }
    }

    // ------------------------------------------------------------------
    // Backend selection
    // ------------------------------------------------------------------

    /// Backend named by the `graph` key, or the engine default
    pub fn get_graph_impl(&self) -> ConfigResult<GraphBackend> {
        let backend = match self.get_string(keys::GRAPH_IMPL)? {
            Some(name) => GraphBackend::from_name(&name)?,
            None => self.defaults.graph,
        };
        log_debug!(self.logger, "resolved graph backend '{}'", backend);
        Ok(backend)
    }

    /// Configured backend, restricted to the ones an algorithm supports
    ///
    /// `allowed` must name at least one backend.
    pub fn get_graph_impl_among(&self, allowed: &[GraphBackend]) -> ConfigResult<GraphBackend> {
        if allowed.is_empty() {
            return Err(ConfigError::invalid_argument("No graph backends allowed for this algo"));
        }
        let backend = self.get_graph_impl()?;
        if backend.is_satisfied_by_any(allowed) {
            return Ok(backend);
        }
        Err(ConfigError::invalid_argument(format!(
            "The selected graph is not suitable for this algo, please use either {}",
            GraphBackend::describe_allowed(allowed)
        )))
    }
}
