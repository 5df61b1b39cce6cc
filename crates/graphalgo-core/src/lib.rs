//! Graph Algorithms Core
//!
//! Typed configuration resolution for graph algorithm procedures.
//! A procedure call arrives as an untyped key-value map; this crate turns it
//! into validated iteration counts, concurrency levels, directions, weight
//! settings and a choice of graph storage backend.
//!
//! ## Backend Selection
//!
//! Algorithms that only run on some backends pass the supported set:
//!
//! ```rust
//! use graphalgo_core::{ConfigurationResolver, ConfigError, GraphBackend};
//! use serde_json::json;
//!
//! let config = ConfigurationResolver::from_json(json!({"graph": "light"})).unwrap();
//! let err = config
//!     .get_graph_impl_among(&[GraphBackend::Heavy, GraphBackend::Huge])
//!     .unwrap_err();
//! assert!(matches!(err, ConfigError::InvalidArgument(_)));
//! ```

pub mod types;
pub mod config;
pub mod backend;
pub mod logging;
pub mod resolver;

// Re-export commonly used types
pub use types::{ParamMap, ParamValue, Direction};

pub use config::{ConfigError, ConfigResult, EngineDefaults};

pub use backend::{
    GraphBackend, GraphFactory,
    register_graph_factory, create_graph_factory, has_graph_factory,
};

pub use logging::{Logger, SharedLogger, NoOpLogger};

pub use resolver::ConfigurationResolver;
