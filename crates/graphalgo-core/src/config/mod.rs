//! Configuration primitives
//!
//! - `ConfigError`: failures raised by typed parameter reads
//! - `keys`: reserved parameter names
//! - `EngineDefaults`: engine-wide fallbacks, loadable from YAML

mod error;
mod defaults;
pub mod keys;

pub use error::{ConfigError, ConfigResult};
pub use defaults::{EngineDefaults, DEFAULT_BATCH_SIZE, DEFAULT_WRITE_PROPERTY};
