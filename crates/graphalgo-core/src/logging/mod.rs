//! Runtime-agnostic logging
//!
//! The embedding engine supplies a `Logger`; nothing is logged by default.

mod traits;
mod noop;

pub use traits::{Logger, LoggerExt, SharedLogger};
pub use noop::NoOpLogger;

#[cfg(test)]
pub(crate) use traits::tests::RecordingLogger;
