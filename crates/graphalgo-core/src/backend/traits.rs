//! Graph factory capability

use super::kind::GraphBackend;

/// Capability implemented by every graph storage backend
///
/// The backends themselves live outside this crate. Implementations register
/// a constructor with the factory registry so that the backend picked by the
/// resolver can be instantiated by name.
///
/// # Example
///
/// ```
/// use graphalgo_core::backend::{GraphBackend, GraphFactory};
///
/// struct InMemory;
///
/// impl GraphFactory for InMemory {
///     fn backend(&self) -> GraphBackend {
///         GraphBackend::Light
///     }
/// }
///
/// assert_eq!(InMemory.name(), "light");
/// ```
pub trait GraphFactory: Send + Sync {
    /// Backend this factory loads graphs for
    fn backend(&self) -> GraphBackend;

    /// Canonical backend name
    fn name(&self) -> &'static str {
        self.backend().name()
    }

    /// Human-readable description
    fn description(&self) -> String {
        format!("{} graph factory", self.name())
    }
}
