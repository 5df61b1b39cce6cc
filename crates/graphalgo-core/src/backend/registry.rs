//! Registry mapping graph backends to the factories that load them

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::kind::GraphBackend;
use super::traits::GraphFactory;

/// Constructor for a backend's graph factory
pub type FactoryConstructor = Box<dyn Fn() -> Arc<dyn GraphFactory> + Send + Sync>;

struct FactoryDefinition {
    description: String,
    constructor: FactoryConstructor,
}

impl std::fmt::Debug for FactoryDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryDefinition")
            .field("description", &self.description)
            .finish()
    }
}

/// Backends are contributed by the storage layer at startup; empty until then.
static REGISTRY: Lazy<RwLock<BTreeMap<GraphBackend, FactoryDefinition>>> =
    Lazy::new(|| RwLock::new(BTreeMap::new()));

/// Register the factory constructor for a backend
///
/// Registering a backend twice replaces the earlier constructor.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use graphalgo_core::backend::{
///     create_graph_factory, register_graph_factory, unregister_graph_factory,
///     GraphBackend, GraphFactory,
/// };
///
/// struct Paged;
///
/// impl GraphFactory for Paged {
///     fn backend(&self) -> GraphBackend {
///         GraphBackend::Huge
///     }
/// }
///
/// register_graph_factory(GraphBackend::Huge, "paged loader", Box::new(|| Arc::new(Paged)));
/// let factory = create_graph_factory(GraphBackend::Huge).unwrap();
/// assert_eq!(factory.backend(), GraphBackend::Huge);
/// unregister_graph_factory(GraphBackend::Huge);
/// ```
pub fn register_graph_factory(backend: GraphBackend, description: &str, constructor: FactoryConstructor) {
    REGISTRY.write().insert(
        backend,
        FactoryDefinition {
            description: description.to_string(),
            constructor,
        },
    );
}

/// Instantiate the factory for a backend, or `None` if none is registered
pub fn create_graph_factory(backend: GraphBackend) -> Option<Arc<dyn GraphFactory>> {
    let registry = REGISTRY.read();
    registry.get(&backend).map(|def| (def.constructor)())
}

pub fn has_graph_factory(backend: GraphBackend) -> bool {
    REGISTRY.read().contains_key(&backend)
}

/// Registered backends with their descriptions, in declaration order
pub fn registered_backends() -> Vec<(GraphBackend, String)> {
    REGISTRY
        .read()
        .iter()
        .map(|(backend, def)| (*backend, def.description.clone()))
        .collect()
}

/// Remove a backend's factory (mainly for testing)
pub fn unregister_graph_factory(backend: GraphBackend) -> bool {
    REGISTRY.write().remove(&backend).is_some()
}
