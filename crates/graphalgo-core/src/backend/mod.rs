//! Graph backend selection
//!
//! - `GraphBackend`: the closed set of storage backends, selectable by name
//! - `GraphFactory`: capability the external backend implementations provide
//! - registry functions for instantiating the selected backend

mod kind;
mod traits;
mod registry;

pub use kind::GraphBackend;
pub use traits::GraphFactory;
pub use registry::{
    register_graph_factory, create_graph_factory, has_graph_factory,
    registered_backends, unregister_graph_factory, FactoryConstructor,
};
