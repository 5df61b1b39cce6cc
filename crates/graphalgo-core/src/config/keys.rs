//! Reserved parameter names understood by the resolver
//!
//! These strings are the contract with the procedure layer that builds the
//! raw parameter map.

/// Node label, or a query selecting the nodes
pub const NODE_LABEL_QUERY: &str = "nodeQuery";

/// Relationship type, or a query selecting the relationships
pub const RELATIONSHIP_QUERY: &str = "relationshipQuery";

/// Traversal direction name
pub const DIRECTION: &str = "direction";

/// Whether results are written back to the graph
pub const WRITE_FLAG: &str = "write";

/// Property the results are written to
pub const WRITE_PROPERTY: &str = "writeProperty";

/// Whether the node/relationship selectors are queries
pub const CYPHER_FLAG: &str = "cypher";

/// Whether additional result statistics are requested
pub const STATS_FLAG: &str = "stats";

/// Relationship property used as weight
pub const WEIGHT_PROPERTY: &str = "weightProperty";

/// Weight used when the weight property is missing on a relationship
pub const WEIGHT_PROPERTY_DEFAULT: &str = "defaultValue";

pub const ITERATIONS: &str = "iterations";

pub const BATCH_SIZE: &str = "batchSize";

pub const CONCURRENCY: &str = "concurrency";

/// Graph backend name
pub const GRAPH_IMPL: &str = "graph";

/// Nested map passed through to the query executor
pub const PARAMS: &str = "params";
