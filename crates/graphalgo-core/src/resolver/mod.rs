//! Typed resolution of procedure parameters
//!
//! Turns the untyped parameter map of a procedure call into validated
//! values and a graph backend choice.

mod procedure_config;

pub use procedure_config::ConfigurationResolver;
