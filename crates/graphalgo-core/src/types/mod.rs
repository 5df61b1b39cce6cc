//! Value types shared by the resolver and its callers

mod value;
mod direction;

pub use value::{ParamMap, ParamValue};
pub use direction::Direction;
