//! Core data types for cellgraph.
//!
//! This module defines the types that represent graph elements and their
//! properties: the [`Value`] enum, the insertion-ordered [`Properties`] map,
//! and the [`Entity`] / [`Edge`] / [`Element`] family.

mod element;
mod properties;
mod value;

pub use element::{Edge, Element, Entity};
pub use properties::Properties;
pub use value::Value;
