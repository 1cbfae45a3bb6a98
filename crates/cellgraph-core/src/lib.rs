//! Cellgraph Core
//!
//! This crate provides the data model and serialisation primitives shared by
//! the cellgraph codec: graph elements, property values, the schema that
//! describes how each element group is laid out, and the serialiser seam that
//! turns individual values into bytes.
//!
//! # Overview
//!
//! - **Elements**: [`Entity`] (a vertex with properties) and [`Edge`] (a
//!   directed or undirected relationship), unified by the [`Element`] sum type
//! - **Values**: the [`Value`] enum covering every storable property type
//! - **Properties**: [`Properties`], an insertion-order-preserving map from
//!   property name to [`Value`]
//! - **Schema**: [`Schema`], [`ElementDef`] and [`TypeDef`], describing the
//!   declared property order, the group-by subset, and per-property
//!   serialisers for each element group
//! - **Serialisation**: the [`Serialiser`] trait plus a small family of
//!   concrete serialisers and the compact variable-length integer codec used
//!   for length prefixes
//!
//! # Example
//!
//! ```
//! use cellgraph_core::{Edge, Entity, Value};
//!
//! let person = Entity::new("person", "alice")
//!     .with_property("age", 30i64)
//!     .with_property("city", "Lundenwic");
//!
//! let follows = Edge::new("follows", "alice", "bob", true)
//!     .with_property("weight", 2i64);
//!
//! assert_eq!(person.get_property("age"), Some(&Value::Int(30)));
//! assert!(!follows.is_self_loop());
//! ```
//!
//! # Modules
//!
//! - [`types`] - Core data types ([`Element`], [`Entity`], [`Edge`], [`Value`])
//! - [`schema`] - Element group definitions ([`Schema`], [`ElementDef`])
//! - [`serialise`] - The [`Serialiser`] seam and the vint codec
//! - [`error`] - Error types ([`CoreError`])

pub mod error;
pub mod schema;
pub mod serialise;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, CoreResult};
pub use schema::{ElementDef, Schema, TypeDef};
pub use serialise::Serialiser;
pub use types::{Edge, Element, Entity, Properties, Value};
