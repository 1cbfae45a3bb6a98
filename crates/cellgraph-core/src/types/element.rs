//! Graph element types.
//!
//! This module provides [`Entity`] (a vertex with properties) and [`Edge`]
//! (a relationship between two vertices), unified by the [`Element`] sum
//! type. Every element belongs to a *group* — the logical element class name
//! that indexes a schema entry and becomes the cell's column family.
//!
//! # Example
//!
//! ```
//! use cellgraph_core::{Edge, Element, Entity};
//!
//! let alice = Entity::new("person", "alice").with_property("age", 30i64);
//!
//! let knows = Edge::new("knows", "alice", "bob", false)
//!     .with_property("since", 2020i64);
//!
//! assert_eq!(alice.group, "person");
//! assert!(!knows.directed);
//!
//! let element: Element = knows.into();
//! assert_eq!(element.group(), "knows");
//! ```

use serde::{Deserialize, Serialize};

use super::{Properties, Value};

/// A vertex in the graph, identified by its vertex value within a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// The element group this entity belongs to.
    pub group: String,
    /// The vertex identifier.
    pub vertex: Value,
    /// Properties stored on this entity.
    pub properties: Properties,
}

impl Entity {
    /// Create a new entity in the given group.
    #[must_use]
    pub fn new(group: impl Into<String>, vertex: impl Into<Value>) -> Self {
        Self { group: group.into(), vertex: vertex.into(), properties: Properties::new() }
    }

    /// Add a property to this entity.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name, value);
        self
    }

    /// Get a property value by name.
    #[inline]
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Set a property value.
    #[inline]
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(name, value);
    }
}

/// A relationship between two vertices.
///
/// Edges connect a source vertex to a destination vertex and may be directed
/// or undirected. An edge whose source equals its destination is a self-loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// The element group this edge belongs to.
    pub group: String,
    /// The source vertex identifier.
    pub source: Value,
    /// The destination vertex identifier.
    pub destination: Value,
    /// Whether this edge is directed from source to destination.
    pub directed: bool,
    /// Properties stored on this edge.
    pub properties: Properties,
}

impl Edge {
    /// Create a new edge between two vertices.
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        source: impl Into<Value>,
        destination: impl Into<Value>,
        directed: bool,
    ) -> Self {
        Self {
            group: group.into(),
            source: source.into(),
            destination: destination.into(),
            directed,
            properties: Properties::new(),
        }
    }

    /// Add a property to this edge.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name, value);
        self
    }

    /// Get a property value by name.
    #[inline]
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Set a property value.
    #[inline]
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(name, value);
    }

    /// Returns `true` if source and destination are the same vertex.
    #[inline]
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

/// A graph element: either an [`Entity`] or an [`Edge`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    /// A vertex with properties.
    Entity(Entity),
    /// A relationship between two vertices.
    Edge(Edge),
}

impl Element {
    /// The group this element belongs to.
    #[inline]
    #[must_use]
    pub fn group(&self) -> &str {
        match self {
            Self::Entity(e) => &e.group,
            Self::Edge(e) => &e.group,
        }
    }

    /// The element's properties.
    #[inline]
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        match self {
            Self::Entity(e) => &e.properties,
            Self::Edge(e) => &e.properties,
        }
    }

    /// Mutable access to the element's properties.
    #[inline]
    pub fn properties_mut(&mut self) -> &mut Properties {
        match self {
            Self::Entity(e) => &mut e.properties,
            Self::Edge(e) => &mut e.properties,
        }
    }

    /// Returns `true` if this element is an entity.
    #[inline]
    #[must_use]
    pub const fn is_entity(&self) -> bool {
        matches!(self, Self::Entity(_))
    }
}

impl From<Entity> for Element {
    #[inline]
    fn from(entity: Entity) -> Self {
        Self::Entity(entity)
    }
}

impl From<Edge> for Element {
    #[inline]
    fn from(edge: Edge) -> Self {
        Self::Edge(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_builder() {
        let entity = Entity::new("person", "alice").with_property("age", 30i64);
        assert_eq!(entity.group, "person");
        assert_eq!(entity.vertex, Value::String("alice".to_owned()));
        assert_eq!(entity.get_property("age"), Some(&Value::Int(30)));
    }

    #[test]
    fn edge_self_loop() {
        let loop_edge = Edge::new("knows", "a", "a", true);
        let plain_edge = Edge::new("knows", "a", "b", true);
        assert!(loop_edge.is_self_loop());
        assert!(!plain_edge.is_self_loop());
    }

    #[test]
    fn element_accessors() {
        let mut element: Element = Entity::new("person", "alice").into();
        assert!(element.is_entity());
        assert_eq!(element.group(), "person");
        element.properties_mut().insert("age", 30i64);
        assert_eq!(element.properties().get("age"), Some(&Value::Int(30)));

        let element: Element = Edge::new("knows", "a", "b", false).into();
        assert!(!element.is_entity());
        assert_eq!(element.group(), "knows");
    }
}
