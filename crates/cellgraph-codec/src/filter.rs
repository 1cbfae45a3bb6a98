//! Range-scan filter policy.
//!
//! Range scans over the row space return entity rows and all three kinds of
//! edge row. A query that wants anything narrower needs a filter iterator on
//! the scan; the one query shape that sees every row anyway — entities plus
//! all edges in both directions — can skip it. This module decides which
//! case applies and, when a filter is needed, describes its parameters.

use serde::{Deserialize, Serialize};

/// Which kinds of edge a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeInclusion {
    /// Directed and undirected edges.
    All,
    /// Directed edges only.
    Directed,
    /// Undirected edges only.
    Undirected,
    /// No edges.
    None,
}

/// Which edge orientations, relative to the queried vertex, a query asks
/// for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Incoming and outgoing edges.
    Both,
    /// Edges arriving at the queried vertex.
    Incoming,
    /// Edges leaving the queried vertex.
    Outgoing,
}

/// The parameters of a range-element filter iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFilterSpec {
    /// Whether entity rows pass the filter.
    pub include_entities: bool,
    /// Which edge kinds pass the filter.
    pub include_edges: EdgeInclusion,
    /// Which edge orientations pass the filter.
    pub direction: Direction,
}

/// Decide whether a range scan needs a filter iterator.
///
/// Returns `None` — no filter needed — only when the query asks for
/// entities, every kind of edge, and both directions; every other shape gets
/// a [`RangeFilterSpec`] echoing its parameters.
///
/// # Example
///
/// ```
/// use cellgraph_codec::filter::{range_element_filter, Direction, EdgeInclusion};
///
/// assert!(range_element_filter(true, EdgeInclusion::All, Direction::Both).is_none());
///
/// let spec = range_element_filter(false, EdgeInclusion::All, Direction::Both).unwrap();
/// assert!(!spec.include_entities);
/// ```
#[must_use]
pub fn range_element_filter(
    include_entities: bool,
    include_edges: EdgeInclusion,
    direction: Direction,
) -> Option<RangeFilterSpec> {
    if include_entities && include_edges == EdgeInclusion::All && direction == Direction::Both {
        return None;
    }
    Some(RangeFilterSpec { include_entities, include_edges, direction })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn full_query_shape_needs_no_filter() {
        assert!(range_element_filter(true, EdgeInclusion::All, Direction::Both).is_none());
    }

    #[test]
    fn every_other_shape_gets_a_filter() {
        let edges =
            [EdgeInclusion::All, EdgeInclusion::Directed, EdgeInclusion::Undirected, EdgeInclusion::None];
        let directions = [Direction::Both, Direction::Incoming, Direction::Outgoing];
        for include_entities in [true, false] {
            for include_edges in edges {
                for direction in directions {
                    let elided = include_entities
                        && include_edges == EdgeInclusion::All
                        && direction == Direction::Both;
                    let spec = range_element_filter(include_entities, include_edges, direction);
                    assert_eq!(spec.is_none(), elided);
                    if let Some(spec) = spec {
                        assert_eq!(spec.include_entities, include_entities);
                        assert_eq!(spec.include_edges, include_edges);
                        assert_eq!(spec.direction, direction);
                    }
                }
            }
        }
    }

    #[test]
    fn spec_serialises_for_iterator_configuration() {
        let spec = range_element_filter(false, EdgeInclusion::Directed, Direction::Outgoing)
            .unwrap();
        let json = serde_json::to_string(&spec).unwrap();
        let back: RangeFilterSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
