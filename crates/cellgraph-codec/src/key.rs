//! Row key construction, parsing, and scan ranges.
//!
//! # Row key layout
//!
//! Every row key ends with a flag byte identifying what the row holds. For an
//! entity with escaped vertex `V`:
//!
//! ```text
//! V ‖ 0x00 ‖ ENTITY
//! ```
//!
//! An edge produces up to two rows so it can be found from either endpoint.
//! With escaped endpoints `S` and `D`:
//!
//! ```text
//! S ‖ 0x00 ‖ f1 ‖ 0x00 ‖ D ‖ 0x00 ‖ f1
//! D ‖ 0x00 ‖ f2 ‖ 0x00 ‖ S ‖ 0x00 ‖ f2
//! ```
//!
//! where `(f1, f2)` is `(DIRECTED, DIRECTED_REVERSED)` for a directed edge
//! and `(UNDIRECTED, UNDIRECTED)` otherwise. A self-loop produces the first
//! row only, so scans never see the same edge twice.
//!
//! # Flag ordering
//!
//! `ENTITY (1) < DIRECTED (2) < DIRECTED_REVERSED (3) < UNDIRECTED (4)` is
//! load-bearing: it puts the entity row of a vertex below all of its edge
//! rows, and lets a single range `[V‖00‖02‖00, V‖00‖04‖01)` cover every edge
//! row for `V`. Changing any flag value is a format-breaking change.

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};
use crate::escape::{unescape, DELIMITER, DELIMITER_PLUS_ONE};
use crate::options::OperationOptions;

/// Flag bytes terminating every row key.
pub mod flags {
    /// The row holds an entity.
    pub const ENTITY: u8 = 0x01;
    /// The row holds a directed edge in stored source→destination order.
    pub const DIRECTED: u8 = 0x02;
    /// The row holds a directed edge with its endpoints byte-swapped, for
    /// lookups by destination.
    pub const DIRECTED_REVERSED: u8 = 0x03;
    /// The row holds an undirected edge.
    pub const UNDIRECTED: u8 = 0x04;
}

/// The one or two row keys an element encodes to.
///
/// Entities and self-loop edges produce a single key; every other edge
/// produces two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowKeys {
    /// The primary row key.
    pub first: Vec<u8>,
    /// The reversed-endpoint row key, absent for entities and self-loops.
    pub second: Option<Vec<u8>>,
}

impl RowKeys {
    /// A single row key.
    #[must_use]
    pub const fn single(first: Vec<u8>) -> Self {
        Self { first, second: None }
    }

    /// A pair of row keys.
    #[must_use]
    pub const fn pair(first: Vec<u8>, second: Vec<u8>) -> Self {
        Self { first, second: Some(second) }
    }

    /// Iterate over the keys present.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        std::iter::once(self.first.as_slice()).chain(self.second.as_deref())
    }

    /// Number of keys present (1 or 2).
    #[must_use]
    pub const fn count(&self) -> usize {
        if self.second.is_some() {
            2
        } else {
            1
        }
    }
}

/// The endpoints and direction recovered from an edge row key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEdgeRow {
    /// Unescaped serialised source identifier.
    pub source: Vec<u8>,
    /// Unescaped serialised destination identifier.
    pub destination: Vec<u8>,
    /// Whether the edge is directed.
    pub directed: bool,
}

/// Build the row key for an entity from its escaped vertex bytes.
#[must_use]
pub fn entity_row_key(escaped_vertex: &[u8]) -> Vec<u8> {
    let mut key = Vec::with_capacity(escaped_vertex.len() + 2);
    key.extend_from_slice(escaped_vertex);
    key.push(DELIMITER);
    key.push(flags::ENTITY);
    key
}

/// Build the row key pair for an edge from its escaped endpoint bytes.
///
/// When the escaped endpoints are identical the edge is a self-loop and only
/// the first key is produced.
#[must_use]
pub fn edge_row_keys(escaped_source: &[u8], escaped_destination: &[u8], directed: bool) -> RowKeys {
    let (flag1, flag2) = if directed {
        (flags::DIRECTED, flags::DIRECTED_REVERSED)
    } else {
        (flags::UNDIRECTED, flags::UNDIRECTED)
    };
    let first = edge_row_key(escaped_source, escaped_destination, flag1);
    if escaped_source == escaped_destination {
        return RowKeys::single(first);
    }
    RowKeys::pair(first, edge_row_key(escaped_destination, escaped_source, flag2))
}

fn edge_row_key(a: &[u8], b: &[u8], flag: u8) -> Vec<u8> {
    let mut key = Vec::with_capacity(a.len() + b.len() + 5);
    key.extend_from_slice(a);
    key.push(DELIMITER);
    key.push(flag);
    key.push(DELIMITER);
    key.extend_from_slice(b);
    key.push(DELIMITER);
    key.push(flag);
    key
}

/// Whether a row key holds an entity.
#[inline]
#[must_use]
pub fn is_entity_row(row: &[u8]) -> bool {
    row.last() == Some(&flags::ENTITY)
}

/// Recover the unescaped serialised vertex from an entity row key.
///
/// # Errors
///
/// Returns [`CodecError::BadDelimiterCount`] if the row is too short to end
/// in `delimiter ‖ flag`, and [`CodecError::MalformedEscape`] if the vertex
/// bytes do not unescape.
pub fn parse_entity_row(row: &[u8]) -> CodecResult<Vec<u8>> {
    if row.len() < 2 || row[row.len() - 2] != DELIMITER {
        return Err(CodecError::BadDelimiterCount { found: 0, expected: 1 });
    }
    unescape(&row[..row.len() - 2])
}

/// Recover endpoints and direction from an edge row key.
///
/// The terminal flag byte is excluded from the delimiter scan; the remainder
/// must contain exactly three delimiters. A `DIRECTED_REVERSED` row stores
/// its endpoints byte-swapped: by default they are swapped back so `source`
/// is the true source, unless the
/// [`RETURN_MATCHED_SEEDS_AS_EDGE_SOURCE`](crate::options::RETURN_MATCHED_SEEDS_AS_EDGE_SOURCE)
/// option asks for the stored order.
///
/// # Errors
///
/// Returns [`CodecError::BadDelimiterCount`] on a malformed layout,
/// [`CodecError::BadDirectionFlag`] on an unknown terminal flag, and
/// [`CodecError::MalformedEscape`] if an endpoint does not unescape.
pub fn parse_edge_row(row: &[u8], options: &OperationOptions) -> CodecResult<ParsedEdgeRow> {
    let Some((&flag, body)) = row.split_last() else {
        return Err(CodecError::BadDelimiterCount { found: 0, expected: 3 });
    };
    let mut positions = [0usize; 3];
    let mut found = 0usize;
    for (i, &b) in body.iter().enumerate() {
        if b == DELIMITER {
            if found == positions.len() {
                return Err(CodecError::BadDelimiterCount { found: found + 1, expected: 3 });
            }
            positions[found] = i;
            found += 1;
        }
    }
    if found != positions.len() {
        return Err(CodecError::BadDelimiterCount { found, expected: 3 });
    }

    let first = unescape(&row[..positions[0]])?;
    let second = unescape(&row[positions[1] + 1..positions[2]])?;
    match flag {
        flags::UNDIRECTED => {
            Ok(ParsedEdgeRow { source: first, destination: second, directed: false })
        }
        flags::DIRECTED => Ok(ParsedEdgeRow { source: first, destination: second, directed: true }),
        flags::DIRECTED_REVERSED => {
            if options.matched_seeds_as_edge_source() {
                Ok(ParsedEdgeRow { source: first, destination: second, directed: true })
            } else {
                Ok(ParsedEdgeRow { source: second, destination: first, directed: true })
            }
        }
        other => Err(CodecError::BadDirectionFlag { flag: other }),
    }
}

/// Inclusive lower bound for the entity row of an escaped vertex.
#[must_use]
pub fn entity_start_key(escaped_vertex: &[u8]) -> Vec<u8> {
    entity_row_key(escaped_vertex)
}

/// Exclusive upper bound just above the entity row of an escaped vertex.
#[must_use]
pub fn entity_end_key(escaped_vertex: &[u8]) -> Vec<u8> {
    let mut key = entity_row_key(escaped_vertex);
    key.push(DELIMITER_PLUS_ONE);
    key
}

/// Inclusive lower bound of the undirected-edge rows of an escaped vertex.
#[must_use]
pub fn edge_start_key(escaped_vertex: &[u8]) -> Vec<u8> {
    let mut key = Vec::with_capacity(escaped_vertex.len() + 2);
    key.extend_from_slice(escaped_vertex);
    key.push(DELIMITER);
    key.push(flags::UNDIRECTED);
    key
}

/// Exclusive upper bound above every edge row of an escaped vertex.
#[must_use]
pub fn edge_end_key(escaped_vertex: &[u8]) -> Vec<u8> {
    let mut key = edge_start_key(escaped_vertex);
    key.push(DELIMITER_PLUS_ONE);
    key
}

/// The `[start, end)` range covering every edge row of an escaped vertex and
/// nothing else — in particular not the vertex's entity row, which sorts
/// below `start`.
#[must_use]
pub fn edge_only_range(escaped_vertex: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut start = Vec::with_capacity(escaped_vertex.len() + 3);
    start.extend_from_slice(escaped_vertex);
    start.push(DELIMITER);
    start.push(flags::DIRECTED);
    start.push(DELIMITER);
    (start, edge_end_key(escaped_vertex))
}
