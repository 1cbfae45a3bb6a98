//! Cellgraph Codec
//!
//! A bidirectional, byte-exact translation between a graph's logical
//! elements — entities and edges with typed properties — and the
//! row-oriented cell format of a wide-column store: a row key, a column
//! family, a column qualifier, a column visibility, a timestamp, and a
//! value payload.
//!
//! The byte layouts produced here govern on-disk order, scan-range
//! construction, and filter behaviour for a persistent dataset, so every
//! layout in this crate is frozen; the pinned-byte tests in each module are
//! the contract.
//!
//! # Layout summary
//!
//! - **Row keys** ([`key`]): `escape(vertex) ‖ 0x00 ‖ flag` for entities;
//!   two mirrored rows per edge so it can be scanned from either endpoint,
//!   one row for self-loops.
//! - **Column family**: the UTF-8 group name.
//! - **Column qualifier / value** : length-prefixed records of the group-by
//!   and remaining properties, in schema declaration order.
//! - **Column visibility / timestamp** ([`ElementCodec`]): the designated
//!   visibility and timestamp properties, when the schema names them.
//!
//! # Example
//!
//! ```
//! use cellgraph_codec::options::OperationOptions;
//! use cellgraph_codec::ElementCodec;
//! use cellgraph_core::schema::{ElementDef, Schema, TypeDef};
//! use cellgraph_core::serialise::{CompactIntSerialiser, RawStringSerialiser};
//! use cellgraph_core::{Edge, Element};
//!
//! let schema = Schema::new(RawStringSerialiser).with_element(
//!     "knows",
//!     ElementDef::new().with_property("weight", TypeDef::new(CompactIntSerialiser)),
//! );
//! let codec = ElementCodec::new(&schema);
//!
//! let edge: Element = Edge::new("knows", "alice", "bob", true)
//!     .with_property("weight", 3i64)
//!     .into();
//! let encoded = codec.encode(&edge).unwrap();
//!
//! // A directed edge writes two rows; either decodes back to the edge.
//! let cells = encoded.cells();
//! assert_eq!(cells.len(), 2);
//! for cell in &cells {
//!     assert_eq!(codec.decode_cell(cell, &OperationOptions::new()).unwrap(), edge);
//! }
//! ```

pub mod cell;
pub mod error;
pub mod escape;
pub mod filter;
pub mod key;
pub mod options;

mod properties;
mod timestamp;
mod visibility;


pub use cell::{Cell, ElementCodec, EncodedElement};
pub use error::{CodecError, CodecResult};
pub use escape::{escape, unescape, DELIMITER, DELIMITER_PLUS_ONE};
pub use filter::{range_element_filter, Direction, EdgeInclusion, RangeFilterSpec};
pub use key::{flags, ParsedEdgeRow, RowKeys};
pub use options::OperationOptions;
