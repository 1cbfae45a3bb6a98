//! Whole-element encode and decode.
//!
//! [`ElementCodec`] composes the row key, qualifier, value, visibility, and
//! timestamp codecs into a single translation between graph elements and
//! wide-column cells. The codec is a pure function of its inputs plus an
//! immutable [`Schema`] reference: it holds no other state and may be shared
//! freely between threads.
//!
//! # Example
//!
//! ```
//! use cellgraph_codec::ElementCodec;
//! use cellgraph_codec::options::OperationOptions;
//! use cellgraph_core::schema::{ElementDef, Schema};
//! use cellgraph_core::serialise::RawStringSerialiser;
//! use cellgraph_core::{Element, Entity};
//!
//! let schema = Schema::new(RawStringSerialiser).with_element("person", ElementDef::new());
//! let codec = ElementCodec::new(&schema);
//!
//! let element: Element = Entity::new("person", "alice").into();
//! let encoded = codec.encode(&element).unwrap();
//! let cells = encoded.cells();
//! assert_eq!(cells.len(), 1);
//!
//! let decoded = codec.decode_cell(&cells[0], &OperationOptions::new()).unwrap();
//! assert_eq!(decoded, element);
//! ```

use serde::{Deserialize, Serialize};

use cellgraph_core::schema::{ElementDef, Schema};
use cellgraph_core::{Edge, Element, Entity, Properties, Value};

use crate::error::{CodecError, CodecResult};
use crate::escape::escape;
use crate::key::{self, RowKeys};
use crate::options::OperationOptions;

/// One cell of a wide-column store, as read back from a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The row key.
    pub row: Vec<u8>,
    /// The column family (UTF-8 group name).
    pub family: Vec<u8>,
    /// The column qualifier (group-by property records).
    pub qualifier: Vec<u8>,
    /// The column visibility.
    pub visibility: Vec<u8>,
    /// The cell timestamp.
    pub timestamp: i64,
    /// The cell value (remaining property records).
    pub value: Vec<u8>,
}

/// The cell-level encoding of one element.
///
/// Shared columns are stored once; [`EncodedElement::cells`] expands the
/// encoding into one [`Cell`] per row key, which is what a store would
/// write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedElement {
    /// The one or two row keys.
    pub row_keys: RowKeys,
    /// The column family (UTF-8 group name).
    pub family: Vec<u8>,
    /// The column qualifier.
    pub qualifier: Vec<u8>,
    /// The column visibility.
    pub visibility: Vec<u8>,
    /// The cell timestamp.
    pub timestamp: i64,
    /// The cell value.
    pub value: Vec<u8>,
}

impl EncodedElement {
    /// Expand into one [`Cell`] per row key.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        self.row_keys
            .iter()
            .map(|row| Cell {
                row: row.to_vec(),
                family: self.family.clone(),
                qualifier: self.qualifier.clone(),
                visibility: self.visibility.clone(),
                timestamp: self.timestamp,
                value: self.value.clone(),
            })
            .collect()
    }
}

/// Translates between graph elements and wide-column cells.
///
/// All byte layouts produced here are part of the persistent format; see the
/// module documentation of [`key`](crate::key) and
/// [`escape`](crate::escape).
#[derive(Debug, Clone, Copy)]
pub struct ElementCodec<'s> {
    schema: &'s Schema,
}

impl<'s> ElementCodec<'s> {
    /// Create a codec over the given schema.
    #[must_use]
    pub const fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// The schema this codec encodes against.
    #[inline]
    #[must_use]
    pub const fn schema(&self) -> &'s Schema {
        self.schema
    }

    pub(crate) fn element_def(&self, group: &str) -> CodecResult<&'s ElementDef> {
        self.schema.element(group).ok_or_else(|| CodecError::UnknownGroup(group.to_owned()))
    }

    /// Serialise and escape a vertex identifier.
    ///
    /// The returned bytes are in the form row keys and the scan-range
    /// helpers in [`key`](crate::key) consume.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SerialiseVertex`] if the vertex serialiser
    /// rejects the value.
    pub fn serialise_vertex(&self, vertex: &Value) -> CodecResult<Vec<u8>> {
        let bytes =
            self.schema.vertex_serialiser().serialise(vertex).map_err(CodecError::SerialiseVertex)?;
        Ok(escape(&bytes))
    }

    /// The row key of an entity.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SerialiseVertex`] if the vertex does not
    /// serialise.
    pub fn entity_row_key(&self, entity: &Entity) -> CodecResult<Vec<u8>> {
        Ok(key::entity_row_key(&self.serialise_vertex(&entity.vertex)?))
    }

    /// The row key pair of an edge. Self-loops produce a single key.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SerialiseVertex`] if an endpoint does not
    /// serialise.
    pub fn edge_row_keys(&self, edge: &Edge) -> CodecResult<RowKeys> {
        let source = self.serialise_vertex(&edge.source)?;
        let destination = self.serialise_vertex(&edge.destination)?;
        Ok(key::edge_row_keys(&source, &destination, edge.directed))
    }

    /// The row key(s) of any element.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SerialiseVertex`] if an identifier does not
    /// serialise.
    pub fn row_keys(&self, element: &Element) -> CodecResult<RowKeys> {
        match element {
            Element::Entity(entity) => Ok(RowKeys::single(self.entity_row_key(entity)?)),
            Element::Edge(edge) => self.edge_row_keys(edge),
        }
    }

    /// Recover the group name from column family bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BadGroupEncoding`] if the bytes are not valid
    /// UTF-8.
    pub fn group_from_family(&self, family: &[u8]) -> CodecResult<String> {
        Ok(String::from_utf8(family.to_vec())?)
    }

    /// Encode an element into its cell-level representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the group is unknown to the schema or any value
    /// fails to serialise. Nothing is emitted on failure.
    pub fn encode(&self, element: &Element) -> CodecResult<EncodedElement> {
        let group = element.group();
        let properties = element.properties();
        Ok(EncodedElement {
            row_keys: self.row_keys(element)?,
            family: group.as_bytes().to_vec(),
            qualifier: self.qualifier_bytes(group, properties)?,
            visibility: self.visibility_bytes(group, properties)?,
            timestamp: self.build_timestamp(properties)?,
            value: self.value_bytes(group, properties)?,
        })
    }

    /// Reconstruct an element from a cell.
    ///
    /// Properties are merged from the qualifier, the value, and the
    /// timestamp, in that order. The visibility column is not merged; use
    /// [`properties_from_visibility`](Self::properties_from_visibility) to
    /// read it back separately.
    ///
    /// # Errors
    ///
    /// Returns an error on an unknown group, an undecodable row key, or a
    /// malformed property block. No partially-filled element is returned.
    pub fn decode_cell(&self, cell: &Cell, options: &OperationOptions) -> CodecResult<Element> {
        if key::is_entity_row(&cell.row) {
            Ok(Element::Entity(self.decode_entity(cell)?))
        } else {
            Ok(Element::Edge(self.decode_edge(cell, options)?))
        }
    }

    fn decode_entity(&self, cell: &Cell) -> CodecResult<Entity> {
        let group = self.group_from_family(&cell.family)?;
        let vertex_bytes = key::parse_entity_row(&cell.row)?;
        let vertex = self
            .schema
            .vertex_serialiser()
            .deserialise(&vertex_bytes)
            .map_err(CodecError::DeserialiseVertex)?;
        let properties = self.decoded_properties(&group, cell)?;
        let mut entity = Entity::new(group, vertex);
        entity.properties = properties;
        Ok(entity)
    }

    fn decode_edge(&self, cell: &Cell, options: &OperationOptions) -> CodecResult<Edge> {
        let group = self.group_from_family(&cell.family)?;
        let parsed = key::parse_edge_row(&cell.row, options)?;
        let vertex_serialiser = self.schema.vertex_serialiser();
        let source =
            vertex_serialiser.deserialise(&parsed.source).map_err(CodecError::DeserialiseVertex)?;
        let destination = vertex_serialiser
            .deserialise(&parsed.destination)
            .map_err(CodecError::DeserialiseVertex)?;
        let properties = self.decoded_properties(&group, cell)?;
        let mut edge = Edge::new(group, source, destination, parsed.directed);
        edge.properties = properties;
        Ok(edge)
    }

    fn decoded_properties(&self, group: &str, cell: &Cell) -> CodecResult<Properties> {
        let mut properties = self.properties_from_qualifier(group, &cell.qualifier)?;
        properties.merge(self.properties_from_value(group, &cell.value)?);
        properties.merge(self.properties_from_timestamp(group, cell.timestamp)?);
        Ok(properties)
    }
}
