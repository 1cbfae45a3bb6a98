//! Length-prefixed property blocks: the cell value and column qualifier.
//!
//! Both columns hold a sequence of records, one per property, each framed as
//! `vint(len) ‖ bytes[len]`. The qualifier holds the group's group-by
//! properties; the value holds every other declared property except the
//! designated timestamp and visibility properties, which travel in the cell
//! timestamp and visibility column respectively. Record order is the
//! schema's declaration order on both sides; no property names appear on the
//! wire.
//!
//! A zero-length record decodes through the serialiser's
//! `deserialise_empty_bytes`; a property declared without a serialiser
//! contributes an empty record whose bytes are consumed and discarded on
//! read, keeping the cursor aligned with the declared order.

use cellgraph_core::schema::{ElementDef, TypeDef};
use cellgraph_core::serialise::vint::{read_vlong, write_vlong};
use cellgraph_core::{Properties, Value};

use crate::cell::ElementCodec;
use crate::error::{CodecError, CodecResult};

impl ElementCodec<'_> {
    /// Encode the cell value block: every declared property that is neither
    /// group-by nor the designated timestamp property, in declared order.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownGroup`] or a serialise failure carrying
    /// the offending property name.
    pub fn value_bytes(&self, group: &str, properties: &Properties) -> CodecResult<Vec<u8>> {
        let def = self.element_def(group)?;
        let mut out = Vec::new();
        for name in def.properties() {
            if self.is_stored_in_value(def, name) {
                self.write_property_record(&mut out, group, def, name, properties)?;
            }
        }
        Ok(out)
    }

    /// Decode the cell value block back into properties.
    ///
    /// Decoding stops at the end of the input even if declared properties
    /// remain, so a truncated block yields the properties it covers.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownGroup`], [`CodecError::BadLengthPrefix`]
    /// on a malformed record frame, or a deserialise failure carrying the
    /// offending property name.
    pub fn properties_from_value(&self, group: &str, bytes: &[u8]) -> CodecResult<Properties> {
        let def = self.element_def(group)?;
        let names: Vec<&String> =
            def.properties().iter().filter(|name| self.is_stored_in_value(def, name)).collect();
        self.decode_block(group, def, &names, bytes)
    }

    /// Encode the column qualifier block: the group-by properties, in
    /// declared order. Every group-by property contributes a record.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownGroup`] or a serialise failure carrying
    /// the offending property name.
    pub fn qualifier_bytes(&self, group: &str, properties: &Properties) -> CodecResult<Vec<u8>> {
        let def = self.element_def(group)?;
        let mut out = Vec::new();
        for name in def.group_by() {
            self.write_property_record(&mut out, group, def, name, properties)?;
        }
        Ok(out)
    }

    /// Decode the column qualifier block back into properties.
    ///
    /// # Errors
    ///
    /// Same failure modes as
    /// [`properties_from_value`](Self::properties_from_value).
    pub fn properties_from_qualifier(&self, group: &str, bytes: &[u8]) -> CodecResult<Properties> {
        let def = self.element_def(group)?;
        let names: Vec<&String> = def.group_by().iter().collect();
        self.decode_block(group, def, &names, bytes)
    }

    /// Return the prefix of a qualifier block covering its first `count`
    /// records.
    ///
    /// `count == 0` or an empty block yields empty bytes; a `count` equal to
    /// the group's full declared property count returns the input unchanged.
    /// Used by filter iterators that compare elements on a leading subset of
    /// their group-by properties.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownGroup`] or
    /// [`CodecError::BadLengthPrefix`] if a record frame is malformed.
    pub fn first_n_qualifier_bytes(
        &self,
        group: &str,
        bytes: &[u8],
        count: usize,
    ) -> CodecResult<Vec<u8>> {
        if count == 0 || bytes.is_empty() {
            return Ok(Vec::new());
        }
        let def = self.element_def(group)?;
        if count == def.properties().len() {
            return Ok(bytes.to_vec());
        }
        let mut cursor = 0usize;
        let mut records = 0usize;
        while records < count && cursor < bytes.len() {
            let (len, consumed) = read_record_len(bytes, cursor)?;
            cursor += consumed;
            if len > 0 {
                cursor = cursor
                    .checked_add(len)
                    .filter(|end| *end <= bytes.len())
                    .ok_or(CodecError::BadLengthPrefix { position: cursor })?;
            }
            records += 1;
        }
        Ok(bytes[..cursor].to_vec())
    }

    fn is_stored_in_value(&self, def: &ElementDef, name: &str) -> bool {
        !def.is_group_by(name)
            && self.schema().timestamp_property() != Some(name)
            && self.schema().visibility_property() != Some(name)
    }

    fn write_property_record(
        &self,
        out: &mut Vec<u8>,
        group: &str,
        def: &ElementDef,
        name: &str,
        properties: &Properties,
    ) -> CodecResult<()> {
        let serialiser = def.property_type(name).and_then(TypeDef::serialiser);
        let bytes = match serialiser {
            None => Vec::new(),
            Some(serialiser) => match properties.get(name) {
                Some(value) if !value.is_null() => {
                    serialiser.serialise(value).map_err(|source| {
                        CodecError::SerialiseProperty {
                            group: group.to_owned(),
                            property: name.to_owned(),
                            source,
                        }
                    })?
                }
                _ => serialiser.serialise_null(),
            },
        };
        write_vlong(bytes.len() as i64, out);
        out.extend_from_slice(&bytes);
        Ok(())
    }

    fn decode_block(
        &self,
        group: &str,
        def: &ElementDef,
        names: &[&String],
        bytes: &[u8],
    ) -> CodecResult<Properties> {
        let mut properties = Properties::new();
        if bytes.is_empty() {
            return Ok(properties);
        }
        let mut cursor = 0usize;
        for &name in names {
            if cursor >= bytes.len() {
                break;
            }
            let (len, consumed) = read_record_len(bytes, cursor)?;
            cursor += consumed;
            let serialiser = def.property_type(name).and_then(TypeDef::serialiser);
            if len > 0 {
                let end = cursor
                    .checked_add(len)
                    .filter(|end| *end <= bytes.len())
                    .ok_or(CodecError::BadLengthPrefix { position: cursor })?;
                if let Some(serialiser) = serialiser {
                    let value = serialiser.deserialise(&bytes[cursor..end]).map_err(|source| {
                        CodecError::DeserialiseProperty {
                            group: group.to_owned(),
                            property: name.clone(),
                            source,
                        }
                    })?;
                    properties.insert(name.clone(), value);
                }
                cursor = end;
            } else if let Some(serialiser) = serialiser {
                let value = serialiser
                    .deserialise_empty_bytes()
                    .map_err(|source| CodecError::DeserialiseProperty {
                        group: group.to_owned(),
                        property: name.clone(),
                        source,
                    })?
                    .unwrap_or(Value::Null);
                properties.insert(name.clone(), value);
            }
        }
        Ok(properties)
    }
}

fn read_record_len(bytes: &[u8], cursor: usize) -> CodecResult<(usize, usize)> {
    let (len, consumed) =
        read_vlong(&bytes[cursor..]).map_err(|_| CodecError::BadLengthPrefix { position: cursor })?;
    let len =
        usize::try_from(len).map_err(|_| CodecError::BadLengthPrefix { position: cursor })?;
    Ok((len, consumed))
}
