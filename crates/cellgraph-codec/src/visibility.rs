//! The column visibility codec.
//!
//! A schema may designate one property whose serialised value is stored in
//! the cell's visibility column rather than in the value block. When no
//! visibility property is designated, or the group defines no serialiser for
//! it, the column is empty in both directions.

use cellgraph_core::schema::TypeDef;
use cellgraph_core::Properties;

use crate::cell::ElementCodec;
use crate::error::{CodecError, CodecResult};

impl ElementCodec<'_> {
    /// Encode the designated visibility property to column visibility bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownGroup`] or a serialise failure for the
    /// visibility property.
    pub fn visibility_bytes(&self, group: &str, properties: &Properties) -> CodecResult<Vec<u8>> {
        let def = self.element_def(group)?;
        let Some(name) = self.schema().visibility_property() else {
            return Ok(Vec::new());
        };
        let Some(serialiser) = def.property_type(name).and_then(TypeDef::serialiser) else {
            return Ok(Vec::new());
        };
        match properties.get(name) {
            Some(value) if !value.is_null() => {
                serialiser.serialise(value).map_err(|source| CodecError::SerialiseProperty {
                    group: group.to_owned(),
                    property: name.to_owned(),
                    source,
                })
            }
            _ => Ok(serialiser.serialise_null()),
        }
    }

    /// Decode column visibility bytes back into a (possibly empty) property
    /// map.
    ///
    /// Empty input goes through the serialiser's empty-bytes convention and
    /// contributes a property only when that yields a value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownGroup`] or a deserialise failure for the
    /// visibility property.
    pub fn properties_from_visibility(
        &self,
        group: &str,
        bytes: &[u8],
    ) -> CodecResult<Properties> {
        let def = self.element_def(group)?;
        let mut properties = Properties::new();
        let Some(name) = self.schema().visibility_property() else {
            return Ok(properties);
        };
        let Some(serialiser) = def.property_type(name).and_then(TypeDef::serialiser) else {
            return Ok(properties);
        };
        if bytes.is_empty() {
            let empty = serialiser.deserialise_empty_bytes().map_err(|source| {
                CodecError::DeserialiseProperty {
                    group: group.to_owned(),
                    property: name.to_owned(),
                    source,
                }
            })?;
            if let Some(value) = empty {
                properties.insert(name, value);
            }
        } else {
            let value = serialiser.deserialise(bytes).map_err(|source| {
                CodecError::DeserialiseProperty {
                    group: group.to_owned(),
                    property: name.to_owned(),
                    source,
                }
            })?;
            properties.insert(name, value);
        }
        Ok(properties)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cellgraph_core::schema::{ElementDef, Schema, TypeDef};
    use cellgraph_core::serialise::RawStringSerialiser;
    use cellgraph_core::{Properties, Value};

    use crate::cell::ElementCodec;

    fn visibility_schema() -> Schema {
        Schema::new(RawStringSerialiser)
            .with_element(
                "g",
                ElementDef::new().with_property("vis", TypeDef::new(RawStringSerialiser)),
            )
            .with_visibility_property("vis")
    }

    #[test]
    fn visibility_roundtrip() {
        let schema = visibility_schema();
        let codec = ElementCodec::new(&schema);
        let mut properties = Properties::new();
        properties.insert("vis", "public");
        let bytes = codec.visibility_bytes("g", &properties).unwrap();
        assert_eq!(bytes, b"public");
        let decoded = codec.properties_from_visibility("g", &bytes).unwrap();
        assert_eq!(decoded.get("vis"), Some(&Value::from("public")));
    }

    #[test]
    fn absent_value_serialises_null() {
        let schema = visibility_schema();
        let codec = ElementCodec::new(&schema);
        let bytes = codec.visibility_bytes("g", &Properties::new()).unwrap();
        assert!(bytes.is_empty());
        // The string serialiser's empty-bytes convention is the empty string.
        let decoded = codec.properties_from_visibility("g", &bytes).unwrap();
        assert_eq!(decoded.get("vis"), Some(&Value::String(String::new())));
    }

    #[test]
    fn no_designated_property_means_empty_both_ways() {
        let schema = Schema::new(RawStringSerialiser).with_element("g", ElementDef::new());
        let codec = ElementCodec::new(&schema);
        let mut properties = Properties::new();
        properties.insert("vis", "secret");
        assert!(codec.visibility_bytes("g", &properties).unwrap().is_empty());
        assert!(codec.properties_from_visibility("g", b"secret").unwrap().is_empty());
    }

    #[test]
    fn undeclared_visibility_property_means_empty() {
        // Designated process-wide, but this group does not declare it.
        let schema = Schema::new(RawStringSerialiser)
            .with_element("g", ElementDef::new())
            .with_visibility_property("vis");
        let codec = ElementCodec::new(&schema);
        let mut properties = Properties::new();
        properties.insert("vis", "secret");
        assert!(codec.visibility_bytes("g", &properties).unwrap().is_empty());
        assert!(codec.properties_from_visibility("g", b"secret").unwrap().is_empty());
    }
}
