//! The cell timestamp codec.
//!
//! A schema may designate one property whose integer value becomes the cell
//! timestamp. Without a designated property, or when an element does not
//! carry it, the current wall-clock time in milliseconds is used.

use std::time::{SystemTime, UNIX_EPOCH};

use cellgraph_core::{Properties, Value};

use crate::cell::ElementCodec;
use crate::error::{CodecError, CodecResult};

pub(crate) fn current_time_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
}

impl ElementCodec<'_> {
    /// The cell timestamp for an element with the given properties.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BadTimestamp`] if the designated property is
    /// present but not an integer.
    pub fn build_timestamp(&self, properties: &Properties) -> CodecResult<i64> {
        let Some(name) = self.schema().timestamp_property() else {
            return Ok(current_time_millis());
        };
        match properties.get(name) {
            None | Some(Value::Null) => Ok(current_time_millis()),
            Some(Value::Int(timestamp)) => Ok(*timestamp),
            Some(_) => Err(CodecError::BadTimestamp { property: name.to_owned() }),
        }
    }

    /// The properties carried by a cell timestamp: a one-entry map when the
    /// group declares the designated timestamp property, empty otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownGroup`] if the group is not in the
    /// schema.
    pub fn properties_from_timestamp(
        &self,
        group: &str,
        timestamp: i64,
    ) -> CodecResult<Properties> {
        let def = self.element_def(group)?;
        let mut properties = Properties::new();
        if let Some(name) = self.schema().timestamp_property() {
            if def.contains_property(name) {
                properties.insert(name, timestamp);
            }
        }
        Ok(properties)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cellgraph_core::schema::{ElementDef, Schema, TypeDef};
    use cellgraph_core::serialise::{CompactIntSerialiser, RawStringSerialiser};
    use cellgraph_core::{Properties, Value};

    use crate::cell::ElementCodec;
    use crate::error::CodecError;

    fn timestamp_schema() -> Schema {
        Schema::new(RawStringSerialiser)
            .with_element(
                "g",
                ElementDef::new().with_property("ts", TypeDef::new(CompactIntSerialiser)),
            )
            .with_element("bare", ElementDef::new())
            .with_timestamp_property("ts")
    }

    #[test]
    fn designated_property_becomes_timestamp() {
        let schema = timestamp_schema();
        let codec = ElementCodec::new(&schema);
        let mut properties = Properties::new();
        properties.insert("ts", 1000i64);
        assert_eq!(codec.build_timestamp(&properties).unwrap(), 1000);
    }

    #[test]
    fn missing_property_falls_back_to_wall_clock() {
        let schema = timestamp_schema();
        let codec = ElementCodec::new(&schema);
        let timestamp = codec.build_timestamp(&Properties::new()).unwrap();
        assert!(timestamp > 0);
    }

    #[test]
    fn non_integer_timestamp_is_rejected() {
        let schema = timestamp_schema();
        let codec = ElementCodec::new(&schema);
        let mut properties = Properties::new();
        properties.insert("ts", "noon");
        let err = codec.build_timestamp(&properties).unwrap_err();
        assert!(matches!(err, CodecError::BadTimestamp { property } if property == "ts"));
    }

    #[test]
    fn timestamp_projects_back_when_declared() {
        let schema = timestamp_schema();
        let codec = ElementCodec::new(&schema);
        let properties = codec.properties_from_timestamp("g", 1000).unwrap();
        assert_eq!(properties.get("ts"), Some(&Value::Int(1000)));
        // A group that does not declare the property gets nothing back.
        let properties = codec.properties_from_timestamp("bare", 1000).unwrap();
        assert!(properties.is_empty());
    }
}
