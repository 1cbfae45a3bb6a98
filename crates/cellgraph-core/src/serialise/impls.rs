//! Bundled serialisers.

use crate::error::{CoreError, CoreResult};
use crate::types::Value;

use super::vint::{read_vlong, write_vlong};
use super::Serialiser;

/// Serialises [`Value::String`] as raw UTF-8 bytes.
///
/// Empty bytes deserialise to the empty string, so a null string and `""`
/// share an encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawStringSerialiser;

impl Serialiser for RawStringSerialiser {
    fn serialise(&self, value: &Value) -> CoreResult<Vec<u8>> {
        match value {
            Value::String(s) => Ok(s.as_bytes().to_vec()),
            other => Err(CoreError::type_mismatch("string", other.type_name())),
        }
    }

    fn deserialise(&self, bytes: &[u8]) -> CoreResult<Value> {
        String::from_utf8(bytes.to_vec())
            .map(Value::String)
            .map_err(|e| CoreError::Deserialise(format!("invalid UTF-8: {e}")))
    }

    fn deserialise_empty_bytes(&self) -> CoreResult<Option<Value>> {
        Ok(Some(Value::String(String::new())))
    }
}

/// Serialises [`Value::Int`] with the compact variable-length encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactIntSerialiser;

impl Serialiser for CompactIntSerialiser {
    fn serialise(&self, value: &Value) -> CoreResult<Vec<u8>> {
        match value {
            Value::Int(i) => {
                let mut buf = Vec::with_capacity(9);
                write_vlong(*i, &mut buf);
                Ok(buf)
            }
            other => Err(CoreError::type_mismatch("int", other.type_name())),
        }
    }

    fn deserialise(&self, bytes: &[u8]) -> CoreResult<Value> {
        let (value, consumed) = read_vlong(bytes)?;
        if consumed != bytes.len() {
            return Err(CoreError::Deserialise(format!(
                "trailing bytes after compact integer: {} of {} consumed",
                consumed,
                bytes.len()
            )));
        }
        Ok(Value::Int(value))
    }
}

/// Serialises [`Value::Bytes`] verbatim.
///
/// Empty bytes deserialise to an empty buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBytesSerialiser;

impl Serialiser for RawBytesSerialiser {
    fn serialise(&self, value: &Value) -> CoreResult<Vec<u8>> {
        match value {
            Value::Bytes(b) => Ok(b.clone()),
            other => Err(CoreError::type_mismatch("bytes", other.type_name())),
        }
    }

    fn deserialise(&self, bytes: &[u8]) -> CoreResult<Value> {
        Ok(Value::Bytes(bytes.to_vec()))
    }

    fn deserialise_empty_bytes(&self) -> CoreResult<Option<Value>> {
        Ok(Some(Value::Bytes(Vec::new())))
    }
}

/// Serialises [`Value::Bool`] as a single `0x00`/`0x01` byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSerialiser;

impl Serialiser for BooleanSerialiser {
    fn serialise(&self, value: &Value) -> CoreResult<Vec<u8>> {
        match value {
            Value::Bool(b) => Ok(vec![u8::from(*b)]),
            other => Err(CoreError::type_mismatch("bool", other.type_name())),
        }
    }

    fn deserialise(&self, bytes: &[u8]) -> CoreResult<Value> {
        match bytes {
            [0] => Ok(Value::Bool(false)),
            [1] => Ok(Value::Bool(true)),
            _ => Err(CoreError::Deserialise(format!(
                "expected a single 0x00/0x01 byte for bool, got {} bytes",
                bytes.len()
            ))),
        }
    }
}
