//! Property-based tests for serialisation round-trips.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use crate::serialise::vint::{read_vlong, vint_size, write_vlong};
use crate::serialise::{
    BooleanSerialiser, CompactIntSerialiser, RawBytesSerialiser, RawStringSerialiser, Serialiser,
};
use crate::types::Value;

proptest! {
    #[test]
    fn vlong_roundtrip(value in any::<i64>()) {
        let mut buf = Vec::new();
        write_vlong(value, &mut buf);
        let (decoded, consumed) = read_vlong(&buf).expect("decoding should succeed");
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(consumed, buf.len());
    }

    #[test]
    fn vlong_width_recoverable_from_first_byte(value in any::<i64>()) {
        let mut buf = Vec::new();
        write_vlong(value, &mut buf);
        prop_assert_eq!(vint_size(buf[0]), buf.len());
    }

    /// A decoder fed arbitrary bytes must error or succeed, never panic.
    #[test]
    fn vlong_arbitrary_bytes_dont_crash(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let _ = read_vlong(&bytes);
    }

    #[test]
    fn string_serialiser_roundtrip(s in ".*") {
        let ser = RawStringSerialiser;
        let bytes = ser.serialise(&Value::String(s.clone())).expect("serialise");
        let decoded = ser.deserialise(&bytes).expect("deserialise");
        prop_assert_eq!(decoded, Value::String(s));
    }

    #[test]
    fn int_serialiser_roundtrip(i in any::<i64>()) {
        let ser = CompactIntSerialiser;
        let bytes = ser.serialise(&Value::Int(i)).expect("serialise");
        let decoded = ser.deserialise(&bytes).expect("deserialise");
        prop_assert_eq!(decoded, Value::Int(i));
    }

    #[test]
    fn bytes_serialiser_roundtrip(b in prop::collection::vec(any::<u8>(), 0..200)) {
        let ser = RawBytesSerialiser;
        let bytes = ser.serialise(&Value::Bytes(b.clone())).expect("serialise");
        let decoded = ser.deserialise(&bytes).expect("deserialise");
        prop_assert_eq!(decoded, Value::Bytes(b));
    }

    #[test]
    fn bool_serialiser_arbitrary_bytes_dont_crash(bytes in prop::collection::vec(any::<u8>(), 0..4)) {
        let _ = BooleanSerialiser.deserialise(&bytes);
    }
}
