//! Value serialisation for cellgraph.
//!
//! This module provides the [`Serialiser`] trait — the seam through which the
//! cell codec turns individual property and vertex values into bytes — plus a
//! small family of concrete serialisers and the compact variable-length
//! integer codec ([`vint`]) used to prefix property records with their
//! length.
//!
//! # Null and empty bytes
//!
//! Serialisers distinguish two degenerate cases:
//!
//! - [`Serialiser::serialise_null`] produces the byte representation of an
//!   absent value. All bundled serialisers return empty bytes.
//! - [`Serialiser::deserialise_empty_bytes`] is the inverse, invoked when a
//!   zero-length record is read back. A serialiser may map empty bytes to a
//!   designated empty value (the string serialiser yields `""`) or to
//!   `None`, meaning the value is absent.
//!
//! A serialiser whose values can legitimately serialise to zero bytes cannot
//! distinguish those values from null; a serialiser that needs the
//! distinction must reserve a sentinel encoding of its own.

mod impls;
pub mod vint;

#[cfg(test)]
mod proptest_tests;

pub use impls::{BooleanSerialiser, CompactIntSerialiser, RawBytesSerialiser, RawStringSerialiser};

use std::fmt;

use crate::error::CoreResult;
use crate::types::Value;

/// Converts property and vertex values to and from bytes.
///
/// Implementations must be pure: the same value always serialises to the
/// same bytes, and `deserialise(serialise(v)) == v` for every value the
/// serialiser accepts.
pub trait Serialiser: fmt::Debug + Send + Sync {
    /// Serialise a value to bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the value's type is not handled by this
    /// serialiser.
    fn serialise(&self, value: &Value) -> CoreResult<Vec<u8>>;

    /// Deserialise a value from bytes.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed input.
    fn deserialise(&self, bytes: &[u8]) -> CoreResult<Value>;

    /// The byte representation of an absent value.
    fn serialise_null(&self) -> Vec<u8> {
        Vec::new()
    }

    /// The value represented by a zero-length record, or `None` if a
    /// zero-length record means the value is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if this serialiser cannot accept empty input at all.
    fn deserialise_empty_bytes(&self) -> CoreResult<Option<Value>> {
        Ok(None)
    }
}
