//! Compact variable-length integer codec.
//!
//! This module encodes an `i64` in one to nine bytes. Values between -112
//! and 127 fit in a single byte; anything else is written as a marker byte
//! followed by the value's magnitude in big-endian order. The marker byte
//! encodes both the sign and the number of magnitude bytes:
//!
//! - `-113..=-120`: positive value, `-(marker + 112)` magnitude bytes follow
//! - `-121..=-128`: negative value (stored bit-complemented),
//!   `-(marker + 120)` magnitude bytes follow
//!
//! The total width of an encoded integer is recoverable from its first byte
//! alone ([`vint_size`]), which is what lets the cell codec walk
//! length-prefixed records without decoding their payloads.

use crate::error::{CoreError, CoreResult};

/// Append the compact encoding of `value` to `out`.
pub fn write_vlong(value: i64, out: &mut Vec<u8>) {
    if (-112..=127).contains(&value) {
        out.push(value as u8);
        return;
    }
    let mut marker: i32 = -112;
    let mut magnitude = value;
    if magnitude < 0 {
        magnitude = !magnitude;
        marker = -120;
    }
    let mut tmp = magnitude;
    while tmp != 0 {
        tmp >>= 8;
        marker -= 1;
    }
    out.push(marker as u8);
    let width = if marker < -120 { -(marker + 120) } else { -(marker + 112) };
    for idx in (1..=width).rev() {
        let shift = (idx - 1) * 8;
        out.push((magnitude >> shift) as u8);
    }
}

/// Total encoded width in bytes, given the first byte of an encoding.
#[inline]
#[must_use]
pub fn vint_size(first: u8) -> usize {
    let first = first as i8;
    if first >= -112 {
        1
    } else if first < -120 {
        (-119 - i32::from(first)) as usize
    } else {
        (-111 - i32::from(first)) as usize
    }
}

/// Whether the first byte of an encoding marks a negative value.
#[inline]
#[must_use]
pub fn is_negative_vint(first: u8) -> bool {
    let first = first as i8;
    first < -120 || (-112..0).contains(&first)
}

/// Decode a compact integer from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// Returns [`CoreError::Deserialise`] if `bytes` is empty or shorter than
/// the width announced by its first byte.
pub fn read_vlong(bytes: &[u8]) -> CoreResult<(i64, usize)> {
    let first = *bytes
        .first()
        .ok_or_else(|| CoreError::Deserialise("empty input for compact integer".to_owned()))?;
    let size = vint_size(first);
    if size == 1 {
        return Ok((i64::from(first as i8), 1));
    }
    if bytes.len() < size {
        return Err(CoreError::Deserialise(format!(
            "truncated compact integer: need {size} bytes, have {}",
            bytes.len()
        )));
    }
    let mut magnitude: i64 = 0;
    for &b in &bytes[1..size] {
        magnitude = (magnitude << 8) | i64::from(b);
    }
    let value = if is_negative_vint(first) { !magnitude } else { magnitude };
    Ok((value, size))
}
