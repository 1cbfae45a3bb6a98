//! Delimiter-safe byte escaping.
//!
//! Row keys separate their fields with a reserved [`DELIMITER`] byte, so the
//! escaped form of user bytes must never contain it. The scheme is the
//! conventional two-byte escape:
//!
//! - `0x00` (the delimiter) becomes `{0x01, 0x01}`
//! - `0x01` (the escape byte) becomes `{0x01, 0x02}`
//! - every other byte is copied unchanged
//!
//! The result is prefix-safe: an escaped buffer followed by a delimiter is
//! unambiguously "the buffer, then the delimiter", because the delimiter can
//! only ever appear as a field separator. These byte choices are part of the
//! on-disk format and must not change.

use crate::error::{CodecError, CodecResult};

/// Reserved byte separating logical fields inside a row key.
pub const DELIMITER: u8 = 0x00;

/// The lexicographically least byte greater than [`DELIMITER`], used as an
/// exclusive upper bound when building scan ranges above an escaped prefix.
pub const DELIMITER_PLUS_ONE: u8 = 0x01;

/// Lead byte of every two-byte escape sequence.
pub const ESCAPE: u8 = 0x01;

const ESCAPED_DELIMITER: u8 = 0x01;
const ESCAPED_ESCAPE: u8 = 0x02;

/// Escape `bytes` so the result contains no [`DELIMITER`] byte.
#[must_use]
pub fn escape(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            DELIMITER => {
                out.push(ESCAPE);
                out.push(ESCAPED_DELIMITER);
            }
            ESCAPE => {
                out.push(ESCAPE);
                out.push(ESCAPED_ESCAPE);
            }
            other => out.push(other),
        }
    }
    out
}

/// Invert [`escape`].
///
/// # Errors
///
/// Returns [`CodecError::MalformedEscape`] if the input ends with a dangling
/// escape byte or an escape byte is followed by an unknown second byte.
pub fn unescape(bytes: &[u8]) -> CodecResult<Vec<u8>> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == ESCAPE {
            match bytes.get(i + 1) {
                Some(&ESCAPED_DELIMITER) => out.push(DELIMITER),
                Some(&ESCAPED_ESCAPE) => out.push(ESCAPE),
                _ => return Err(CodecError::MalformedEscape { position: i }),
            }
            i += 2;
        } else {
            out.push(b);
            i += 1;
        }
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn escape_bytes_are_pinned() {
        // Part of the persistent format: do not change.
        assert_eq!(escape(&[0x00]), [0x01, 0x01]);
        assert_eq!(escape(&[0x01]), [0x01, 0x02]);
        assert_eq!(escape(&[0x02]), [0x02]);
        assert_eq!(escape(&[0xff]), [0xff]);
    }

    #[test]
    fn escaped_output_contains_no_delimiter() {
        let input: Vec<u8> = (0u8..=255).collect();
        let escaped = escape(&input);
        assert!(!escaped.contains(&DELIMITER));
    }

    #[test]
    fn roundtrip() {
        for input in [
            Vec::new(),
            vec![0x00],
            vec![0x01],
            vec![0x00, 0x01, 0x02],
            vec![0x61, 0x00, 0x62],
            (0u8..=255).collect::<Vec<u8>>(),
        ] {
            assert_eq!(unescape(&escape(&input)).unwrap(), input);
        }
    }

    #[test]
    fn unescape_rejects_dangling_escape() {
        let err = unescape(&[0x61, 0x01]).unwrap_err();
        assert!(matches!(err, CodecError::MalformedEscape { position: 1 }));
    }

    #[test]
    fn unescape_rejects_unknown_sequence() {
        let err = unescape(&[0x01, 0x03]).unwrap_err();
        assert!(matches!(err, CodecError::MalformedEscape { position: 0 }));
    }

    #[test]
    fn unescape_passes_plain_bytes_through() {
        assert_eq!(unescape(&[0x61, 0x62]).unwrap(), [0x61, 0x62]);
    }
}
