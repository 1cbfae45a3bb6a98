//! Error types for the cell codec.

use cellgraph_core::CoreError;
use thiserror::Error;

/// Errors that can occur while encoding or decoding cells.
///
/// Every operation either returns a complete result or one of these errors;
/// nothing is partially written on failure.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The schema has no definition for the requested group.
    #[error("no element definition found for group {0:?}")]
    UnknownGroup(String),

    /// A property value could not be serialised.
    #[error("failed to serialise property {property:?} in group {group:?}: {source}")]
    SerialiseProperty {
        /// The element group being encoded.
        group: String,
        /// The property that failed.
        property: String,
        /// The underlying serialiser error.
        #[source]
        source: CoreError,
    },

    /// A property record could not be deserialised.
    #[error("failed to deserialise property {property:?} in group {group:?}: {source}")]
    DeserialiseProperty {
        /// The element group being decoded.
        group: String,
        /// The property that failed.
        property: String,
        /// The underlying serialiser error.
        #[source]
        source: CoreError,
    },

    /// A vertex identifier could not be serialised.
    #[error("failed to serialise vertex: {0}")]
    SerialiseVertex(#[source] CoreError),

    /// A vertex identifier could not be deserialised.
    #[error("failed to deserialise vertex: {0}")]
    DeserialiseVertex(#[source] CoreError),

    /// An escape sequence was truncated or used an unknown second byte.
    #[error("truncated or invalid escape sequence at byte {position}")]
    MalformedEscape {
        /// Offset of the escape byte in the input.
        position: usize,
    },

    /// A row key did not contain the number of delimiters its layout
    /// requires.
    #[error("wrong number of delimiters in row key: found {found}, expected {expected}")]
    BadDelimiterCount {
        /// Delimiters found.
        found: usize,
        /// Delimiters the layout requires.
        expected: usize,
    },

    /// The terminal flag byte of an edge row was not a known direction flag.
    #[error("invalid direction flag in row key: {flag:#04x}")]
    BadDirectionFlag {
        /// The offending flag byte.
        flag: u8,
    },

    /// The column family bytes were not valid UTF-8.
    #[error("column family is not a valid UTF-8 group name: {0}")]
    BadGroupEncoding(#[from] std::string::FromUtf8Error),

    /// A property record's length prefix was truncated, negative, or ran
    /// past the end of the block.
    #[error("invalid property length prefix at byte {position}")]
    BadLengthPrefix {
        /// Offset of the record in the block.
        position: usize,
    },

    /// The designated timestamp property held a non-integer value.
    #[error("timestamp property {property:?} is not an integer")]
    BadTimestamp {
        /// The designated timestamp property name.
        property: String,
    },
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
