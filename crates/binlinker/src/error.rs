//! Error types for the checked BinLinker access path

use thiserror::Error;

/// Errors reported by the checked constructors and accessors
///
/// The unchecked fast path ([`BinLinkerAccessor::open`] and
/// [`BinLinkerAccessor::entry`]) never produces these; it asserts in debug
/// builds and panics on slicing instead.
///
/// [`BinLinkerAccessor::open`]: crate::BinLinkerAccessor::open
/// [`BinLinkerAccessor::entry`]: crate::BinLinkerAccessor::entry
#[derive(Debug, Error)]
pub enum BinLinkerError {
    /// Buffer is too short for the header or the offset table
    #[error("Truncated data: expected {expected} bytes, got {actual} bytes")]
    TruncatedData {
        /// Minimum size required
        expected: usize,
        /// Actual buffer size
        actual: usize,
    },

    /// Identifier tag does not match the expected one
    #[error(
        "Identifier mismatch: expected '{}', got '{}'",
        String::from_utf8_lossy(.expected),
        String::from_utf8_lossy(.actual)
    )]
    IdentifierMismatch {
        /// Tag the caller asked for
        expected: [u8; 2],
        /// Tag found at offset 0
        actual: [u8; 2],
    },

    /// Entry index is not below the container's entry count
    #[error("Entry index {index} out of range for container with {length} entries")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Entry count from the header
        length: usize,
    },

    /// Offset table pair where the start lies past the end
    #[error("Offsets out of order at entry {index}: start {start} > end {end}")]
    OffsetsOutOfOrder {
        /// Entry whose boundaries are inverted
        index: usize,
        /// Start offset read from the table
        start: u32,
        /// End offset read from the table
        end: u32,
    },

    /// Offset pointing past the end of the buffer
    #[error("Offset {offset} for entry {index} exceeds buffer length {len}")]
    OffsetOutOfBounds {
        /// Entry the offset belongs to
        index: usize,
        /// Offending offset
        offset: u32,
        /// Buffer length
        len: usize,
    },

    /// Binary read error
    #[error("Binary parsing error: {0}")]
    BinRead(String),
}

impl From<binrw::Error> for BinLinkerError {
    fn from(e: binrw::Error) -> Self {
        Self::BinRead(e.to_string())
    }
}

/// Result type alias for checked BinLinker operations
pub type Result<T> = std::result::Result<T, BinLinkerError>;

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BinLinkerError::IdentifierMismatch {
            expected: *b"PL",
            actual: *b"ZZ",
        };
        let msg = err.to_string();
        assert!(msg.contains("'PL'"));
        assert!(msg.contains("'ZZ'"));

        let err = BinLinkerError::TruncatedData {
            expected: 12,
            actual: 3,
        };
        assert!(err.to_string().contains("12"));

        let err = BinLinkerError::IndexOutOfRange {
            index: 7,
            length: 2,
        };
        assert!(err.to_string().contains('7'));

        let err = BinLinkerError::OffsetsOutOfOrder {
            index: 1,
            start: 40,
            end: 30,
        };
        assert!(err.to_string().contains("40 > end 30"));

        let err = BinLinkerError::OffsetOutOfBounds {
            index: 0,
            offset: 99,
            len: 16,
        };
        assert!(err.to_string().contains("99"));
        assert!(err.to_string().contains("16"));
    }

    #[test]
    fn test_binrw_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short");
        let err: BinLinkerError = binrw::Error::Io(io).into();
        assert!(matches!(err, BinLinkerError::BinRead(_)));
    }
}
