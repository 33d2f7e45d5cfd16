//! Zero-copy accessor for BinLinker blob containers
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::doc_markdown)] // BinLinker is a format name, not code
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
//! A BinLinker container packs any number of variable-length byte blobs into
//! one buffer, addressed by index:
//!
//! | Offset     | Size      | Field        |
//! |------------|-----------|--------------|
//! | 0          | 2         | identifier   |
//! | 2          | 2         | count N (LE) |
//! | 4          | 4×(N+1)   | u32 LE offset table |
//! | 4+4(N+1)   | variable  | entry payloads |
//!
//! Entry `i` occupies bytes `[table[i], table[i+1])` of the buffer.
//!
//! # Design Principles
//!
//! - **Zero-Copy**: entries are sub-slices of the caller's buffer
//! - **No Allocation**: entry access never touches the heap
//! - **Borrowed Lifetime**: the accessor and every entry are tied to the buffer
//! - **Trusted Fast Path**: unchecked access asserts only in debug builds; the
//!   `try_` variants report [`BinLinkerError`] for untrusted input
//!
//! # Usage
//!
//! ```rust
//! use binlinker::{BinLinkerAccessor, ValidationLevel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = [b'E', b'V', 1, 0, 12, 0, 0, 0, 14, 0, 0, 0, 0xAA, 0xBB];
//!
//! let accessor = BinLinkerAccessor::open_with(&data, *b"EV", ValidationLevel::Full)?;
//! assert_eq!(accessor.length(), 1);
//! assert_eq!(accessor.try_entry(0)?, &[0xAA_u8, 0xBB]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Unchecked and checked entry access
pub mod accessor;
/// Validation settings for the checked constructor
pub mod config;
pub mod error;
/// Fixed container header
pub mod header;
/// Entry iteration
pub mod iter;

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
pub(crate) mod test_utils;

pub use accessor::BinLinkerAccessor;
pub use config::ValidationLevel;
pub use error::{BinLinkerError, Result};
pub use header::{BinLinkerHeader, HEADER_SIZE, OFFSET_SIZE};
pub use iter::Entries;
