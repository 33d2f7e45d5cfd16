//! BinLinker container header
//!
//! The header is 4 bytes, little-endian:
//!
//! - `identifier`: 2-byte format tag
//! - `count`: u16 number of entries
//!
//! It is followed by `count + 1` u32 offsets, the last one marking the end of
//! the final entry.

use crate::error::{BinLinkerError, Result};
use binrw::{BinRead, BinWrite};
use std::io::Cursor;

/// Size of the fixed header in bytes
pub const HEADER_SIZE: usize = 4;

/// Size of one offset table slot in bytes
pub const OFFSET_SIZE: usize = 4;

/// Fixed 4-byte header at the start of every container
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq)]
#[brw(little)]
pub struct BinLinkerHeader {
    /// Format tag
    pub identifier: [u8; 2],
    /// Number of entries
    pub count: u16,
}

impl BinLinkerHeader {
    /// Create a header for `count` entries
    pub fn new(identifier: [u8; 2], count: u16) -> Self {
        Self { identifier, count }
    }

    /// Read the header from the start of `data`
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(BinLinkerError::TruncatedData {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let mut cursor = Cursor::new(data);
        Self::read(&mut cursor).map_err(BinLinkerError::from)
    }

    /// Number of entries as `usize`
    pub fn entry_count(&self) -> usize {
        self.count as usize
    }

    /// Size of the offset table in bytes (`count + 1` slots)
    pub fn table_size(&self) -> usize {
        (self.entry_count() + 1) * OFFSET_SIZE
    }

    /// First byte after the offset table
    pub fn payload_start(&self) -> usize {
        HEADER_SIZE + self.table_size()
    }
}
