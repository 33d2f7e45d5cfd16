//! Zero-copy accessor over a BinLinker container
//!
//! [`BinLinkerAccessor`] borrows the container buffer and hands out entry
//! views that borrow from that same buffer. Nothing is copied or allocated
//! on the entry path.
//!
//! Two access paths are provided:
//!
//! - **Unchecked**: [`BinLinkerAccessor::open`], [`BinLinkerAccessor::entry`]
//!   and indexing. The header is only asserted in debug builds and a corrupt
//!   offset table panics on slicing. Use for buffers from a trusted packer.
//! - **Checked**: [`BinLinkerAccessor::try_open`],
//!   [`BinLinkerAccessor::open_with`], [`BinLinkerAccessor::try_entry`] and
//!   [`BinLinkerAccessor::get`] report a [`BinLinkerError`] instead.

use crate::config::ValidationLevel;
use crate::error::{BinLinkerError, Result};
use crate::header::{BinLinkerHeader, HEADER_SIZE, OFFSET_SIZE};
use crate::iter::Entries;
use std::fmt;
use std::ops::{Index, Range};
use tracing::{debug, trace};

/// Read-only view over a BinLinker container
///
/// Holds only the borrowed buffer, so it is `Copy` and can be recreated
/// for every lookup.
///
/// # Example
///
/// ```rust
/// use binlinker::BinLinkerAccessor;
///
/// // "PL", 2 entries, offsets [16, 19, 21], payload "abcde"
/// let data = [
///     b'P', b'L', 2, 0,
///     16, 0, 0, 0,
///     19, 0, 0, 0,
///     21, 0, 0, 0,
///     b'a', b'b', b'c', b'd', b'e',
/// ];
///
/// let accessor = BinLinkerAccessor::open(&data, *b"PL");
/// assert_eq!(accessor.identifier(), "PL");
/// assert_eq!(accessor.length(), 2);
/// assert_eq!(accessor.entry(0), b"abc");
/// assert_eq!(&accessor[1], b"de");
/// ```
#[derive(Clone, Copy)]
pub struct BinLinkerAccessor<'a> {
    data: &'a [u8],
}

impl<'a> BinLinkerAccessor<'a> {
    /// Wrap `data` without validating it
    ///
    /// Debug builds assert that the buffer is longer than the header and
    /// starts with `expected_identifier`. Release builds skip both checks.
    pub fn open(data: &'a [u8], expected_identifier: [u8; 2]) -> Self {
        debug_assert!(
            data.len() > HEADER_SIZE,
            "BinLinker buffer too short: {} bytes",
            data.len()
        );
        debug_assert!(
            data[..2] == expected_identifier,
            "BinLinker identifier mismatch: expected {:?}, got {:?}",
            expected_identifier,
            &data[..2]
        );
        Self { data }
    }

    /// Wrap `data` after fully validating the header and offset table
    pub fn try_open(data: &'a [u8], expected_identifier: [u8; 2]) -> Result<Self> {
        Self::open_with(data, expected_identifier, ValidationLevel::Full)
    }

    /// Wrap `data`, checking as much as `level` asks for
    pub fn open_with(
        data: &'a [u8],
        expected_identifier: [u8; 2],
        level: ValidationLevel,
    ) -> Result<Self> {
        if !level.checks_header() {
            return Ok(Self::open(data, expected_identifier));
        }

        let accessor = Self { data };
        accessor
            .check_header(expected_identifier)
            .and_then(|header| {
                if level.checks_offsets() {
                    accessor.validate()?;
                }
                Ok(header)
            })
            .inspect(|header| {
                trace!(
                    identifier = %String::from_utf8_lossy(&header.identifier),
                    entries = header.count,
                    len = data.len(),
                    ?level,
                    "Opened BinLinker container"
                );
            })
            .inspect_err(|e| debug!("Rejected BinLinker container: {}", e))?;

        Ok(accessor)
    }

    fn check_header(&self, expected_identifier: [u8; 2]) -> Result<BinLinkerHeader> {
        let header = BinLinkerHeader::parse(self.data)?;

        if header.identifier != expected_identifier {
            return Err(BinLinkerError::IdentifierMismatch {
                expected: expected_identifier,
                actual: header.identifier,
            });
        }

        if header.payload_start() > self.data.len() {
            return Err(BinLinkerError::TruncatedData {
                expected: header.payload_start(),
                actual: self.data.len(),
            });
        }

        Ok(header)
    }

    /// Format tag, each byte read as one character
    pub fn identifier(&self) -> String {
        self.data[..2].iter().map(|&b| char::from(b)).collect()
    }

    /// Raw 2-byte format tag
    pub fn identifier_bytes(&self) -> [u8; 2] {
        [self.data[0], self.data[1]]
    }

    /// Number of entries in the container
    pub fn length(&self) -> usize {
        u16::from_le_bytes([self.data[2], self.data[3]]) as usize
    }

    /// Whether the container holds no entries
    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Typed copy of the 4-byte header
    pub fn header(&self) -> BinLinkerHeader {
        BinLinkerHeader::new(self.identifier_bytes(), self.length() as u16)
    }

    /// The whole backing buffer
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Byte range of entry `index` as recorded in the offset table
    ///
    /// No check is made that the range is ordered or inside the buffer.
    pub fn entry_range(&self, index: usize) -> Range<usize> {
        let offset = HEADER_SIZE + index * OFFSET_SIZE;
        let start = read_u32_le(self.data, offset) as usize;
        let end = read_u32_le(self.data, offset + OFFSET_SIZE) as usize;
        start..end
    }

    /// View of entry `index`
    ///
    /// `index` must be below [`length`](Self::length); it is not checked.
    ///
    /// # Panics
    ///
    /// Panics if the offset table slots lie outside the buffer, if the start
    /// offset is past the end offset, or if the end offset is past the end
    /// of the buffer.
    pub fn entry(&self, index: usize) -> &'a [u8] {
        &self.data[self.entry_range(index)]
    }

    /// View of entry `index`, reporting bad indices and offsets as errors
    pub fn try_entry(&self, index: usize) -> Result<&'a [u8]> {
        let len = self.data.len();
        let length = try_read_u16_le(self.data, 2).ok_or(BinLinkerError::TruncatedData {
            expected: HEADER_SIZE,
            actual: len,
        })? as usize;

        if index >= length {
            return Err(BinLinkerError::IndexOutOfRange { index, length });
        }

        let offset = HEADER_SIZE + index * OFFSET_SIZE;
        let (Some(start), Some(end)) = (
            try_read_u32_le(self.data, offset),
            try_read_u32_le(self.data, offset + OFFSET_SIZE),
        ) else {
            return Err(BinLinkerError::TruncatedData {
                expected: offset + 2 * OFFSET_SIZE,
                actual: len,
            });
        };

        check_bounds(index, start, end, len)?;
        Ok(&self.data[start as usize..end as usize])
    }

    /// View of entry `index`, or `None` if it cannot be read safely
    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        self.try_entry(index).ok()
    }

    /// Check the header and every offset in the table
    ///
    /// Offsets must be non-decreasing and the final boundary must not pass
    /// the end of the buffer. Payloads are not required to start after the
    /// table or to be contiguous.
    pub fn validate(&self) -> Result<()> {
        let len = self.data.len();
        let header = BinLinkerHeader::parse(self.data)?;
        if header.payload_start() > len {
            return Err(BinLinkerError::TruncatedData {
                expected: header.payload_start(),
                actual: len,
            });
        }

        let count = header.entry_count();
        let mut start = read_u32_le(self.data, HEADER_SIZE);
        for index in 0..count {
            let end = read_u32_le(self.data, HEADER_SIZE + (index + 1) * OFFSET_SIZE);
            if start > end {
                return Err(BinLinkerError::OffsetsOutOfOrder { index, start, end });
            }
            start = end;
        }

        if start as usize > len {
            return Err(BinLinkerError::OffsetOutOfBounds {
                index: count.saturating_sub(1),
                offset: start,
                len,
            });
        }

        Ok(())
    }

    /// Iterate over every entry view in order
    pub fn iter(&self) -> Entries<'a> {
        Entries::new(*self)
    }
}

fn check_bounds(index: usize, start: u32, end: u32, len: usize) -> Result<()> {
    if start > end {
        return Err(BinLinkerError::OffsetsOutOfOrder { index, start, end });
    }
    if end as usize > len {
        return Err(BinLinkerError::OffsetOutOfBounds {
            index,
            offset: end,
            len,
        });
    }
    Ok(())
}

fn read_u32_le(data: &[u8], pos: usize) -> u32 {
    let mut buf = [0u8; OFFSET_SIZE];
    buf.copy_from_slice(&data[pos..pos + OFFSET_SIZE]);
    u32::from_le_bytes(buf)
}

fn try_read_u32_le(data: &[u8], pos: usize) -> Option<u32> {
    data.get(pos..pos.checked_add(OFFSET_SIZE)?)?
        .try_into()
        .ok()
        .map(u32::from_le_bytes)
}

fn try_read_u16_le(data: &[u8], pos: usize) -> Option<u16> {
    data.get(pos..pos.checked_add(2)?)?
        .try_into()
        .ok()
        .map(u16::from_le_bytes)
}

impl Index<usize> for BinLinkerAccessor<'_> {
    type Output = [u8];

    fn index(&self, index: usize) -> &Self::Output {
        self.entry(index)
    }
}

impl<'a> IntoIterator for BinLinkerAccessor<'a> {
    type Item = &'a [u8];
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Entries::new(self)
    }
}

impl<'a> IntoIterator for &BinLinkerAccessor<'a> {
    type Item = &'a [u8];
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for BinLinkerAccessor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.len() < HEADER_SIZE {
            return f
                .debug_struct("BinLinkerAccessor")
                .field("len", &self.data.len())
                .finish_non_exhaustive();
        }
        f.debug_struct("BinLinkerAccessor")
            .field("identifier", &self.identifier())
            .field("length", &self.length())
            .finish()
    }
}

/// Renders as `Identifier[Length]`, e.g. `PL[12]`
impl fmt::Display for BinLinkerAccessor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.len() < HEADER_SIZE {
            return write!(f, "<truncated {} bytes>", self.data.len());
        }
        write!(f, "{}[{}]", self.identifier(), self.length())
    }
}
