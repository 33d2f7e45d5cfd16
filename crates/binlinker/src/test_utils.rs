//! Test utilities for building BinLinker containers
//!
//! The crate only reads containers; these helpers lay out test buffers the
//! same way a packer would.

use crate::header::{BinLinkerHeader, OFFSET_SIZE};
use binrw::BinWrite;
use std::io::Cursor;

/// Pack `entries` back to back after the header and offset table
pub fn build_container(identifier: [u8; 2], entries: &[&[u8]]) -> Vec<u8> {
    let header = BinLinkerHeader::new(identifier, entries.len() as u16);
    let mut offsets = Vec::with_capacity(entries.len() + 1);
    let mut position = header.payload_start() as u32;
    offsets.push(position);
    for entry in entries {
        position += entry.len() as u32;
        offsets.push(position);
    }

    let mut data = build_raw(identifier, &offsets);
    for entry in entries {
        data.extend_from_slice(entry);
    }
    data
}

/// Write a header and an arbitrary offset table with no payload
///
/// The entry count is `offsets.len() - 1`. Used to craft corrupt tables.
pub fn build_raw(identifier: [u8; 2], offsets: &[u32]) -> Vec<u8> {
    let count = offsets.len().saturating_sub(1) as u16;
    let mut cursor = Cursor::new(Vec::with_capacity(4 + offsets.len() * OFFSET_SIZE));
    BinLinkerHeader::new(identifier, count)
        .write(&mut cursor)
        .expect("Header write to memory should succeed");
    for offset in offsets {
        offset
            .write_le(&mut cursor)
            .expect("Offset write to memory should succeed");
    }
    cursor.into_inner()
}

/// Deterministic payload of `len` bytes seeded by `seed`
pub fn payload(seed: u8, len: usize) -> Vec<u8> {
    (0..len).map(|i| seed.wrapping_add(i as u8)).collect()
}
