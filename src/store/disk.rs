// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Block-addressed record store over a simulated disk.
//!
//! The "disk" is a bounded, append-only sequence of fixed-size blocks held
//! in memory. Records pack back to back into a block's payload; the record
//! count lives in the block header outside the payload, so capacity is
//! simply `block_size / RECORD_SIZE`.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ VirtualDisk                                  │
//! ├──────────────────────────────────────────────┤
//! │ capacity_bytes, block_size                   │
//! │ blocks: [Block 0][Block 1][Block 2]...       │
//! │ lookup_table: RecordPtr -> RecordLocation    │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Pointers handed out by [`VirtualDisk::write_record`] stay valid for the
//! lifetime of the store: blocks are never reallocated, records never move,
//! and lookup-table entries are never mutated or removed.
//!
//! Each block carries a CRC32 of its payload, refreshed on every write and
//! verified on every pointer read.

use crate::error::{RateError, RateResult};
use crate::store::record::{Record, RECORD_SIZE};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Stable, opaque handle to one record slot.
///
/// Compared and hashed by value. Consumers other than the store itself
/// treat it as a token; [`VirtualDisk::locate`] resolves it back to a
/// block and slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordPtr {
    block: u32,
    slot: u16,
}

impl RecordPtr {
    pub(crate) fn new(block: u32, slot: u16) -> Self {
        Self { block, slot }
    }
}

/// Resolved position of a record: which block, which slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLocation {
    pub block_index: usize,
    pub slot_index: usize,
}

/// One fixed-size block of packed records.
///
/// `num_records` and `checksum` are header fields held outside the payload;
/// they do not consume record space.
#[derive(Debug, Clone)]
pub struct Block {
    num_records: u16,
    payload: Vec<u8>,
    checksum: u32,
}

impl Block {
    fn new(block_size: usize) -> Self {
        let payload = vec![0u8; block_size];
        let checksum = crc32fast::hash(&payload);
        Self {
            num_records: 0,
            payload,
            checksum,
        }
    }

    /// Number of records currently packed into this block.
    pub fn num_records(&self) -> u16 {
        self.num_records
    }

    /// Raw payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    fn verify_checksum(&self, index: usize) -> RateResult<()> {
        if crc32fast::hash(&self.payload) != self.checksum {
            return Err(RateError::InvariantViolation {
                reason: format!("block {} payload does not match its checksum", index),
            });
        }
        Ok(())
    }
}

/// Disk usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiskStats {
    /// Upper bound on allocatable blocks (`capacity_bytes / block_size`).
    pub max_blocks: usize,

    /// Blocks allocated so far.
    pub used_blocks: usize,

    /// Bytes consumed by allocated blocks (`used_blocks * block_size`).
    pub bytes_used: usize,

    /// `bytes_used` as a percentage of capacity.
    pub percent_used: f64,
}

/// Result of resolving a batch of record pointers against the store.
///
/// Feeds the query reports: how many distinct data blocks a search touched
/// and the mean rating across the returned records.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessSummary {
    /// Distinct block indexes in first-touch order.
    pub distinct_blocks: Vec<usize>,

    /// Arithmetic mean of `rating` across the pointed-to records.
    pub mean_rating: f64,
}

/// Fixed-capacity in-memory block store.
pub struct VirtualDisk {
    capacity_bytes: usize,
    block_size: usize,
    blocks: Vec<Block>,
    lookup_table: HashMap<RecordPtr, RecordLocation>,
}

impl VirtualDisk {
    /// Create a disk with `capacity_mb` megabytes (decimal: `x 1_000_000`)
    /// of space split into `block_size`-byte blocks.
    ///
    /// The first block is preallocated so the tail-block write path never
    /// starts empty.
    ///
    /// ## Error Conditions
    /// - `block_size` smaller than one packed record
    /// - capacity too small to allocate even the first block
    ///
    /// ## Example
    /// ```rust
    /// use ratebase::store::VirtualDisk;
    ///
    /// let disk = VirtualDisk::new(100, 200)?;
    /// assert_eq!(disk.stats().max_blocks, 500_000);
    /// # Ok::<(), ratebase::RateError>(())
    /// ```
    pub fn new(capacity_mb: usize, block_size: usize) -> RateResult<Self> {
        Self::with_capacity_bytes(capacity_mb * 1_000_000, block_size)
    }

    /// Create a disk with an exact byte capacity.
    pub fn with_capacity_bytes(capacity_bytes: usize, block_size: usize) -> RateResult<Self> {
        if block_size < RECORD_SIZE {
            return Err(RateError::ValidationError {
                field: "block_size".to_string(),
                reason: format!("must hold at least one {}-byte record", RECORD_SIZE),
                value: Some(block_size.to_string()),
            });
        }

        let mut disk = Self {
            capacity_bytes,
            block_size,
            blocks: Vec::new(),
            lookup_table: HashMap::new(),
        };
        disk.allocate_block()?;
        Ok(disk)
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Records a single block can hold.
    pub fn block_capacity(&self) -> usize {
        self.block_size / RECORD_SIZE
    }

    /// Upper bound on allocatable blocks.
    pub fn max_blocks(&self) -> usize {
        self.capacity_bytes / self.block_size
    }

    /// Total records written so far.
    pub fn record_count(&self) -> usize {
        self.lookup_table.len()
    }

    fn allocate_block(&mut self) -> RateResult<usize> {
        if self.blocks.len() >= self.max_blocks() {
            return Err(RateError::OutOfSpace {
                max_blocks: self.max_blocks(),
                block_size: self.block_size,
            });
        }
        self.blocks.push(Block::new(self.block_size));
        Ok(self.blocks.len() - 1)
    }

    /// Pack a record into the tail block, allocating a successor when full.
    ///
    /// ## Output
    /// - `Ok(RecordPtr)`: stable handle resolving to the written slot
    /// - `Err(RateError::ValidationError)`: the record violates the schema
    /// - `Err(RateError::OutOfSpace)`: block budget exhausted
    ///
    /// ## Side Effects
    /// - Appends a lookup-table entry for the new pointer (never mutated
    ///   or removed afterwards)
    /// - Refreshes the tail block's checksum
    pub fn write_record(&mut self, record: &Record) -> RateResult<RecordPtr> {
        let bytes = record.encode()?;

        let mut index = self.blocks.len() - 1;
        if self.blocks[index].num_records as usize >= self.block_capacity() {
            index = self.allocate_block()?;
        }

        let block = &mut self.blocks[index];
        let slot = block.num_records;
        let offset = slot as usize * RECORD_SIZE;
        block.payload[offset..offset + RECORD_SIZE].copy_from_slice(&bytes);
        block.checksum = crc32fast::hash(&block.payload);
        block.num_records += 1;

        let ptr = RecordPtr::new(index as u32, slot);
        self.lookup_table.insert(
            ptr,
            RecordLocation {
                block_index: index,
                slot_index: slot as usize,
            },
        );

        Ok(ptr)
    }

    /// Resolve a pointer through the lookup table.
    ///
    /// ## Error Conditions
    /// - `InvalidPointer`: the pointer was never produced by this store
    pub fn locate(&self, ptr: RecordPtr) -> RateResult<RecordLocation> {
        self.lookup_table
            .get(&ptr)
            .copied()
            .ok_or(RateError::InvalidPointer {
                block: ptr.block,
                slot: ptr.slot,
            })
    }

    /// Decode the record a pointer refers to.
    ///
    /// Verifies the containing block's checksum before decoding.
    pub fn read(&self, ptr: RecordPtr) -> RateResult<Record> {
        let loc = self.locate(ptr)?;
        let block = &self.blocks[loc.block_index];
        block.verify_checksum(loc.block_index)?;

        let offset = loc.slot_index * RECORD_SIZE;
        Record::decode(&block.payload[offset..offset + RECORD_SIZE])
    }

    /// Decoded contents of one block, with the pointer for each slot.
    pub fn block_records(&self, block_index: usize) -> RateResult<Vec<(RecordPtr, Record)>> {
        let block = self
            .blocks
            .get(block_index)
            .ok_or_else(|| RateError::InvariantViolation {
                reason: format!("block index {} beyond allocated range", block_index),
            })?;
        block.verify_checksum(block_index)?;

        let mut out = Vec::with_capacity(block.num_records as usize);
        for slot in 0..block.num_records {
            let offset = slot as usize * RECORD_SIZE;
            let record = Record::decode(&block.payload[offset..offset + RECORD_SIZE])?;
            out.push((RecordPtr::new(block_index as u32, slot), record));
        }
        Ok(out)
    }

    /// Populated blocks in allocation order.
    pub fn iter_blocks(&self) -> impl Iterator<Item = (usize, &Block)> {
        self.blocks.iter().enumerate()
    }

    /// Disk usage statistics.
    pub fn stats(&self) -> DiskStats {
        let max_blocks = self.max_blocks();
        let used_blocks = self.blocks.len();
        let bytes_used = used_blocks * self.block_size;
        DiskStats {
            max_blocks,
            used_blocks,
            bytes_used,
            percent_used: bytes_used as f64 * 100.0 / self.capacity_bytes as f64,
        }
    }

    /// Resolve a batch of pointers into the distinct blocks they touch and
    /// the mean rating of their records.
    ///
    /// Block indexes come back in first-touch order, mirroring the order a
    /// query would fault them in.
    pub fn summarise_access(&self, ptrs: &[RecordPtr]) -> RateResult<AccessSummary> {
        let mut distinct_blocks = Vec::new();
        let mut seen = HashSet::new();
        let mut rating_total = 0.0f64;

        for &ptr in ptrs {
            let loc = self.locate(ptr)?;
            if seen.insert(loc.block_index) {
                distinct_blocks.push(loc.block_index);
            }
            rating_total += self.read(ptr)?.rating as f64;
        }

        let mean_rating = if ptrs.is_empty() {
            0.0
        } else {
            rating_total / ptrs.len() as f64
        };

        Ok(AccessSummary {
            distinct_blocks,
            mean_rating,
        })
    }
}
