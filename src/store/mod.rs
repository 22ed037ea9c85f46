// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Record storage: the fixed-width codec and the block-addressed store.
//!
//! ## Data Flow
//!
//! ```text
//! Record ──encode──> 16 packed bytes ──write_record──> block slot
//!                                         │
//!                                         └──> RecordPtr (stable handle)
//! ```
//!
//! The index layer stores [`RecordPtr`] values and never looks inside them;
//! [`VirtualDisk::read`] and [`VirtualDisk::locate`] resolve them back to
//! records and block positions.

pub mod disk;
pub mod record;

#[cfg(test)]
mod disk_test;

// Re-export public API
pub use disk::{AccessSummary, Block, DiskStats, RecordLocation, RecordPtr, VirtualDisk};
pub use record::{Record, ID_SIZE, RATING_SIZE, RECORD_SIZE, VOTES_SIZE};
