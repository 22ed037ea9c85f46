// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! ratebase - teaching-grade block store with a B+ tree secondary index.
//!
//! A single-node storage engine built from the two foundational pieces of a
//! row-oriented database:
//!
//! - **Block store**: fixed-width film rating records packed into
//!   equal-sized blocks on a simulated disk, addressed by stable record
//!   pointers ([`store`]).
//! - **B+ tree index**: a disk-layout-aware secondary index over the vote
//!   count, with duplicate-key chains and a linked leaf chain for range
//!   scans ([`index`]).
//!
//! The [`dataset`] module loads the tab-separated ratings dataset into the
//! store, and [`config`] carries the experiment geometry. Queries report
//! their block-access behaviour alongside their results.
//!
//! ## Quick Start
//!
//! ```rust
//! use ratebase::index::{BPlusTree, Order};
//! use ratebase::store::{Record, VirtualDisk};
//!
//! let mut disk = VirtualDisk::new(100, 200)?;
//! let mut tree = BPlusTree::new(Order::from_block_size(200)?);
//!
//! let ptr = disk.write_record(&Record::new("tt0000001", 5.6, 1645))?;
//! tree.insert(1645, ptr);
//!
//! let (ptrs, visits) = tree.search(1645);
//! assert_eq!(disk.read(ptrs[0])?.id, "tt0000001");
//! assert_eq!(visits.nodes_visited, 1);
//! # Ok::<(), ratebase::RateError>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod index;
pub mod store;


// Re-export commonly used types
pub use config::Config;
pub use error::{RateError, RateResult};
pub use index::{BPlusTree, NodeAccessLog, Order};
pub use store::{AccessSummary, DiskStats, Record, RecordPtr, VirtualDisk};

/// ratebase version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
