// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! B+ tree secondary index over vote counts.
//!
//! The index maps each distinct `u32` vote count to the chain of record
//! pointers inserted under it. Its fanout is derived from the block size of
//! the store it indexes, so one node corresponds to one disk block.
//!
//! ## Example
//!
//! ```rust
//! use ratebase::index::{BPlusTree, Order};
//! use ratebase::store::{Record, VirtualDisk};
//!
//! let mut disk = VirtualDisk::new(1, 200)?;
//! let mut tree = BPlusTree::new(Order::from_block_size(200)?);
//!
//! for votes in [70u32, 10, 40] {
//!     let ptr = disk.write_record(&Record::new("tt0000001", 5.0, votes))?;
//!     tree.insert(votes, ptr);
//! }
//!
//! let (in_range, _) = tree.search_range(10, 50);
//! assert_eq!(in_range.len(), 2);
//! # Ok::<(), ratebase::RateError>(())
//! ```

pub mod iter;
pub mod node;
pub mod tree;
pub mod types;

#[cfg(test)]
mod node_test;

// Re-export public API
pub use iter::LeafScan;
pub use node::{DuplicateChain, InternalNode, LeafNode, Node};
pub use tree::BPlusTree;
pub use types::{NodeAccessLog, NodeId, Order, ACCESS_SAMPLE};
