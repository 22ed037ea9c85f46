// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Core types for the B+ tree index.
//!
//! Defines the node handle type, the block-size-derived tree order, and the
//! access log returned alongside query results.

use crate::error::{RateError, RateResult};
use serde::{Deserialize, Serialize};

/// Dense integer handle addressing a node in the tree's arena.
///
/// Handles break the parent/child/next ownership cycles a pointer-threaded
/// tree would need; the arena owns every node.
pub type NodeId = u32;

/// Number of visited nodes whose keys a query log samples.
pub const ACCESS_SAMPLE: usize = 5;

/// B+ tree order (fanout) configuration.
///
/// The order is the maximum number of children an internal node may have;
/// every node holds at most `order - 1` keys. Derived from the block size
/// so that one node fills one disk block: each fanout unit costs one 4-byte
/// key slot plus one 8-byte pointer slot.
///
/// ## Example
/// ```rust
/// use ratebase::index::Order;
///
/// let order = Order::from_block_size(200)?; // (200 + 4) / 12 = 17
/// assert_eq!(order.value(), 17);
/// assert_eq!(order.max_keys(), 16);
/// # Ok::<(), ratebase::RateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order(u16);

impl Order {
    /// Create an order with validation.
    ///
    /// ## Error Conditions
    /// - Order less than 3: a B+ tree cannot split meaningfully below that
    pub fn new(order: usize) -> RateResult<Self> {
        if !(3..=u16::MAX as usize).contains(&order) {
            return Err(RateError::ValidationError {
                field: "order".to_string(),
                reason: "tree order must be between 3 and 65535".to_string(),
                value: Some(order.to_string()),
            });
        }
        Ok(Self(order as u16))
    }

    /// Derive the order from a block size: `(block_size + 4) / 12`.
    ///
    /// One key slot (4 bytes) plus one child pointer slot (8 bytes) per
    /// fanout unit, with 4 bytes of overhead cancelled from both sides.
    pub fn from_block_size(block_size: usize) -> RateResult<Self> {
        Self::new((block_size + 4) / 12)
    }

    /// Raw order value (maximum children per internal node).
    pub fn value(&self) -> usize {
        self.0 as usize
    }

    /// Maximum keys per node (`order - 1`).
    pub fn max_keys(&self) -> usize {
        self.0 as usize - 1
    }

    /// Minimum keys in a non-root leaf (`order / 2`).
    pub fn min_leaf_keys(&self) -> usize {
        self.0 as usize / 2
    }

    /// Minimum keys in a non-root internal node (`(order - 1) / 2`).
    pub fn min_internal_keys(&self) -> usize {
        (self.0 as usize - 1) / 2
    }

    /// Index at which an overfull node of `order` entries splits.
    ///
    /// The left half keeps `ceil((order - 1) / 2)` entries, matching the
    /// textbook rule: with `n = order - 1`, the split sits at `n / 2` when
    /// `n` is even and `n / 2 + 1` when it is odd.
    pub fn split_index(&self) -> usize {
        let n = self.0 as usize - 1;
        if n % 2 == 0 {
            n / 2
        } else {
            n / 2 + 1
        }
    }
}

/// Record of the nodes a tree operation visited.
///
/// Carries the total count plus the keys of up to the first
/// [`ACCESS_SAMPLE`] nodes, in visit order. Queries return it so the
/// driver can render verbose traversal reports without the index layer
/// ever printing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeAccessLog {
    /// Total nodes visited (internal nodes and leaves).
    pub nodes_visited: usize,

    /// Keys of the first few visited nodes.
    pub sampled_keys: Vec<Vec<u32>>,
}

impl NodeAccessLog {
    pub(crate) fn visit(&mut self, keys: &[u32]) {
        self.nodes_visited += 1;
        if self.sampled_keys.len() < ACCESS_SAMPLE {
            self.sampled_keys.push(keys.to_vec());
        }
    }
}
