// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Leaf-chain scan iterator.
//!
//! Walks the linked list of leaves left to right, yielding each key with
//! its duplicate chain. Finding the start position is the tree's job; from
//! there the scan never returns to internal nodes.

use super::tree::BPlusTree;
use super::types::NodeId;
use crate::store::RecordPtr;

/// Ascending iterator over `(key, chain)` pairs in the leaf chain.
///
/// Borrows the tree for the whole traversal; the tree cannot be mutated
/// while a scan is live.
pub struct LeafScan<'a> {
    tree: &'a BPlusTree,
    current: Option<NodeId>,
    slot: usize,
}

impl<'a> LeafScan<'a> {
    pub(crate) fn new(tree: &'a BPlusTree, start: Option<NodeId>) -> Self {
        Self {
            tree,
            current: start,
            slot: 0,
        }
    }
}

impl<'a> Iterator for LeafScan<'a> {
    type Item = (u32, &'a [RecordPtr]);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let id = self.current?;
            let leaf = tree.leaf(id);
            if self.slot < leaf.keys.len() {
                let item = (leaf.keys[self.slot], leaf.chains[self.slot].as_slice());
                self.slot += 1;
                return Some(item);
            }
            self.current = leaf.next;
            self.slot = 0;
        }
    }
}
