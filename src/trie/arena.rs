//! Single contiguous node array backing the trie (spec.md §3/§4.5).
//!
//! Bulk construction from millions of keywords never calls a per-node
//! allocator: every node lives in one growable `Vec<TrieNode>`, and
//! references between nodes are `NodeId` indices rather than pointers, so
//! the array can reallocate during growth without invalidating anything a
//! caller is holding onto.

use crate::error::{Error, Result};
use crate::trie::node::{NodeId, TrieNode};

pub struct TrieArena {
    nodes: Vec<TrieNode>,
    reallocations: u32,
}

impl TrieArena {
    /// Builds an arena with the root node already allocated at index 0.
    pub fn new() -> TrieArena {
        TrieArena {
            nodes: vec![TrieNode::placeholder()],
            reallocations: 0,
        }
    }

    /// Heuristic pre-sizing for a dictionary of roughly `expected_keywords`
    /// entries of `expected_len` bytes each, to cut down on reallocation
    /// during bulk construction.
    pub fn with_capacity_hint(expected_keywords: usize, expected_len: usize) -> Result<TrieArena> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve(expected_keywords.saturating_mul(expected_len.max(1)) + 1)
            .map_err(|_| Error::OutOfMemory { context: "trie arena" })?;
        nodes.push(TrieNode::placeholder());
        Ok(TrieArena { nodes, reallocations: 0 })
    }

    /// The root node's index. Always 0: allocated up front by `new` and
    /// `with_capacity_hint`.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Allocates a fresh placeholder node, growing the backing `Vec` if
    /// necessary, and returns its index.
    pub fn alloc(&mut self) -> Result<NodeId> {
        let cap_before = self.nodes.capacity();
        if self.nodes.len() == cap_before {
            self.nodes
                .try_reserve(cap_before.max(16))
                .map_err(|_| Error::OutOfMemory { context: "trie arena" })?;
            self.reallocations += 1;
        }
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(TrieNode::placeholder());
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn reallocation_count(&self) -> u32 {
        self.reallocations
    }
}

impl Default for TrieArena {
    fn default() -> Self {
        Self::new()
    }
}
