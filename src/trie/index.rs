//! Trie insertion and lookup (spec.md §4.5): the dictionary index.

use crate::core::view::ByteView;
use crate::error::Result;
use crate::trie::arena::TrieArena;
use crate::trie::node::{NodeId, TrieNode};

/// The dictionary index: an insert-only byte trie over a contiguous arena,
/// with a per-level bitmap fast-reject.
pub struct Trie {
    arena: TrieArena,
    case_insensitive: bool,
    len: usize,
}

impl Trie {
    pub fn new(case_insensitive: bool) -> Trie {
        Trie { arena: TrieArena::new(), case_insensitive, len: 0 }
    }

    /// Like [`Trie::new`], but pre-sizes the backing arena for roughly
    /// `expected_keywords` entries of `expected_len` bytes each, cutting
    /// down on reallocation while loading a large dictionary file.
    pub fn with_capacity_hint(
        case_insensitive: bool,
        expected_keywords: usize,
        expected_len: usize,
    ) -> Result<Trie> {
        let arena = TrieArena::with_capacity_hint(expected_keywords, expected_len)?;
        Ok(Trie { arena, case_insensitive, len: 0 })
    }

    /// Number of distinct non-empty keywords inserted so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn arena_reallocation_count(&self) -> u32 {
        self.arena.reallocation_count()
    }

    /// Consumes an iterator of dictionary lines (raw bytes, as read from a
    /// file or supplied inline). Empty lines are ignored; a trailing `\n`
    /// then `\r` are stripped before insertion; if this trie was built
    /// case-insensitive, each line is lowercased first.
    pub fn build_from_keywords<I, L>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        for line in lines {
            let mut bytes = line.as_ref();
            if bytes.last() == Some(&b'\n') {
                bytes = &bytes[..bytes.len() - 1];
            }
            if bytes.last() == Some(&b'\r') {
                bytes = &bytes[..bytes.len() - 1];
            }
            if bytes.is_empty() {
                continue;
            }
            if self.case_insensitive {
                let lowered = crate::case_fold::to_lower_vec(bytes);
                self.insert(&lowered)?;
            } else {
                self.insert(bytes)?;
            }
        }
        Ok(())
    }

    fn insert(&mut self, keyword: &[u8]) -> Result<()> {
        let mut head = self.arena.root();
        for (i, &byte) in keyword.iter().enumerate() {
            let node = self.find_or_insert_sibling(head, byte)?;
            if i == keyword.len() - 1 {
                let already_leaf = self.arena.get(node).is_leaf();
                self.arena.get_mut(node).mark_leaf();
                if !already_leaf {
                    self.len += 1;
                }
                return Ok(());
            }
            if self.arena.get(node).child().is_none() {
                let child = self.arena.alloc()?;
                self.arena.get_mut(node).set_child(child);
            }
            head = self.arena.get(node).child();
        }
        Ok(())
    }

    /// Finds (or allocates) the node for `byte` among `head`'s siblings,
    /// per spec.md §4.5's insertion algorithm: set the bitmap bit, walk the
    /// bucket chain, claim the placeholder head if unclaimed, otherwise
    /// reuse a match or append a new node to the chain's tail.
    fn find_or_insert_sibling(&mut self, head: NodeId, byte: u8) -> Result<NodeId> {
        self.arena.get_mut(head).set_bitmap_bit(byte);

        if !self.arena.get(head).has_label() {
            self.arena.get_mut(head).claim(byte);
            let bucket = TrieNode::bucket_of(byte);
            self.arena.get_mut(head).set_bucket_head(bucket, head);
            return Ok(head);
        }
        if self.arena.get(head).label() == byte {
            return Ok(head);
        }

        let bucket = TrieNode::bucket_of(byte);
        let mut cursor = self.arena.get(head).bucket_head(bucket);
        let mut tail = NodeId::NONE;
        while !cursor.is_none() {
            let node = self.arena.get(cursor);
            if node.has_label() && node.label() == byte {
                return Ok(cursor);
            }
            tail = cursor;
            cursor = node.next();
        }

        let new_node = self.arena.alloc()?;
        self.arena.get_mut(new_node).claim(byte);
        if tail.is_none() {
            self.arena.get_mut(head).set_bucket_head(bucket, new_node);
        } else {
            self.arena.get_mut(tail).set_next(new_node);
        }
        Ok(new_node)
    }

    /// Returns true iff some non-empty prefix of `view` (read against
    /// `buffer`) is a member of the dictionary. Shortest-prefix-match
    /// policy: a dictionary entry matches even if a longer entry also
    /// would.
    pub fn contains_prefix_of(&self, buffer: &[u8], view: ByteView) -> bool {
        let mut head = self.arena.root();
        let mut remaining = view;

        loop {
            if remaining.is_empty() {
                return false;
            }
            let byte = buffer[remaining.offset()];
            let head_node = self.arena.get(head);
            if !head_node.probe_bitmap(byte) {
                return false;
            }

            let bucket = TrieNode::bucket_of(byte);
            let mut cursor = head_node.bucket_head(bucket);
            let matched = loop {
                if cursor.is_none() {
                    return false;
                }
                let node = self.arena.get(cursor);
                if node.has_label() && node.label() == byte {
                    break cursor;
                }
                cursor = node.next();
            };

            let node = self.arena.get(matched);
            if node.is_leaf() {
                return true;
            }
            if remaining.len() == 1 {
                return false;
            }
            if node.child().is_none() {
                return false;
            }
            head = node.child();
            remaining = remaining.suffix(1);
        }
    }

    /// Returns true iff some substring of `view` (read against `buffer`) of
    /// length >= 1 is a dictionary member: `contains_prefix_of` probed at
    /// every starting offset.
    pub fn contains_anywhere(&self, buffer: &[u8], view: ByteView) -> bool {
        for i in 0..view.len() {
            if self.contains_prefix_of(buffer, view.suffix(i)) {
                return true;
            }
        }
        false
    }
}
