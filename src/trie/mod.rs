//! Arena trie dictionary index (spec.md §4.5): the core of this crate.

pub mod arena;
pub mod index;
pub mod node;

pub use index::Trie;
