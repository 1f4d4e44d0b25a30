//! Streaming multi-substring line filter.
//!
//! The core: a chunked reader feeds lines to an arena trie that fast-rejects
//! non-matching suffixes via a per-level bitmap. See `core`, `io`, `trie`,
//! and `engine` for the pieces spec.md describes in detail; `cli`, `config`,
//! `dictionary`, `progress`, and `error` are the ambient stack that wires
//! them into a runnable binary.

pub mod case_fold;
pub mod cli;
pub mod config;
pub mod core;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod io;
pub mod progress;
pub mod trie;
