//! Data structures for the Mauka Dictionary.
//!
//! This module contains the specialized data structures behind the
//! dictionary. All implementations are free of unsafe code.

pub mod olelo_trie;

// Re-export common data structures
pub use olelo_trie::{OleloTrie, OleloTrieConfig, OleloTrieError, OleloTrieResult};
