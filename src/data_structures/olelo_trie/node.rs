// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Olelo Trie.
//!
//! Nodes live in an arena owned by the trie and refer to their children by
//! index. Each node represents one byte of a word path; terminal nodes carry
//! the meaning of the word spelled by that path.

use std::collections::BTreeMap;

/// Index of a node inside the trie's arena.
pub(crate) type NodeId = usize;

/// Arena index of the root node.
pub(crate) const ROOT: NodeId = 0;

/// A node in the Olelo Trie.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Child edges keyed by byte, kept in ascending order
    pub children: BTreeMap<u8, NodeId>,

    /// Whether this node represents the end of a word
    pub is_terminal: bool,

    /// Meaning of the word ending here (empty unless terminal)
    pub meaning: Vec<u8>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the meaning if this node terminates a word.
    pub fn meaning(&self) -> Option<&[u8]> {
        self.is_terminal.then_some(self.meaning.as_slice())
    }

    /// Marks the node terminal with the given meaning.
    pub fn set_terminal(&mut self, meaning: Vec<u8>) {
        self.is_terminal = true;
        self.meaning = meaning;
    }

    /// Clears the terminal flag and drops the meaning.
    pub fn clear_terminal(&mut self) {
        self.is_terminal = false;
        self.meaning = Vec::new();
    }

    /// A node that ends no word and leads nowhere can be detached.
    pub fn is_dead(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }
}
