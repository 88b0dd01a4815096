// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Olelo Trie.

/// Configuration for the Olelo Trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OleloTrieConfig {
    /// Whether deleting a word also detaches the branch it leaves behind.
    ///
    /// When false, deletion only clears the terminal marker and every node
    /// stays allocated until the trie is cleared or dropped.
    pub prune_on_delete: bool,
}

impl OleloTrieConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether deletion prunes dead branches.
    ///
    /// # Arguments
    ///
    /// * `prune_on_delete` - Whether to detach childless non-terminal chains.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_prune_on_delete(mut self, prune_on_delete: bool) -> Self {
        self.prune_on_delete = prune_on_delete;
        self
    }
}
