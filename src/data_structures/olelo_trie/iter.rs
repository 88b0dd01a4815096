// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy depth-first traversal over the words stored below a trie node.

use std::iter::FusedIterator;

use super::node::{NodeId, TrieNode};

/// Iterator over `(word, meaning)` pairs in a subtree of an [`OleloTrie`].
///
/// Nodes are visited in pre-order with children in ascending byte order, so
/// words come out sorted lexicographically by their bytes. The walk keeps an
/// explicit stack, so very long words cannot exhaust the call stack.
///
/// [`OleloTrie`]: super::OleloTrie
#[derive(Debug, Clone)]
pub struct PrefixWords<'a> {
    nodes: &'a [TrieNode],
    /// Pending nodes: (node, length of the word buffer at the parent, edge byte)
    stack: Vec<(NodeId, usize, Option<u8>)>,
    word: Vec<u8>,
}

impl<'a> PrefixWords<'a> {
    pub(crate) fn new(nodes: &'a [TrieNode], start: NodeId, prefix: &[u8]) -> Self {
        Self {
            nodes,
            stack: vec![(start, prefix.len(), None)],
            word: prefix.to_vec(),
        }
    }
}

impl<'a> Iterator for PrefixWords<'a> {
    type Item = (Vec<u8>, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes: &'a [TrieNode] = self.nodes;
        while let Some((id, depth, edge)) = self.stack.pop() {
            self.word.truncate(depth);
            if let Some(byte) = edge {
                self.word.push(byte);
            }

            let node = &nodes[id];
            let depth = self.word.len();
            // Reverse so the smallest byte is popped first.
            for (&byte, &child) in node.children.iter().rev() {
                self.stack.push((child, depth, Some(byte)));
            }

            if let Some(meaning) = node.meaning() {
                return Some((self.word.clone(), meaning));
            }
        }
        None
    }
}

impl FusedIterator for PrefixWords<'_> {}
