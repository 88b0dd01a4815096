// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Olelo Trie Implementation
//!
//! This module provides the prefix tree behind the Mauka dictionary. Each
//! stored word maps to a single meaning, and words sharing a prefix share
//! the nodes that spell it. Words and meanings are byte strings, so
//! dictionaries in UTF-8 or any single-byte encoding are stored unchanged.
//!
//! # Example
//!
//! ```
//! use mauka_dict_lib::data_structures::olelo_trie::OleloTrie;
//!
//! let mut trie = OleloTrie::new();
//! trie.insert("cat", "feline");
//! trie.insert("car", "vehicle");
//!
//! assert!(trie.search("cat"));
//! assert!(!trie.search("ca"));
//! assert_eq!(trie.get_meaning("car"), Some(&b"vehicle"[..]));
//!
//! let words: Vec<_> = trie.words_with_prefix("ca").unwrap().collect();
//! assert_eq!(
//!     words,
//!     vec![(b"car".to_vec(), &b"vehicle"[..]), (b"cat".to_vec(), &b"feline"[..])]
//! );
//! ```

pub mod codec;
mod config;
mod error;
mod iter;
mod node;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

pub use config::OleloTrieConfig;
pub use error::OleloTrieError;
pub use iter::PrefixWords;
use codec::{contains_line_break, RecordReader, RecordWriter};
use node::{NodeId, TrieNode, ROOT};

/// Result type for Olelo Trie operations
pub type OleloTrieResult<T> = Result<T, OleloTrieError>;

/// Olelo Trie is a word/meaning store keyed by the bytes of each word.
///
/// Key features:
/// * Exact lookup and prefix enumeration in time proportional to the key
/// * Deterministic, byte-ordered listing
/// * Logical deletion by default, with opt-in pruning of dead branches
/// * Two-line text records for persistence
///
/// Nodes are kept in an arena with the root at index 0. Freed slots are
/// recycled when pruning is enabled.
#[derive(Debug, Clone)]
pub struct OleloTrie {
    /// Node arena, root at index 0
    nodes: Vec<TrieNode>,

    /// Arena slots released by pruning
    free: Vec<NodeId>,

    /// Number of terminal nodes
    len: usize,

    /// Configuration options
    config: OleloTrieConfig,
}

impl OleloTrie {
    /// Creates a new empty `OleloTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(OleloTrieConfig::default())
    }

    /// Creates a new empty `OleloTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: OleloTrieConfig) -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            free: Vec::new(),
            len: 0,
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &OleloTrieConfig {
        &self.config
    }

    /// Inserts a word with its meaning, replacing any previous meaning.
    ///
    /// The empty word is allowed and is stored on the root.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    /// * `meaning` - The meaning to associate with the word.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` if its meaning was
    /// overwritten.
    pub fn insert<W, M>(&mut self, word: W, meaning: M) -> bool
    where
        W: AsRef<[u8]>,
        M: Into<Vec<u8>>,
    {
        let word = word.as_ref();
        let mut node = ROOT;
        for &byte in word {
            node = match self.nodes[node].children.get(&byte) {
                Some(&child) => child,
                None => {
                    let child = self.allocate();
                    self.nodes[node].children.insert(byte, child);
                    child
                }
            };
        }

        let target = &mut self.nodes[node];
        let is_new = !target.is_terminal;
        target.set_terminal(meaning.into());
        if is_new {
            self.len += 1;
        }

        debug!(word = %String::from_utf8_lossy(word), is_new, "Inserted word");
        is_new
    }

    /// Checks whether `word` is stored as a complete word.
    ///
    /// A path that only exists as part of longer words reports `false`.
    pub fn search<W: AsRef<[u8]>>(&self, word: W) -> bool {
        self.find(word.as_ref())
            .is_some_and(|node| self.nodes[node].is_terminal)
    }

    /// Returns the meaning stored for `word`.
    ///
    /// # Returns
    ///
    /// * `Some(meaning)` - The word is stored. The meaning may be empty.
    /// * `None` - The word is not stored.
    pub fn get_meaning<W: AsRef<[u8]>>(&self, word: W) -> Option<&[u8]> {
        self.find(word.as_ref())
            .and_then(|node| self.nodes[node].meaning())
    }

    /// Lists every stored word starting with `prefix`, with its meaning.
    ///
    /// The prefix itself is included when it is a stored word. Words are
    /// yielded lazily in ascending byte order.
    ///
    /// # Errors
    ///
    /// Returns [`OleloTrieError::KeyNotFound`] when no path exists for `prefix`.
    pub fn words_with_prefix<P: AsRef<[u8]>>(&self, prefix: P) -> OleloTrieResult<PrefixWords<'_>> {
        let prefix = prefix.as_ref();
        let start = self
            .find(prefix)
            .ok_or_else(|| OleloTrieError::KeyNotFound(display_key(prefix)))?;
        Ok(PrefixWords::new(&self.nodes, start, prefix))
    }

    /// Iterates over every stored word and its meaning in ascending byte order.
    pub fn iter(&self) -> PrefixWords<'_> {
        PrefixWords::new(&self.nodes, ROOT, &[])
    }

    /// Deletes a word.
    ///
    /// Only the terminal marker and meaning are cleared unless the trie was
    /// configured with `prune_on_delete`, in which case the childless
    /// non-terminal chain left behind is detached up to the nearest node that
    /// is still needed.
    ///
    /// # Errors
    ///
    /// * [`OleloTrieError::KeyNotFound`] - No path exists for `word`.
    /// * [`OleloTrieError::NotACompleteWord`] - The path exists but is not a stored word.
    pub fn delete_word<W: AsRef<[u8]>>(&mut self, word: W) -> OleloTrieResult<()> {
        let word = word.as_ref();

        // (parent, edge byte) for every step, used when pruning
        let mut path = Vec::with_capacity(word.len());
        let mut node = ROOT;
        for &byte in word {
            match self.nodes[node].children.get(&byte) {
                Some(&child) => {
                    path.push((node, byte));
                    node = child;
                }
                None => return Err(OleloTrieError::KeyNotFound(display_key(word))),
            }
        }

        if !self.nodes[node].is_terminal {
            return Err(OleloTrieError::NotACompleteWord(display_key(word)));
        }

        self.nodes[node].clear_terminal();
        self.len -= 1;

        if self.config.prune_on_delete {
            self.prune(node, path);
        }

        debug!(word = %String::from_utf8_lossy(word), "Deleted word");
        Ok(())
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if no words are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live nodes, including the root.
    ///
    /// Without pruning this never decreases until [`clear`](Self::clear).
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Removes every word and releases every node except the root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::new());
        self.free.clear();
        self.len = 0;
    }

    /// Writes every stored word as a two-line record.
    ///
    /// # Returns
    ///
    /// The number of records written.
    ///
    /// # Errors
    ///
    /// Propagates write errors, and fails with `InvalidInput` on a record
    /// containing a line break. Records before it have already been written.
    pub fn write_to<W: Write>(&self, writer: W) -> io::Result<usize> {
        let mut records = RecordWriter::new(writer);
        for (word, meaning) in self.iter() {
            records.write_record(&word, meaning)?;
        }
        records.finish()
    }

    /// Inserts every record read from `reader`, in order.
    ///
    /// A trailing word line with no meaning line is ignored.
    ///
    /// # Returns
    ///
    /// The number of records applied. On error, the records read before the
    /// failure stay inserted.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let mut applied = 0;
        for record in RecordReader::new(reader) {
            let (word, meaning) = record?;
            self.insert(word, meaning);
            applied += 1;
        }
        Ok(applied)
    }

    /// Saves the whole dictionary to `path`, replacing its contents.
    ///
    /// # Errors
    ///
    /// * [`OleloTrieError::EmbeddedNewline`] - A word or meaning contains a
    ///   line break. The destination is left untouched.
    /// * [`OleloTrieError::Io`] - The file could not be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> OleloTrieResult<usize> {
        let path = path.as_ref();

        if let Some((word, _)) = self
            .iter()
            .find(|(word, meaning)| contains_line_break(word) || contains_line_break(meaning))
        {
            return Err(OleloTrieError::EmbeddedNewline(display_key(&word)));
        }

        let io_error = |source| OleloTrieError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_error)?;
        let written = self.write_to(BufWriter::new(file)).map_err(io_error)?;

        info!(path = %path.display(), records = written, "Saved dictionary");
        Ok(written)
    }

    /// Loads records from `path` and inserts them into this trie.
    ///
    /// Existing words are kept; loaded words overwrite meanings of equal words.
    ///
    /// # Errors
    ///
    /// * [`OleloTrieError::SourceMissing`] - `path` does not exist. The trie is unchanged.
    /// * [`OleloTrieError::Io`] - The file could not be opened or read.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> OleloTrieResult<usize> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(OleloTrieError::SourceMissing(path.to_path_buf()));
            }
            Err(source) => {
                return Err(OleloTrieError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let applied = self
            .read_from(BufReader::new(file))
            .map_err(|source| OleloTrieError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), records = applied, "Loaded dictionary");
        Ok(applied)
    }

    /// Walks the path for `key`, returning the node it ends on.
    fn find(&self, key: &[u8]) -> Option<NodeId> {
        key.iter()
            .try_fold(ROOT, |node, byte| self.nodes[node].children.get(byte).copied())
    }

    /// Takes a node slot from the free list or grows the arena.
    fn allocate(&mut self) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = TrieNode::new();
                id
            }
            None => {
                self.nodes.push(TrieNode::new());
                self.nodes.len() - 1
            }
        }
    }

    /// Detaches dead nodes from `node` back toward the root.
    fn prune(&mut self, mut node: NodeId, path: Vec<(NodeId, u8)>) {
        let mut released = 0usize;
        for (parent, byte) in path.into_iter().rev() {
            if !self.nodes[node].is_dead() {
                break;
            }
            self.nodes[parent].children.remove(&byte);
            self.nodes[node] = TrieNode::new();
            self.free.push(node);
            released += 1;
            node = parent;
        }
        if released > 0 {
            debug!(released, "Pruned dead branch");
        }
    }
}

/// Renders a byte key for error messages.
fn display_key(key: &[u8]) -> String {
    String::from_utf8_lossy(key).into_owned()
}

impl Default for OleloTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a OleloTrie {
    type Item = (Vec<u8>, &'a [u8]);
    type IntoIter = PrefixWords<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W, M> Extend<(W, M)> for OleloTrie
where
    W: AsRef<[u8]>,
    M: Into<Vec<u8>>,
{
    fn extend<I: IntoIterator<Item = (W, M)>>(&mut self, entries: I) {
        for (word, meaning) in entries {
            self.insert(word, meaning);
        }
    }
}

impl<W, M> FromIterator<(W, M)> for OleloTrie
where
    W: AsRef<[u8]>,
    M: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (W, M)>>(entries: I) -> Self {
        let mut trie = Self::new();
        trie.extend(entries);
        trie
    }
}
