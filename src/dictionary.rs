//! File-backed dictionary store.
//!
//! Binds an [`OleloTrie`] to the dictionary file named in the storage
//! configuration. Opening tolerates a missing file so the first run starts
//! with an empty dictionary.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::StorageConfig;
use crate::data_structures::olelo_trie::{OleloTrie, OleloTrieError};
use crate::error::MaukaResult;

/// A dictionary loaded from, and persisted to, a single file.
#[derive(Debug)]
pub struct DictionaryStore {
    trie: OleloTrie,
    path: PathBuf,
}

impl DictionaryStore {
    /// Opens the dictionary described by `storage`.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read. A missing file is logged
    /// and yields an empty store.
    pub fn open(storage: &StorageConfig) -> MaukaResult<Self> {
        let mut trie = OleloTrie::with_config(storage.trie_config());

        match trie.load(&storage.path) {
            Ok(_) => {}
            Err(OleloTrieError::SourceMissing(path)) => {
                warn!(path = %path.display(), "Dictionary file not found, starting empty");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Self {
            trie,
            path: storage.path.clone(),
        })
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &OleloTrie {
        &self.trie
    }

    /// Returns the underlying trie for modification.
    pub fn trie_mut(&mut self) -> &mut OleloTrie {
        &mut self.trie
    }

    /// Returns the dictionary file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the whole dictionary back to its file.
    ///
    /// Missing parent directories are created first.
    ///
    /// # Returns
    ///
    /// The number of records written.
    pub fn persist(&self) -> MaukaResult<usize> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let written = self.trie.save(&self.path)?;
        info!(path = %self.path.display(), words = written, "Dictionary persisted");
        Ok(written)
    }
}
