//! Storage configuration module.
//!
//! This module defines where the dictionary is persisted and how deletions
//! treat the trie structure.

use super::{ConfigResult, Validate};
use crate::data_structures::olelo_trie::OleloTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default dictionary file, relative to the working directory.
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.txt";

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Dictionary file loaded at startup and written after changes
    pub path: PathBuf,

    /// Whether deleting a word also removes the trie nodes it no longer needs
    pub prune_on_delete: bool,
}

impl StorageConfig {
    /// Builds the trie configuration matching these settings.
    pub fn trie_config(&self) -> OleloTrieConfig {
        OleloTrieConfig::new().with_prune_on_delete(self.prune_on_delete)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            prune_on_delete: false,
        }
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "storage.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
