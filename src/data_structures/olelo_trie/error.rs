// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Olelo Trie.
//!
//! This module defines the error types that can occur during Olelo Trie operations.

use std::path::PathBuf;

/// Errors that can occur in Olelo Trie operations.
#[derive(Debug, thiserror::Error)]
pub enum OleloTrieError {
    /// No path exists in the trie for the given word or prefix.
    #[error("Key \"{0}\" not found")]
    KeyNotFound(String),

    /// The path exists but does not terminate a stored word.
    #[error("Key \"{0}\" not found as a complete word")]
    NotACompleteWord(String),

    /// The dictionary file to load from does not exist.
    #[error("Dictionary source {0:?} does not exist")]
    SourceMissing(PathBuf),

    /// A word or meaning contains a line break and cannot be written as a record.
    #[error("Record for \"{0}\" contains a line break and cannot be saved")]
    EmbeddedNewline(String),

    /// The dictionary file could not be opened, read or written.
    #[error("I/O failure on {path:?}: {source}")]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
