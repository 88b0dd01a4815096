//! Mauka Dictionary Library
//!
//! This library contains the core components of the Mauka Dictionary: a
//! prefix tree mapping words to their meanings, the flat text format used
//! to persist it, and the configuration and error layers shared with the
//! `mauka-dict` binary.
//!
//! # Architecture
//!
//! - [`data_structures::olelo_trie`] holds the trie and its record codec
//! - [`dictionary`] binds a trie to the file named in the configuration
//! - [`config`] loads layered settings from defaults, files and environment
//! - [`error`] defines the crate-wide error type and reporting

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Mauka Dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
