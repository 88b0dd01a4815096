//! Test modules for the Mauka Dictionary.
//!
//! This module contains crate-level testing infrastructure:
//! - Tests for configuration loading and validation
//! - Tests for error types and reporting
//! - Tests for the file-backed dictionary store
//! - Shared fixtures and proptest strategies


pub use test_utils::{create_test_dir, dictionary_entries_strategy, TestFixture};
