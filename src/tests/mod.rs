//! Test modules for Helu.
//!
//! This module contains the crate-level test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Dictionary reading against real files
//! - Property-based tests for the trie using proptest

pub mod helu_trie_tests;
