//! Test modules for the trie recommender.
//!
//! Crate-level suites that span more than one module:
//! - Configuration loading and validation
//! - Error formatting and conversions
//! - Property-based tests for the trie using proptest
//! - Shared fixtures and strategies

pub mod config_tests;
