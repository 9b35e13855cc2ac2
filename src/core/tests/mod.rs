//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Notation resolution tests (literal mappings, properties)
//! - Duplicate detection tests
//! - Type tests (BindingEntry, KeySequence)

#[cfg(test)]
mod notation_tests;
