//! Word Bank
//!
//! An interactive word-frequency table persisted to a flat `WORD,COUNT` file.
//!
//! # Quick Start
//!
//! ```rust
//! use word_bank::core::Word;
//! use word_bank::wordbank::{FrequencyStore, rank};
//!
//! let mut store = FrequencyStore::new();
//! store.increment(&Word::new("hello").unwrap()).unwrap();
//! store.increment(&Word::new("hello").unwrap()).unwrap();
//! store.increment(&Word::new("world").unwrap()).unwrap();
//!
//! let ranked = rank(store.iter());
//! assert_eq!(ranked[0], ("hello", 2));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Frequency store, persistence and ranking
pub mod wordbank;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
