//! Core domain types for the word bank
//!
//! Pure validation and parsing with no I/O; everything here can be tested
//! without a console or a file.

mod response;
mod word;

pub use response::{MenuChoice, YesNo};
pub use word::{MIN_WORD_LEN, Validation, Word, WordError, classify};
