//! Error types for the word bank
//!
//! Validation rejections are not errors here: they are recovered by
//! re-prompting and live in `core::WordError`. `BankError` covers the
//! failures that end a session.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed entry in {} at line {line}: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Count for '{word}' cannot be incremented any further")]
    CountOverflow { word: String },

    #[error("Console I/O error: {0}")]
    Console(#[from] io::Error),

    #[error("Standard input closed while waiting for a response")]
    InputClosed,
}

impl BankError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BankError>;
