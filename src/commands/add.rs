//! Add command
//!
//! Prompts for a word, asks for confirmation, then increments and persists.

use super::Console;
use crate::core::Word;
use crate::error::Result;
use crate::output::formatters::{ADD_PROMPT, added_line, confirm_add_prompt};
use crate::output::print_success;
use crate::wordbank::FrequencyStore;
use crate::wordbank::loader::save_to_file;
use log::info;
use std::io::{BufRead, Write};
use std::path::Path;

/// Result of an interactive add
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The word was added; holds its new count
    Confirmed(u64),
    /// The user answered N; nothing changed
    Declined,
}

/// Interactive add: read a valid word, confirm, then record it
///
/// # Errors
///
/// Returns an error if the console fails or the bank file cannot be written.
pub fn add_word<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut FrequencyStore,
    bank_path: &Path,
) -> Result<AddOutcome> {
    let word = console.read_word(ADD_PROMPT)?;

    if !console.confirm(&confirm_add_prompt(word.text()))?.is_yes() {
        return Ok(AddOutcome::Declined);
    }

    let count = record_word(store, &word, bank_path)?;
    print_success(console.output(), &added_line(word.text(), count))?;
    Ok(AddOutcome::Confirmed(count))
}

/// Increment `word` and rewrite the bank file
///
/// # Errors
///
/// Returns `BankError::CountOverflow` if the count cannot grow, leaving the
/// store and file untouched, or `BankError::Io` if the bank file cannot be
/// written. The in-memory count has already been incremented at that point.
pub fn record_word(store: &mut FrequencyStore, word: &Word, bank_path: &Path) -> Result<u64> {
    let count = store.increment(word)?;
    save_to_file(bank_path, store)?;
    info!("Recorded '{word}' (now {count})");
    Ok(count)
}
