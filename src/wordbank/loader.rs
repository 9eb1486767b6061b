//! Word bank file loading and saving
//!
//! The bank is plain text, one `WORD,COUNT` line per entry with no header.
//! Everything before the first comma is the word; the rest is a base-10 count.

use super::FrequencyStore;
use crate::error::{BankError, Result};
use log::{debug, trace};
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Default bank file name, resolved against the working directory
pub const DEFAULT_BANK_FILE: &str = "word_bank.txt";

/// Load a word bank from a file
///
/// A missing or empty file yields an empty store. Blank lines are skipped.
///
/// # Errors
///
/// Returns `BankError::Io` if the file exists but cannot be read, and
/// `BankError::Malformed` for a line with no comma, an empty word or an
/// unparsable count.
///
/// # Examples
/// ```no_run
/// use word_bank::wordbank::loader::load_from_file;
///
/// let store = load_from_file("word_bank.txt").unwrap();
/// println!("Loaded {} words", store.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<FrequencyStore> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No bank at {}, starting empty", path.display());
            return Ok(FrequencyStore::new());
        }
        Err(e) => return Err(BankError::io(path, e)),
    };

    let store = parse_bank(&content, path)?;
    debug!("Loaded {} entries from {}", store.len(), path.display());
    Ok(store)
}

/// Parse bank file contents; `path` is only used for error reporting
///
/// # Errors
///
/// Returns `BankError::Malformed` for the first bad line: no comma, an empty
/// word, or a count that is not a non-negative integer.
pub fn parse_bank(content: &str, path: &Path) -> Result<FrequencyStore> {
    let mut store = FrequencyStore::new();

    for (index, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        trace!("line: {line}");

        let malformed = |reason: String| BankError::Malformed {
            path: path.to_path_buf(),
            line: index + 1,
            reason,
        };

        let (word, count) = line
            .split_once(',')
            .ok_or_else(|| malformed(format!("missing ',' separator in {line:?}")))?;
        if word.is_empty() {
            return Err(malformed(format!("empty word in {line:?}")));
        }
        let count = count
            .parse::<u64>()
            .map_err(|e| malformed(format!("invalid count {count:?}: {e}")))?;

        store.insert_loaded(word.to_string(), count);
    }

    Ok(store)
}

/// Render a store in bank file format
///
/// Line order follows the store's iteration order.
#[must_use]
pub fn render_bank(store: &FrequencyStore) -> String {
    let mut output = String::new();
    for (word, count) in store.iter() {
        // Writing into a String cannot fail
        let _ = writeln!(output, "{word},{count}");
    }
    output
}

/// Truncate `path` and write every entry of `store` to it
///
/// # Errors
///
/// Returns `BankError::Io` if the file cannot be written.
pub fn save_to_file<P: AsRef<Path>>(path: P, store: &FrequencyStore) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_bank(store)).map_err(|e| BankError::io(path, e))?;
    debug!("Wrote {} entries to {}", store.len(), path.display());
    Ok(())
}

/// Create an empty bank file, truncating any existing one
///
/// # Errors
///
/// Returns `BankError::Io` if the file cannot be created.
pub fn create_empty<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    File::create(path).map_err(|e| BankError::io(path, e))?;
    debug!("Created empty bank at {}", path.display());
    Ok(())
}
