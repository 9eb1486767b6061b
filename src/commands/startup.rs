//! Startup check for the bank file

use super::Console;
use crate::error::{BankError, Result};
use crate::output::formatters::{create_bank_prompt, created_bank_line, declined_bank_line};
use crate::wordbank::loader::create_empty;
use std::io::{BufRead, Write};
use std::path::Path;

/// Whether the session can go ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Startup {
    Ready,
    Declined,
}

/// Make sure the bank file exists, offering to create it when missing
///
/// # Errors
///
/// Returns an error if the file's existence cannot be checked, the file
/// cannot be created, or the console fails.
pub fn ensure_bank_file<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    bank_path: &Path,
) -> Result<Startup> {
    if bank_path
        .try_exists()
        .map_err(|e| BankError::io(bank_path, e))?
    {
        return Ok(Startup::Ready);
    }

    let name = bank_path.display().to_string();
    if console.confirm(&create_bank_prompt(&name))?.is_yes() {
        create_empty(bank_path)?;
        writeln!(console.output(), "{}", created_bank_line(&name))?;
        Ok(Startup::Ready)
    } else {
        writeln!(console.output(), "{}", declined_bank_line(&name))?;
        Ok(Startup::Declined)
    }
}
