//! Interactive menu session
//!
//! Text-based menu loop: add, list, search, exit.

use super::{AddOutcome, Console, Startup, add_word, ensure_bank_file, list_words, search_word};
use crate::core::MenuChoice;
use crate::error::Result;
use crate::output::formatters::{FAREWELL, INVALID_CHOICE, MENU_PROMPT};
use crate::output::{print_menu, print_rejection};
use crate::wordbank::FrequencyStore;
use crate::wordbank::loader::load_from_file;
use log::debug;
use std::io::{BufRead, Write};
use std::path::Path;

/// How an interactive run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose Exit
    Finished,
    /// The user refused to create the missing bank file
    BankRefused,
}

impl SessionEnd {
    /// Process exit status for this ending
    #[must_use]
    pub const fn exit_status(self) -> u8 {
        match self {
            Self::Finished => 0,
            Self::BankRefused => 1,
        }
    }
}

/// Run the full interactive program against `bank_path`
///
/// Checks for the bank file, loads it, then runs the menu loop until Exit.
///
/// # Errors
///
/// Returns an error if the bank cannot be loaded or saved, or if the console
/// fails (including standard input closing mid-session).
pub fn run_interactive<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    bank_path: &Path,
) -> Result<SessionEnd> {
    if ensure_bank_file(console, bank_path)? == Startup::Declined {
        return Ok(SessionEnd::BankRefused);
    }

    let mut store = load_from_file(bank_path)?;
    run_menu(console, &mut store, bank_path)?;
    Ok(SessionEnd::Finished)
}

/// Menu loop over an already loaded store
///
/// # Errors
///
/// Same as [`run_interactive`].
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut FrequencyStore,
    bank_path: &Path,
) -> Result<()> {
    loop {
        let choice = read_choice(console)?;
        debug!("Menu choice: {choice:?}");

        match choice {
            MenuChoice::Add => match add_word(console, store, bank_path)? {
                AddOutcome::Confirmed(count) => debug!("Add confirmed, count {count}"),
                AddOutcome::Declined => debug!("Add declined"),
            },
            MenuChoice::List => list_words(console.output(), store)?,
            MenuChoice::Search => {
                search_word(console, store)?;
            }
            MenuChoice::Exit => break,
        }
        writeln!(console.output())?;
    }

    writeln!(console.output(), "{FAREWELL}")?;
    Ok(())
}

/// Show the menu until a valid choice is entered
fn read_choice<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<MenuChoice> {
    loop {
        print_menu(console.output())?;
        let input = console.prompt(MENU_PROMPT)?;
        writeln!(console.output())?;

        match MenuChoice::parse(&input) {
            Some(choice) => return Ok(choice),
            None => print_rejection(console.output(), INVALID_CHOICE)?,
        }
    }
}
