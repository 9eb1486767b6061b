//! Display functions for command results

use super::formatters::{MENU_HEADER, MENU_OPTIONS, frequency_line};
use crate::wordbank::RankedEntry;
use colored::Colorize;
use std::io::{self, Write};

/// Print the main menu (without the choice prompt)
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", MENU_HEADER.bright_cyan().bold())?;
    for option in MENU_OPTIONS {
        writeln!(out, "{option}")?;
    }
    Ok(())
}

/// Print every ranked entry, one per line
///
/// An empty ranking prints nothing.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_ranking<W: Write>(out: &mut W, ranked: &[RankedEntry<'_>]) -> io::Result<()> {
    for &(word, count) in ranked {
        writeln!(out, "{}", frequency_line(word, count))?;
    }
    Ok(())
}

/// Print a search result
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_frequency<W: Write>(out: &mut W, word: &str, count: u64) -> io::Result<()> {
    let line = frequency_line(word, count);
    if count == 0 {
        writeln!(out, "{}", line.yellow())
    } else {
        writeln!(out, "{}", line.green())
    }
}

/// Print a recoverable rejection followed by a blank line
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_rejection<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.red())?;
    writeln!(out)
}

/// Print a success line
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.green().bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn ranking_prints_in_given_order() {
        let text = render(|out| print_ranking(out, &[("pear", 5), ("fig", 5), ("apple", 3)]));
        assert_eq!(
            text,
            "pear has frequency 5\nfig has frequency 5\napple has frequency 3\n"
        );
    }

    #[test]
    fn empty_ranking_prints_nothing() {
        let text = render(|out| print_ranking(out, &[]));
        assert!(text.is_empty());
    }

    #[test]
    fn menu_lists_four_options() {
        let text = render(|out| print_menu(out));
        assert!(text.starts_with(MENU_HEADER));
        for option in MENU_OPTIONS {
            assert!(text.contains(option));
        }
    }

    #[test]
    fn rejection_is_followed_by_blank_line() {
        let text = render(|out| print_rejection(out, "nope"));
        assert_eq!(text, "nope\n\n");
    }
}
