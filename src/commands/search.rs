//! Search command

use super::Console;
use crate::core::Word;
use crate::error::Result;
use crate::output::formatters::SEARCH_PROMPT;
use crate::output::print_frequency;
use crate::wordbank::FrequencyStore;
use std::io::{BufRead, Write};

/// Interactive search: read a valid word and print its frequency
///
/// # Errors
///
/// Returns an error if the console fails.
pub fn search_word<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut FrequencyStore,
) -> Result<u64> {
    let word = console.read_word(SEARCH_PROMPT)?;
    report_frequency(console.output(), store, &word)
}

/// Look up `word` and print the result; a zero count leaves no entry behind
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn report_frequency<W: Write>(
    out: &mut W,
    store: &mut FrequencyStore,
    word: &Word,
) -> Result<u64> {
    let count = store.search(word);
    print_frequency(out, word.text(), count)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::console::tests::{scripted, transcript};

    #[test]
    fn finds_existing_word() {
        let mut store: FrequencyStore = [("cat", 2)].into_iter().collect();
        let mut console = scripted("cat\n");

        assert_eq!(search_word(&mut console, &mut store).unwrap(), 2);
        assert!(transcript(console).contains("cat has frequency 2"));
    }

    #[test]
    fn unknown_word_reports_zero_and_is_not_stored() {
        let mut store: FrequencyStore = [("cat", 2)].into_iter().collect();
        let mut console = scripted("ghost\n");

        assert_eq!(search_word(&mut console, &mut store).unwrap(), 0);
        assert!(!store.contains("ghost"));
        assert_eq!(store.len(), 1);
        assert!(transcript(console).contains("ghost has frequency 0"));
    }

    #[test]
    fn invalid_word_reprompts() {
        let mut store = FrequencyStore::new();
        let mut console = scripted("x1 9lives owl\n");

        assert_eq!(search_word(&mut console, &mut store).unwrap(), 0);
        let text = transcript(console);
        assert!(text.contains("less than three characters"));
        assert!(text.contains("contains integers"));
        assert_eq!(text.matches(SEARCH_PROMPT).count(), 3);
    }

    #[test]
    fn search_is_case_sensitive() {
        let mut store: FrequencyStore = [("Cat", 4)].into_iter().collect();
        let mut out = Vec::new();
        let word = Word::new("cat").unwrap();

        assert_eq!(report_frequency(&mut out, &mut store, &word).unwrap(), 0);
        assert_eq!(store.frequency("Cat"), 4);
    }
}
