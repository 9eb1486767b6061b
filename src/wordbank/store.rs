//! In-memory frequency table
//!
//! The store is owned by whoever drives the session and handed to each
//! operation explicitly. Iteration order is unspecified.

use crate::core::Word;
use crate::error::{BankError, Result};
use rustc_hash::FxHashMap;

/// Mapping from word to the number of confirmed adds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyStore {
    counts: FxHashMap<String, u64>,
}

impl FrequencyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw entry as read back from the bank file
    ///
    /// A repeated word replaces the earlier count.
    pub(crate) fn insert_loaded(&mut self, word: String, count: u64) {
        self.counts.insert(word, count);
    }

    /// Add one to `word`'s count, inserting it at 1 if absent
    ///
    /// Returns the new count.
    ///
    /// # Errors
    ///
    /// Returns `BankError::CountOverflow` if the count is already at
    /// `u64::MAX`; the store is left unchanged.
    pub fn increment(&mut self, word: &Word) -> Result<u64> {
        let count = self
            .frequency(word.text())
            .checked_add(1)
            .ok_or_else(|| BankError::CountOverflow {
                word: word.text().to_string(),
            })?;
        self.counts.insert(word.text().to_string(), count);
        Ok(count)
    }

    /// Current count for `word`, 0 when absent
    #[must_use]
    pub fn frequency(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Look up `word` for a search
    ///
    /// A zero-valued entry is dropped from the store, so searching never
    /// leaves a zero count behind.
    pub fn search(&mut self, word: &Word) -> u64 {
        let count = self.frequency(word.text());
        if count == 0 {
            self.counts.remove(word.text());
        }
        count
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(word, count)` pairs in storage order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

impl<'a> FromIterator<(&'a str, u64)> for FrequencyStore {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (word, count) in iter {
            store.insert_loaded(word.to_string(), count);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn increment_inserts_then_counts_up() {
        let mut store = FrequencyStore::new();
        assert_eq!(store.increment(&word("hello")).unwrap(), 1);
        assert_eq!(store.increment(&word("hello")).unwrap(), 2);
        assert_eq!(store.frequency("hello"), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut store = FrequencyStore::new();
        store.increment(&word("Cat")).unwrap();
        store.increment(&word("cat")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.frequency("Cat"), 1);
    }

    #[test]
    fn increment_at_max_count_fails_without_change() {
        let mut store: FrequencyStore = [("cat", u64::MAX)].into_iter().collect();

        let err = store.increment(&word("cat")).unwrap_err();

        assert!(matches!(err, BankError::CountOverflow { word: ref name } if name == "cat"));
        assert_eq!(store.frequency("cat"), u64::MAX);
    }

    #[test]
    fn search_missing_word_leaves_no_entry() {
        let mut store: FrequencyStore = [("cat", 2)].into_iter().collect();
        assert_eq!(store.search(&word("dog")), 0);
        assert!(!store.contains("dog"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn search_drops_stray_zero_entry() {
        let mut store: FrequencyStore = [("cat", 0), ("dog", 4)].into_iter().collect();
        assert_eq!(store.search(&word("cat")), 0);
        assert!(!store.contains("cat"));
        assert_eq!(store.search(&word("dog")), 4);
        assert!(store.contains("dog"));
    }

    #[test]
    fn iter_yields_every_entry() {
        let store: FrequencyStore = [("apple", 3), ("pear", 5)].into_iter().collect();
        let mut entries: Vec<_> = store.iter().collect();
        entries.sort_unstable();
        assert_eq!(entries, vec![("apple", 3), ("pear", 5)]);
    }
}
