//! Word bank word representation
//!
//! A `Word` is at least three ASCII letters. Case is preserved, so `Cat` and
//! `cat` are distinct keys in the bank.

use std::fmt;
use thiserror::Error;

/// Minimum number of characters a word must have
pub const MIN_WORD_LEN: usize = 3;

/// Outcome of classifying a candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validation {
    Valid,
    TooShort,
    ContainsDigit,
    ContainsOtherInvalidCharacter,
}

/// Error type for rejected words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word is less than three characters long, please make sure it's a real word")]
    TooShort,
    #[error("Word contains integers, please make sure it's a real word")]
    ContainsDigit,
    #[error("Word contains unknown characters, please make sure it's a real word")]
    InvalidCharacter,
}

impl Validation {
    /// Convert into a `Result`, mapping every rejection to its `WordError`
    ///
    /// # Errors
    /// Returns the matching `WordError` for any variant other than `Valid`.
    pub const fn into_result(self) -> Result<(), WordError> {
        match self {
            Self::Valid => Ok(()),
            Self::TooShort => Err(WordError::TooShort),
            Self::ContainsDigit => Err(WordError::ContainsDigit),
            Self::ContainsOtherInvalidCharacter => Err(WordError::InvalidCharacter),
        }
    }
}

/// Classify a candidate word
///
/// Length is checked first. Characters are then scanned left to right and the
/// first offending one decides the result; a digit is always reported as
/// `ContainsDigit`, never as a generic invalid character.
///
/// # Examples
/// ```
/// use word_bank::core::{Validation, classify};
///
/// assert_eq!(classify("hello"), Validation::Valid);
/// assert_eq!(classify("hi"), Validation::TooShort);
/// assert_eq!(classify("ab3"), Validation::ContainsDigit);
/// assert_eq!(classify("a-b"), Validation::ContainsOtherInvalidCharacter);
/// ```
#[must_use]
pub fn classify(word: &str) -> Validation {
    if word.chars().count() < MIN_WORD_LEN {
        return Validation::TooShort;
    }

    for ch in word.chars() {
        if ch.is_ascii_digit() {
            return Validation::ContainsDigit;
        }
        if !ch.is_ascii_alphabetic() {
            return Validation::ContainsOtherInvalidCharacter;
        }
    }

    Validation::Valid
}

/// A validated word bank key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if `classify` rejects the text.
    ///
    /// # Examples
    /// ```
    /// use word_bank::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "Apple");
    ///
    /// assert!(Word::new("no").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into();
        classify(&text).into_result()?;
        Ok(Self(text))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
