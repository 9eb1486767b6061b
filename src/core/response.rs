//! Parsing of prompt responses
//!
//! Menu choices and Y/N confirmations are parsed into small enums; anything
//! that does not parse is a local rejection and the caller re-prompts.

/// Answer to a Y/N question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Parse a response that is exactly one character, `Y` or `N` in either case
    ///
    /// # Examples
    /// ```
    /// use word_bank::core::YesNo;
    ///
    /// assert_eq!(YesNo::parse("y"), Some(YesNo::Yes));
    /// assert_eq!(YesNo::parse("N"), Some(YesNo::No));
    /// assert_eq!(YesNo::parse("yes"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        match first.to_ascii_uppercase() {
            'Y' => Some(Self::Yes),
            'N' => Some(Self::No),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection (`1`-`4`)
    ///
    /// The whole token must be a base-10 integer; out-of-range numbers are
    /// rejected the same way as non-numeric input.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::List),
            3 => Some(Self::Search),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}
