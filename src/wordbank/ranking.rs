//! Descending-frequency ranking for listings
//!
//! Entries are inserted one at a time in front of the first entry with a
//! strictly smaller count. Equal counts keep their input order.

/// A ranked `(word, count)` pair
pub type RankedEntry<'a> = (&'a str, u64);

/// Rank entries by count, highest first
///
/// # Examples
/// ```
/// use word_bank::wordbank::rank;
///
/// let ranked = rank([("apple", 3), ("pear", 5), ("fig", 5)]);
/// assert_eq!(ranked, vec![("pear", 5), ("fig", 5), ("apple", 3)]);
/// ```
#[must_use]
pub fn rank<'a, I>(entries: I) -> Vec<RankedEntry<'a>>
where
    I: IntoIterator<Item = RankedEntry<'a>>,
{
    let mut ranked: Vec<RankedEntry<'a>> = Vec::new();

    for (word, count) in entries {
        let position = ranked
            .iter()
            .position(|&(_, existing)| existing < count)
            .unwrap_or(ranked.len());
        ranked.insert(position, (word, count));
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::FrequencyStore;

    #[test]
    fn empty_input_ranks_empty() {
        let ranked = rank(std::iter::empty());
        assert!(ranked.is_empty());
    }

    #[test]
    fn orders_by_descending_count() {
        let ranked = rank([("low", 1), ("high", 9), ("mid", 4)]);
        assert_eq!(ranked, vec![("high", 9), ("mid", 4), ("low", 1)]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank([("A", 5), ("B", 5), ("C", 5)]);
        assert_eq!(ranked, vec![("A", 5), ("B", 5), ("C", 5)]);
    }

    #[test]
    fn ties_keep_input_order_among_other_counts() {
        let ranked = rank([("fig", 5), ("apple", 3), ("pear", 5), ("kiwi", 3), ("plum", 7)]);
        assert_eq!(
            ranked,
            vec![
                ("plum", 7),
                ("fig", 5),
                ("pear", 5),
                ("apple", 3),
                ("kiwi", 3)
            ]
        );
    }

    #[test]
    fn matches_stable_sort() {
        let entries = [
            ("aaa", 2),
            ("bbb", 0),
            ("ccc", 2),
            ("ddd", 8),
            ("eee", 0),
            ("fff", 2),
            ("ggg", 8),
        ];
        let mut expected = entries.to_vec();
        expected.sort_by(|a, b| b.1.cmp(&a.1));

        assert_eq!(rank(entries), expected);
    }

    #[test]
    fn ranking_a_store_is_repeatable() {
        let store: FrequencyStore = [("apple", 3), ("pear", 5), ("fig", 5), ("plum", 1)]
            .into_iter()
            .collect();

        let first = rank(store.iter());
        let second = rank(store.iter());
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
        assert_eq!(first[3], ("plum", 1));
    }
}
