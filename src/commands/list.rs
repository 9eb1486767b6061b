//! List command

use crate::error::Result;
use crate::output::print_ranking;
use crate::wordbank::{FrequencyStore, rank};
use std::io::Write;

/// Print every word in descending-frequency order
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list_words<W: Write>(out: &mut W, store: &FrequencyStore) -> Result<()> {
    let ranked = rank(store.iter());
    print_ranking(out, &ranked)?;
    Ok(())
}
