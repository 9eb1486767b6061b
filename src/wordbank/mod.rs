//! Word bank storage
//!
//! The in-memory frequency table, its flat-file persistence and the ranking
//! used for listings.

pub mod loader;
mod ranking;
mod store;

pub use loader::DEFAULT_BANK_FILE;
pub use ranking::{RankedEntry, rank};
pub use store::FrequencyStore;
