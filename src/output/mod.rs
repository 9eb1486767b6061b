//! Terminal output formatting
//!
//! Message text and colored printing for the console session.

pub mod display;
pub mod formatters;

pub use display::{print_frequency, print_menu, print_ranking, print_rejection, print_success};
