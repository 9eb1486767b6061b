//! Command implementations

pub mod add;
pub mod console;
pub mod list;
pub mod search;
pub mod session;
pub mod startup;

pub use add::{AddOutcome, add_word, record_word};
pub use console::Console;
pub use list::list_words;
pub use search::{report_frequency, search_word};
pub use session::{SessionEnd, run_interactive, run_menu};
pub use startup::{Startup, ensure_bank_file};
