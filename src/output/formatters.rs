//! Text of user-facing lines

/// Menu options, printed one per line before the choice prompt
pub const MENU_OPTIONS: [&str; 4] = [
    "1) Add a word / word frequency to the databank",
    "2) List the databank",
    "3) Search for a words frequency",
    "4) Exit",
];

pub const MENU_HEADER: &str = "Please choose one of the following options.";
pub const MENU_PROMPT: &str = "Please enter your choice: ";
pub const INVALID_CHOICE: &str = "Please enter a valid choice";
pub const INVALID_RESPONSE: &str = "Please enter a valid response (Y or N): ";
pub const ADD_PROMPT: &str = "What word would you like to add to the database? ";
pub const SEARCH_PROMPT: &str = "What word would you like to search for? ";
pub const FAREWELL: &str = "Thank you and see you next time!";

/// Listing and search line
#[must_use]
pub fn frequency_line(word: &str, count: u64) -> String {
    format!("{word} has frequency {count}")
}

/// Line printed after a confirmed add
#[must_use]
pub fn added_line(word: &str, count: u64) -> String {
    format!("'{word}' now has frequency {count}")
}

#[must_use]
pub fn confirm_add_prompt(word: &str) -> String {
    format!("Are you sure you would like to add '{word}' to the databank? (Y or N): ")
}

#[must_use]
pub fn create_bank_prompt(file_name: &str) -> String {
    format!(
        "Create file called {file_name} to store words and their respective frequencies? (Y or N): "
    )
}

#[must_use]
pub fn created_bank_line(file_name: &str) -> String {
    format!("Created file {file_name} successfully.")
}

#[must_use]
pub fn declined_bank_line(file_name: &str) -> String {
    format!("Didn't create file {file_name}, unable to continue.")
}
