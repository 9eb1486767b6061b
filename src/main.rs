//! Word Bank - CLI
//!
//! Interactive menu by default, plus one-shot list/search/add subcommands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use word_bank::{
    commands::{Console, list_words, record_word, report_frequency, run_interactive},
    core::Word,
    output::print_success,
    output::formatters::added_line,
    wordbank::{DEFAULT_BANK_FILE, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_bank",
    about = "Keep a persistent word-frequency table",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word bank file (one WORD,COUNT entry per line)
    #[arg(short, long, global = true, default_value = DEFAULT_BANK_FILE)]
    file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Interactive,

    /// Print every word by descending frequency
    List,

    /// Print one word's frequency
    Search {
        /// Word to look up
        word: String,
    },

    /// Add a word without asking for confirmation
    Add {
        /// Word to add
        word: String,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to the interactive menu if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => run_interactive_command(&cli.file),
        Commands::List => run_list_command(&cli.file),
        Commands::Search { word } => run_search_command(&cli.file, &word),
        Commands::Add { word } => run_add_command(&cli.file, &word),
    }
}

fn run_interactive_command(path: &Path) -> Result<ExitCode> {
    let mut console = Console::stdio();
    let end = run_interactive(&mut console, path)
        .with_context(|| format!("Word bank session on {} failed", path.display()))?;

    Ok(ExitCode::from(end.exit_status()))
}

fn run_list_command(path: &Path) -> Result<ExitCode> {
    let store = load_from_file(path)?;
    list_words(&mut io::stdout(), &store)?;
    Ok(ExitCode::SUCCESS)
}

fn run_search_command(path: &Path, word: &str) -> Result<ExitCode> {
    let word = Word::new(word).with_context(|| format!("Cannot search for '{word}'"))?;
    let mut store = load_from_file(path)?;
    report_frequency(&mut io::stdout(), &mut store, &word)?;
    Ok(ExitCode::SUCCESS)
}

fn run_add_command(path: &Path, word: &str) -> Result<ExitCode> {
    let word = Word::new(word).with_context(|| format!("Cannot add '{word}'"))?;
    let mut store = load_from_file(path)?;
    let count = record_word(&mut store, &word, path)?;
    print_success(&mut io::stdout(), &added_line(word.text(), count))?;
    Ok(ExitCode::SUCCESS)
}
