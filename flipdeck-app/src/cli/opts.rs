use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "flipdeck", version, about = "FlipDeck flashcard CLI/TUI")]
pub struct Cli {
    /// Deck file (defaults to the platform data dir)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Keep the deck in memory only; nothing is written to disk
    #[arg(long)]
    pub no_save: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Append one card to the deck
    Add(CardAdd),
    /// Print the deck in order
    List,
    /// Interactive study loop on stdin
    Study,
    /// Launch the terminal UI
    Tui,
}

#[derive(Debug, Args, Clone)]
pub struct CardAdd {
    #[arg(long)]
    pub question: String,
    #[arg(long)]
    pub answer: String,
}
