use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "momentum")]
#[command(version)]
#[command(about = "Daily motivation quotes with favorites and sharing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a new quote and make it the current one
    Quote {
        /// Quote provider to use ("quotable" or "zenquotes")
        #[arg(short, long, default_value = "quotable")]
        provider: String,

        /// Override the provider's base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Skip the network and pick from the built-in list
        #[arg(long)]
        offline: bool,

        /// Also save the quote to favorites
        #[arg(short, long)]
        save: bool,

        /// Also copy the quote to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Manage favorite quotes
    #[command(subcommand)]
    Fav(FavCommands),

    /// Copy the current quote to the clipboard
    Copy,

    /// Render the current quote as a PNG card
    Image {
        /// Output path
        #[arg(short, long, default_value = "quote.png")]
        output: PathBuf,

        /// Open the rendered card afterwards
        #[arg(long)]
        open: bool,
    },

    /// Build a share link for the current quote
    Share {
        /// Open the link instead of just printing it
        #[arg(long)]
        open: bool,
    },
}

#[derive(Subcommand)]
pub enum FavCommands {
    /// Add the current quote to favorites
    Add,

    /// Toggle the current quote in favorites
    Toggle,

    /// List all favorites in the order they were added
    List,

    /// Remove a favorite by its exact content
    Remove {
        /// Content of the quote to remove
        content: String,
    },
}
