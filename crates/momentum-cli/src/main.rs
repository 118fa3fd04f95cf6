//! Momentum CLI — daily motivation quotes in the terminal

mod cli;
mod commands;

use clap::Parser;
use colored::*;

use cli::{Cli, Commands};
use momentum::error::QuoteError;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quote {
            provider,
            base_url,
            offline,
            save,
            copy,
        } => commands::quote::run(&provider, base_url.as_deref(), offline, save, copy),
        Commands::Fav(cmd) => commands::fav::run(cmd),
        Commands::Copy => commands::copy::run(),
        Commands::Image { output, open } => commands::image::run(&output, open),
        Commands::Share { open } => commands::share::run(open),
    };

    if let Err(e) = result {
        match e {
            QuoteError::NoQuote => {
                eprintln!("{}", e.to_string().yellow());
                eprintln!("Run {} to fetch one.", "momentum quote".cyan());
            }
            other => eprintln!("{} {}", "Error:".red(), other),
        }
        std::process::exit(1);
    }
}
