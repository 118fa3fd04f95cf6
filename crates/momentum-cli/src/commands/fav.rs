use colored::*;

use crate::cli::FavCommands;
use momentum::data::{FavoritesStore, JsonFileBackend, SessionState, ToggleOutcome};
use momentum::error::Result;

/// Manage the favorites collection
pub fn run(command: FavCommands) -> Result<()> {
    let mut store = FavoritesStore::load(JsonFileBackend::new()?);

    match command {
        FavCommands::Add => {
            let session = SessionState::load();
            let quote = session.current_quote()?.clone();
            if store.add(quote)? {
                println!("{}", "Saved to favorites".green());
            } else {
                println!("{}", "Already in favorites".dimmed());
            }
        }

        FavCommands::Toggle => {
            let session = SessionState::load();
            let quote = session.current_quote()?.clone();
            match store.toggle(quote)? {
                ToggleOutcome::Added => println!("{}", "Saved to favorites".green()),
                ToggleOutcome::Removed => println!("{}", "Removed from favorites".yellow()),
            }
        }

        FavCommands::List => {
            if store.is_empty() {
                println!("{}", "No favorites yet".dimmed());
                return Ok(());
            }
            for (i, fav) in store.all().iter().enumerate() {
                println!(
                    "{} \u{201c}{}\u{201d} {}",
                    format!("{:>3}.", i + 1).dimmed(),
                    fav.content(),
                    format!("— {}", fav.author()).cyan()
                );
            }
        }

        FavCommands::Remove { content } => {
            if store.remove(&content)? {
                println!("{}", "Removed from favorites".yellow());
            } else {
                println!("{}", "Not in favorites".dimmed());
            }
        }
    }

    Ok(())
}
