use colored::*;

use momentum::data::{FavoritesStore, JsonFileBackend, SessionState};
use momentum::error::Result;
use momentum::export;
use momentum::providers;
use momentum::resolver::{QuoteResolver, RequestTracker};

/// Fetch a new quote and make it the current one
pub fn run(
    provider_id: &str,
    base_url: Option<&str>,
    offline: bool,
    save: bool,
    copy: bool,
) -> Result<()> {
    let resolver = QuoteResolver::new(providers::by_id(provider_id, base_url)?);

    let tracker = RequestTracker::new();
    let ticket = tracker.begin();

    let resolved = if offline {
        resolver.fetch_offline()
    } else {
        eprintln!("Fetching from {}...", resolver.provider_name());
        resolver.fetch_quote()
    };

    if resolved.is_fallback() && !offline {
        eprintln!(
            "{}",
            "Provider unreachable, using an offline quote".yellow()
        );
    }

    // A result that has been superseded by a newer request must not
    // become the current quote.
    if tracker.is_current(ticket) {
        let mut session = SessionState::load();
        session.set_current(resolved.quote().clone());
        session.save()?;
    }

    println!("{}", resolved.quote());

    if save {
        let mut store = FavoritesStore::load(JsonFileBackend::new()?);
        if store.add(resolved.quote().clone())? {
            eprintln!("{}", "Saved to favorites".green());
        } else {
            eprintln!("{}", "Already in favorites".dimmed());
        }
    }

    if copy {
        export::copy_to_clipboard(resolved.quote())?;
        eprintln!("{}", "Copied to clipboard".green());
    }

    Ok(())
}
