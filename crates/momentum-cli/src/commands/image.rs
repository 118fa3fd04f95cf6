use std::path::Path;

use colored::*;

use momentum::data::SessionState;
use momentum::error::Result;
use momentum::export;

/// Render the current quote as a PNG card
pub fn run(output: &Path, open: bool) -> Result<()> {
    let session = SessionState::load();
    let quote = session.current_quote()?;

    if open {
        export::save_and_open_card(quote, output)?;
    } else {
        export::save_card(quote, output)?;
    }

    println!("{} {}", "Card written to".green(), output.display());
    Ok(())
}
