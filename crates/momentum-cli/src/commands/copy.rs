use colored::*;

use momentum::data::SessionState;
use momentum::error::Result;
use momentum::export;

/// Copy the current quote to the clipboard
pub fn run() -> Result<()> {
    let session = SessionState::load();
    let quote = session.current_quote()?;

    export::copy_to_clipboard(quote)?;
    println!("{}", "Copied to clipboard".green());
    Ok(())
}
