use momentum::data::SessionState;
use momentum::error::Result;
use momentum::export;

/// Build a share link for the current quote
pub fn run(open: bool) -> Result<()> {
    let session = SessionState::load();
    let quote = session.current_quote()?;

    let link = if open {
        export::open_share_link(quote)?
    } else {
        export::share_link(quote)?
    };

    println!("{}", link);
    Ok(())
}
