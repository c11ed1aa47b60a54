//! Contact subcommand handler

use anyhow::Result;

use folio::contact::{self, ContactMessage};
use folio::content::Content;
use folio::tui::current_theme;

/// Print the composed mailto link, optionally handing it to the system
/// opener.
pub fn handle_send(content: &Content, message: ContactMessage, open: bool) -> Result<()> {
    let link = message.mailto_link(&content.profile.email);
    let theme = current_theme();
    println!("{}", theme.primary_text(&link));

    if open {
        contact::open_link(&link)?;
        println!("{}", theme.success_text("Opened your email client."));
    }
    Ok(())
}
