//! Projects subcommand handler

use anyhow::Result;

use folio::content::{filter_projects, Content, TAG_ALL};
use folio::tui::current_theme;

/// Print the project list, optionally filtered by tag, as text or JSON.
pub fn handle_list(content: &Content, tag: Option<&str>, json: bool) -> Result<()> {
    let filter = tag.unwrap_or(TAG_ALL);
    let projects = filter_projects(&content.projects, filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    let theme = current_theme();
    if projects.is_empty() {
        println!(
            "{}",
            theme.secondary_text(&format!("No projects tagged '{}'.", filter))
        );
        return Ok(());
    }

    for project in projects {
        println!(
            "{}  {}",
            theme.accent_text(&project.title),
            theme.secondary_text(&format!("[{}]", project.tags.join(", ")))
        );
        println!("    {}", theme.primary_text(&project.summary));
        if let Some(link) = &project.link {
            println!("    {}", theme.secondary_text(link));
        }
    }
    Ok(())
}
