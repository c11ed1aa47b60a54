//! Skills subcommand handler

use anyhow::Result;

use folio::content::Content;
use folio::tui::current_theme;

/// Width of the printed skill bars.
const BAR_WIDTH: usize = 30;

/// Print the skills chart as ANSI bars.
pub fn handle_show(content: &Content) -> Result<()> {
    let theme = current_theme();
    let label_width = content
        .skills
        .iter()
        .map(|skill| skill.name.len())
        .max()
        .unwrap_or(0);

    for skill in &content.skills {
        println!(
            "{}  {}  {}",
            theme.primary_text(&format!("{:<width$}", skill.name, width = label_width)),
            theme.accent_text(&skill.bar(BAR_WIDTH)),
            theme.secondary_text(&format!("{:>3}", skill.clamped_level()))
        );
    }
    Ok(())
}
