//! Section rendering for the portfolio TUI.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs,
    Wrap,
};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::{App, ContactField, Overlay, Section};

/// Caret appended to the typewriter headline.
const CARET: &str = "▌";

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_tabs(f, app, chunks[0]);
    match app.section {
        Section::Home => render_home(f, app, chunks[1]),
        Section::Projects => render_projects(f, app, chunks[1]),
        Section::Skills => render_skills(f, app, chunks[1]),
        Section::Contact => render_contact(f, app, chunks[1]),
    }
    render_footer(f, app, chunks[2]);

    match app.overlay {
        Overlay::Help => render_help(f, app),
        Overlay::ProjectDetail => render_project_detail(f, app),
        Overlay::ContactLink => render_contact_link(f, app),
        Overlay::None => {}
    }
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Section::ALL
        .iter()
        .map(|section| Line::from(section.title()))
        .collect();
    let selected = Section::ALL
        .iter()
        .position(|s| *s == app.section)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.content.profile.name.clone())
                .title_style(app.theme.accent_bold_style()),
        )
        .style(app.theme.text_secondary_style())
        .highlight_style(app.theme.accent_bold_style())
        .select(selected);
    f.render_widget(tabs, area);
}

fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Min(0),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mut lines = vec![
        Line::styled(
            app.content.profile.name.clone(),
            app.theme.accent_bold_style(),
        ),
        Line::default(),
        Line::from(vec![
            Span::styled(app.headline(), app.theme.text_style()),
            Span::styled(CARET, app.theme.accent_style()),
        ]),
        Line::default(),
        Line::styled(
            app.content.profile.tagline.clone(),
            app.theme.text_secondary_style(),
        ),
        Line::default(),
    ];
    for link in &app.content.profile.links {
        lines.push(Line::styled(link.clone(), app.theme.text_secondary_style()));
    }

    let home = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(home, vertical[1]);
}

fn render_projects(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    render_filter_bar(f, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let projects = app.filtered_projects();
    let width = columns[0].width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = projects
        .iter()
        .map(|project| {
            ListItem::new(Line::styled(
                truncate_width(&project.title, width),
                app.theme.text_style(),
            ))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Projects ({})", projects.len()))
                .title_style(app.theme.text_style()),
        )
        .highlight_style(
            app.theme
                .accent_bold_style()
                .add_modifier(Modifier::REVERSED),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !projects.is_empty() {
        state.select(Some(app.selected.min(projects.len() - 1)));
    }
    f.render_stateful_widget(list, columns[0], &mut state);

    render_project_preview(f, app, columns[1]);
}

fn render_filter_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled("filter: ", app.theme.text_secondary_style())];
    for (i, tag) in app.tags.iter().enumerate() {
        let style = if i == app.tag_index {
            app.theme.accent_bold_style()
        } else {
            app.theme.text_secondary_style()
        };
        spans.push(Span::styled(tag.clone(), style));
        if i + 1 < app.tags.len() {
            spans.push(Span::styled(" | ", app.theme.text_secondary_style()));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_project_preview(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Preview")
        .title_style(app.theme.text_style());

    let Some(project) = app.selected_project() else {
        let empty = Paragraph::new(Line::styled(
            format!("No projects tagged '{}'.", app.active_tag()),
            app.theme.text_secondary_style(),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        Line::styled(project.title.clone(), app.theme.accent_bold_style()),
        Line::styled(
            format!("[{}]", project.tags.join(", ")),
            app.theme.text_secondary_style(),
        ),
        Line::default(),
        Line::styled(project.summary.clone(), app.theme.text_style()),
        Line::default(),
    ];
    if !project.tech.is_empty() {
        lines.push(Line::styled(
            format!("tech: {}", project.tech.join(", ")),
            app.theme.text_secondary_style(),
        ));
    }
    if let Some(link) = &project.link {
        lines.push(Line::styled(link.clone(), app.theme.text_secondary_style()));
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        "Enter for details",
        app.theme.text_secondary_style(),
    ));

    let preview = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(preview, area);
}

fn render_skills(f: &mut Frame, app: &App, area: Rect) {
    let bars: Vec<Bar> = app
        .content
        .skills
        .iter()
        .map(|skill| {
            Bar::default()
                .value(skill.clamped_level())
                .label(Line::styled(skill.name.clone(), app.theme.text_style()))
                .style(app.theme.accent_style())
                .value_style(
                    app.theme
                        .accent_bold_style()
                        .add_modifier(Modifier::REVERSED),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Skills")
                .title_style(app.theme.text_style()),
        )
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(1)
        .max(100);
    f.render_widget(chart, area);
}

fn render_contact(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Contact {}", app.content.profile.email))
        .title_style(app.theme.text_style());

    let mut lines = vec![
        Line::styled(
            "Compose a message; it opens in your own email client.",
            app.theme.text_secondary_style(),
        ),
        Line::default(),
    ];
    for field in ContactField::ALL {
        let active = field == app.active_field();
        let label_style = if active {
            app.theme.accent_bold_style()
        } else {
            app.theme.text_secondary_style()
        };
        let mut spans = vec![
            Span::styled(format!("{:<9}", field.label()), label_style),
            Span::styled(app.field_value(field).to_string(), app.theme.text_style()),
        ];
        if active && app.editing {
            spans.push(Span::styled(CARET, app.theme.accent_style()));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        "Enter edit · s compose link",
        app.theme.text_secondary_style(),
    ));

    let form = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(form, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.section {
        Section::Projects => {
            "↑↓ select · ←→ filter · Enter details · Tab section · t theme · ? help · q quit"
        }
        Section::Contact => {
            "↑↓ field · Enter edit · s compose · Tab section · t theme · ? help · q quit"
        }
        _ => "Tab section · t theme · ? help · q quit",
    };
    f.render_widget(
        Paragraph::new(Line::styled(hints, app.theme.text_secondary_style())),
        area,
    );
}

fn render_help(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let rows = [
        ("Tab / Shift-Tab", "next / previous section"),
        ("1-4", "jump to section"),
        ("↑ ↓ / j k", "move selection"),
        ("← → / f", "cycle project filter"),
        ("Enter", "open project details / edit field"),
        ("s", "compose contact link"),
        ("t", "toggle dark/light theme"),
        ("?", "toggle this help"),
        ("q / Esc", "quit"),
    ];
    let mut lines = Vec::with_capacity(rows.len());
    for (keys, what) in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", keys), app.theme.accent_bold_style()),
            Span::styled(what, app.theme.text_style()),
        ]));
    }

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Help")
            .title_style(app.theme.accent_bold_style()),
    );
    f.render_widget(help, area);
}

fn render_project_detail(f: &mut Frame, app: &App) {
    let Some(project) = app.selected_project() else {
        return;
    };
    let area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::styled(
            format!("[{}]", project.tags.join(", ")),
            app.theme.text_secondary_style(),
        ),
        Line::default(),
    ];
    for paragraph in project.details.split("\n\n") {
        lines.push(Line::styled(paragraph.to_string(), app.theme.text_style()));
        lines.push(Line::default());
    }
    if !project.tech.is_empty() {
        lines.push(Line::styled(
            format!("tech: {}", project.tech.join(", ")),
            app.theme.text_secondary_style(),
        ));
    }
    if let Some(link) = &project.link {
        lines.push(Line::styled(link.clone(), app.theme.accent_style()));
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        "Esc to close",
        app.theme.text_secondary_style(),
    ));

    let detail = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(project.title.clone())
                .title_style(app.theme.accent_bold_style()),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(detail, area);
}

fn render_contact_link(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 40, f.area());
    f.render_widget(Clear, area);

    let link = app.contact_link.as_deref().unwrap_or_default();
    let lines = vec![
        Line::styled(
            "Your message as a mailto link:",
            app.theme.text_secondary_style(),
        ),
        Line::default(),
        Line::styled(link.to_string(), app.theme.accent_style()),
        Line::default(),
        Line::styled(
            "o open email client · Esc close",
            app.theme.text_secondary_style(),
        ),
    ];

    let modal = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Contact")
                .title_style(app.theme.accent_bold_style()),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(modal, area);
}

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1]);
    horizontal_layout[1]
}

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
