//! Interactive portfolio application.
//!
//! Sections mirror a single-page portfolio: Home (typewriter headline),
//! Projects (tag filter plus a detail overlay), Skills (chart), and
//! Contact (a mailto form). Animation timers and keyboard input share one
//! thread: the crossterm poll timeout is derived from the scheduler's
//! next due timer, so the typewriter keeps its cadence while the loop
//! stays idle between events.

use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::contact::{self, ContactMessage};
use crate::content::{available_tags, filter_projects, Content, Project, TAG_ALL};
use crate::tui::theme::Theme;
use crate::tui::ui;
use crate::typewriter::{self, AnimatorHandle, SharedLineSink, TickScheduler, TimerScheduler};

/// Poll timeout when no timer is pending.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Top-level portfolio sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// All sections in tab order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Tab label for this section.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::Projects => 1,
            Section::Skills => 2,
            Section::Contact => 3,
        }
    }
}

/// Overlay drawn above the active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Keyboard shortcut help.
    Help,
    /// Long-form description of the selected project.
    ProjectDetail,
    /// The composed mailto link.
    ContactLink,
}

/// Fields on the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

/// Application state for the portfolio TUI.
pub struct App {
    pub content: Content,
    pub theme: Theme,
    pub section: Section,
    pub overlay: Overlay,

    // Projects
    pub tags: Vec<String>,
    pub tag_index: usize,
    pub selected: usize,

    // Contact form
    pub contact: ContactMessage,
    pub field_index: usize,
    pub editing: bool,
    pub contact_link: Option<String>,

    config: Config,
    sink: SharedLineSink,
    scheduler: Rc<TickScheduler>,
    handle: Option<AnimatorHandle>,
    should_quit: bool,
}

impl App {
    pub fn new(content: Content, config: Config) -> Self {
        let theme = Theme::from_name(&config.theme).unwrap_or_default();
        let tags = available_tags(&content.projects);
        Self {
            content,
            theme,
            section: Section::default(),
            overlay: Overlay::default(),
            tags,
            tag_index: 0,
            selected: 0,
            contact: ContactMessage::default(),
            field_index: 0,
            editing: false,
            contact_link: None,
            config,
            sink: SharedLineSink::new(),
            scheduler: Rc::new(TickScheduler::new()),
            handle: None,
            should_quit: false,
        }
    }

    /// Current typewriter headline frame.
    pub fn headline(&self) -> String {
        self.sink.line()
    }

    /// Tag currently filtering the project list.
    pub fn active_tag(&self) -> &str {
        self.tags
            .get(self.tag_index)
            .map(String::as_str)
            .unwrap_or(TAG_ALL)
    }

    /// Projects visible under the active tag filter.
    pub fn filtered_projects(&self) -> Vec<&Project> {
        filter_projects(&self.content.projects, self.active_tag())
    }

    /// The project the list cursor is on, if any.
    pub fn selected_project(&self) -> Option<&Project> {
        self.filtered_projects().get(self.selected).copied()
    }

    /// Contact field the form cursor is on.
    pub fn active_field(&self) -> ContactField {
        ContactField::ALL[self.field_index % ContactField::ALL.len()]
    }

    /// Current text of a contact field.
    pub fn field_value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.contact.name,
            ContactField::Email => &self.contact.email,
            ContactField::Subject => &self.contact.subject,
            ContactField::Message => &self.contact.message,
        }
    }

    fn field_value_mut(&mut self) -> &mut String {
        match self.active_field() {
            ContactField::Name => &mut self.contact.name,
            ContactField::Email => &mut self.contact.email,
            ContactField::Subject => &mut self.contact.subject,
            ContactField::Message => &mut self.contact.message,
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl-C always quits, whatever mode the app is in.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if self.editing {
            self.handle_edit_key(key);
            return;
        }
        if self.overlay != Overlay::None {
            self.handle_overlay_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.set_section(self.section.next()),
            KeyCode::BackTab => self.set_section(self.section.prev()),
            KeyCode::Char('1') => self.set_section(Section::Home),
            KeyCode::Char('2') => self.set_section(Section::Projects),
            KeyCode::Char('3') => self.set_section(Section::Skills),
            KeyCode::Char('4') => self.set_section(Section::Contact),
            KeyCode::Char('t') => {
                self.toggle_theme();
                self.persist_theme();
            }
            KeyCode::Char('?') => self.overlay = Overlay::Help,
            _ => self.handle_section_key(key),
        }
    }

    fn handle_section_key(&mut self, key: KeyEvent) {
        match self.section {
            Section::Projects => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                KeyCode::Left | KeyCode::Char('h') => self.cycle_filter_back(),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('f') => self.cycle_filter(),
                KeyCode::Enter => self.open_detail(),
                _ => {}
            },
            Section::Contact => match key.code {
                KeyCode::Up => self.field_index = (self.field_index + ContactField::ALL.len() - 1) % ContactField::ALL.len(),
                KeyCode::Down => self.field_index = (self.field_index + 1) % ContactField::ALL.len(),
                KeyCode::Enter | KeyCode::Char('i') => self.editing = true,
                KeyCode::Char('s') => self.compose_contact_link(),
                _ => {}
            },
            Section::Home | Section::Skills => {}
        }
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) {
        match self.overlay {
            Overlay::ContactLink => match key.code {
                KeyCode::Char('o') => self.open_contact_link(),
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                    self.overlay = Overlay::None;
                }
                _ => {}
            },
            _ => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('?') => {
                    self.overlay = Overlay::None;
                }
                _ => {}
            },
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.editing = false,
            KeyCode::Backspace => {
                self.field_value_mut().pop();
            }
            KeyCode::Char(c) => self.field_value_mut().push(c),
            _ => {}
        }
    }

    fn set_section(&mut self, section: Section) {
        if self.section != section {
            debug!(section = section.title(), "section changed");
        }
        self.section = section;
    }

    fn select_next(&mut self) {
        let len = self.filtered_projects().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    fn select_prev(&mut self) {
        let len = self.filtered_projects().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    fn cycle_filter(&mut self) {
        self.tag_index = (self.tag_index + 1) % self.tags.len();
        self.selected = 0;
        debug!(tag = self.active_tag(), "project filter changed");
    }

    fn cycle_filter_back(&mut self) {
        self.tag_index = (self.tag_index + self.tags.len() - 1) % self.tags.len();
        self.selected = 0;
        debug!(tag = self.active_tag(), "project filter changed");
    }

    fn open_detail(&mut self) {
        if let Some(project) = self.selected_project() {
            debug!(slug = project.slug.as_str(), "project detail opened");
            self.overlay = Overlay::ProjectDetail;
        }
    }

    /// Flip the palette and record the choice in config (not yet saved).
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.config.theme = self.theme.name.to_string();
        debug!(theme = self.theme.name, "theme toggled");
    }

    fn persist_theme(&self) {
        if let Err(err) = self.config.save() {
            warn!("failed to persist theme preference: {}", err);
        }
    }

    fn compose_contact_link(&mut self) {
        self.contact_link = Some(self.contact.mailto_link(&self.content.profile.email));
        self.overlay = Overlay::ContactLink;
        debug!("contact link composed");
    }

    fn open_contact_link(&mut self) {
        if let Some(link) = &self.contact_link {
            if let Err(err) = contact::open_link(link) {
                warn!("failed to open email client: {}", err);
            }
        }
    }

    fn start_typewriter(&mut self) {
        match typewriter::start(
            self.content.phrases.clone(),
            self.config.typewriter.timings(),
            Box::new(self.sink.clone()),
            Rc::clone(&self.scheduler) as Rc<dyn TimerScheduler>,
        ) {
            Ok(handle) => self.handle = Some(handle),
            Err(err) => warn!("typewriter headline disabled: {}", err),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        self.start_typewriter();
        info!("portfolio tui started");

        let mut needs_render = true;
        while !self.should_quit {
            let now = Instant::now();
            if self.scheduler.pump(now) > 0 {
                needs_render = true;
            }
            if needs_render {
                terminal.draw(|f| ui::render(f, self))?;
                needs_render = false;
            }

            let timeout = self
                .scheduler
                .next_due()
                .map(|due| due.saturating_duration_since(now))
                .unwrap_or(POLL_INTERVAL)
                .min(POLL_INTERVAL);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                        needs_render = true;
                    }
                    Event::Resize(_, _) => needs_render = true,
                    _ => {}
                }
            }
        }

        if let Some(handle) = &self.handle {
            handle.stop();
        }
        Ok(())
    }
}

/// Run the portfolio TUI until the user quits.
///
/// Sets up raw mode and the alternate screen, restores the terminal on
/// the way out, and persists nothing except the theme preference (saved
/// when toggled).
pub fn run(content: Content, config: Config) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        anyhow::bail!("the interactive portfolio needs a terminal; try `folio projects` or `folio skills`");
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(content, config);
    let result = app.event_loop(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
