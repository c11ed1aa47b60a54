//! folio - terminal portfolio
//!
//! Entry point: parses the CLI, initializes logging, loads the content
//! catalog, and dispatches to a subcommand or the interactive TUI.

mod commands;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use folio::config::Config;
use folio::contact::ContactMessage;
use folio::content::Content;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Terminal portfolio: typewriter intro, project browser, skills chart, contact card"
)]
struct Cli {
    /// Load portfolio content from a JSON file instead of the built-in
    /// catalog
    #[arg(long, global = true, value_name = "PATH")]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive portfolio (the default when no command is
    /// given)
    Tui,
    /// Run the typewriter headline in the current terminal
    Type {
        /// Phrase to cycle (repeatable; defaults to the catalog phrases)
        #[arg(long = "phrase", value_name = "TEXT")]
        phrases: Vec<String>,
        /// Stop after this many full phrase cycles (0 = run until
        /// Ctrl-C)
        #[arg(long, default_value_t = 0)]
        cycles: u64,
    },
    /// List portfolio projects
    Projects {
        /// Only show projects carrying this tag
        #[arg(long, value_name = "TAG")]
        tag: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the skills chart
    Skills,
    /// Compose a contact message and print its mailto link
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        message: String,
        /// Also open the link with the system handler
        #[arg(long)]
        open: bool,
    },
    /// Show or set the color theme
    Theme {
        /// Theme name to activate (omit to print the current one)
        name: Option<String>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Add missing fields to the configuration file
    Migrate {
        /// Apply changes without prompting
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let content = load_content(cli.content.as_deref())?;

    match cli.command {
        None | Some(Commands::Tui) => {
            let config = Config::load()?;
            folio::tui::run(content, config)
        }
        Some(Commands::Type { phrases, cycles }) => {
            let config = Config::load()?;
            let phrases = if phrases.is_empty() {
                content.phrases.clone()
            } else {
                phrases
            };
            commands::typewriter::handle_run(phrases, config.typewriter.timings(), cycles)
        }
        Some(Commands::Projects { tag, json }) => {
            commands::projects::handle_list(&content, tag.as_deref(), json)
        }
        Some(Commands::Skills) => commands::skills::handle_show(&content),
        Some(Commands::Contact {
            name,
            email,
            subject,
            message,
            open,
        }) => {
            let message = ContactMessage {
                name,
                email,
                subject,
                message,
            };
            commands::contact::handle_send(&content, message, open)
        }
        Some(Commands::Theme { name }) => commands::config::handle_theme(name),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "folio", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn load_content(path: Option<&Path>) -> Result<Content> {
    match path {
        Some(path) => Ok(Content::load(path)?),
        None => Ok(Content::default()),
    }
}
