//! folio - terminal portfolio
//!
//! Library behind the `folio` binary. A personal portfolio rendered in
//! the terminal instead of a browser: an animated typewriter headline, a
//! browsable project catalog with tag filtering and a detail view, a
//! skills chart, a contact card that composes `mailto:` links, and a
//! persisted dark/light theme preference.
//!
//! # Architecture
//!
//! - `typewriter`: the headline animation - a pure state machine plus a
//!   cooperative timer scheduler and the start/stop driver
//! - `content`: the portfolio catalog (profile, phrases, projects,
//!   skills), built in or loaded from JSON
//! - `config`: TOML preferences (theme, animation delays) with migration
//! - `contact`: mailto link composition and the platform opener
//! - `tui`: the interactive ratatui application and themes

pub mod config;
pub mod contact;
pub mod content;
pub mod tui;
pub mod typewriter;

pub use config::Config;
pub use content::Content;
