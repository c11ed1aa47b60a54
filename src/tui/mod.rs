//! TUI (Text User Interface) module for the portfolio
//!
//! Terminal-based UI built on ratatui/crossterm: tabbed sections, a live
//! typewriter headline, list filtering, and modal overlays.

pub mod app;
pub mod theme;
pub mod ui;

// Re-export the app entry point and theme helpers for commands and
// external use
pub use app::{run, App, ContactField, Overlay, Section};
pub use theme::{current_theme, Theme};
