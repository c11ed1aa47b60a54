//! Integration test root.

mod cli_test;
mod contact_test;
mod content_test;
mod typewriter_test;
