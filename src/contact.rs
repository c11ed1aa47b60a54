//! Contact card: builds `mailto:` links for the user's email client.
//!
//! The crate never sends mail itself; it hands a fully composed message
//! to whatever client the platform opener resolves.

use std::process::{Command, ExitStatus};

/// Subject used when the sender leaves it blank.
pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";

/// Errors from handing a link to the platform opener.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("failed to launch '{opener}': {source}")]
    Launch {
        opener: &'static str,
        source: std::io::Error,
    },

    #[error("'{opener}' exited with {status}")]
    OpenerFailed {
        opener: &'static str,
        status: ExitStatus,
    },

    #[error("no link opener available on this platform")]
    UnsupportedPlatform,
}

/// A message composed on the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Build the `mailto:` link that hands this message to an email
    /// client.
    ///
    /// Subject and body are percent-encoded. A blank subject falls back
    /// to [`DEFAULT_SUBJECT`]; the body carries the sender's name and
    /// reply address above the message text.
    pub fn mailto_link(&self, recipient: &str) -> String {
        let subject = if self.subject.trim().is_empty() {
            DEFAULT_SUBJECT
        } else {
            self.subject.as_str()
        };
        let body = format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(subject),
            urlencoding::encode(&body)
        )
    }
}

/// Open `link` with the platform opener (`open` on macOS, `xdg-open`
/// elsewhere on Unix).
pub fn open_link(link: &str) -> Result<(), ContactError> {
    let opener = platform_opener()?;
    let status = Command::new(opener)
        .arg(link)
        .status()
        .map_err(|source| ContactError::Launch { opener, source })?;
    if !status.success() {
        return Err(ContactError::OpenerFailed { opener, status });
    }
    Ok(())
}

fn platform_opener() -> Result<&'static str, ContactError> {
    if cfg!(target_os = "macos") {
        Ok("open")
    } else if cfg!(unix) {
        Ok("xdg-open")
    } else {
        Err(ContactError::UnsupportedPlatform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello there".to_string(),
            message: "I liked the trie project.".to_string(),
        }
    }

    #[test]
    fn link_targets_the_recipient() {
        let link = message().mailto_link("me@example.dev");
        assert!(link.starts_with("mailto:me@example.dev?subject="));
    }

    #[test]
    fn subject_and_body_are_percent_encoded() {
        let link = message().mailto_link("me@example.dev");
        assert!(link.contains("subject=Hello%20there"));
        // Newlines in the body encode as %0A.
        assert!(link.contains("Name%3A%20Ada%0AEmail%3A%20ada%40example.com"));
        assert!(link.contains("%0A%0AMessage%3A%0AI%20liked%20the%20trie%20project."));
    }

    #[test]
    fn blank_subject_falls_back_to_the_default() {
        let mut msg = message();
        msg.subject = "   ".to_string();
        let link = msg.mailto_link("me@example.dev");
        assert!(link.contains("subject=Portfolio%20Contact"));
    }

    #[test]
    fn empty_message_still_produces_a_well_formed_link() {
        let link = ContactMessage::default().mailto_link("me@example.dev");
        assert!(link.starts_with("mailto:me@example.dev?subject=Portfolio%20Contact&body="));
    }
}
