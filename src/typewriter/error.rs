//! Typewriter animation errors.

/// Errors raised when constructing an animation.
///
/// Construction is the only fallible step: once an animator exists, every
/// transition keeps its indices in range and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypewriterError {
    #[error("phrase list cannot be empty")]
    EmptyPhrases,

    #[error("phrase at index {index} is empty")]
    EmptyPhrase { index: usize },
}
