//! Typewriter animation state machine.
//!
//! The animator owns a fixed list of phrases and walks an infinite
//! type / hold / delete / hold cycle one step at a time. Each call to
//! [`Animator::tick`] applies exactly one transition and reports what to
//! render (if anything) together with the delay before the next tick.
//!
//! The machine is deliberately pure: it never touches a clock, a sink, or
//! a scheduler. Driving it on a timer is the job of
//! [`driver`](crate::typewriter::driver).

use std::time::Duration;

use super::error::TypewriterError;

/// Animation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Appending one character per tick.
    #[default]
    Typing,
    /// Removing one character per tick.
    Deleting,
    /// Holding the fully typed phrase on screen.
    PausedFull,
    /// Holding the empty line before the next phrase.
    PausedEmpty,
}

/// Per-transition delays.
///
/// Defaults match the classic cadence: 100ms per typed character, 50ms per
/// deleted character, a 2s hold on the full phrase and a 1s hold on the
/// empty line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay after typing a character.
    pub type_delay: Duration,
    /// Delay after deleting a character.
    pub delete_delay: Duration,
    /// Hold once the phrase is fully typed.
    pub full_pause: Duration,
    /// Hold once the phrase is fully deleted.
    pub empty_pause: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            delete_delay: Duration::from_millis(50),
            full_pause: Duration::from_millis(2000),
            empty_pause: Duration::from_millis(1000),
        }
    }
}

/// Outcome of a single tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Text to render, if this transition produced output.
    pub output: Option<String>,
    /// Delay before the next tick should fire.
    pub delay: Duration,
}

/// The typewriter state machine.
///
/// State is a single owned record: the phrase list (immutable after
/// construction), the current phrase index, the number of characters
/// currently rendered, and the mode. `char_count` counts Unicode scalar
/// values, not bytes, so multi-byte phrases type one visible character at
/// a time.
#[derive(Debug)]
pub struct Animator {
    phrases: Vec<String>,
    phrase_index: usize,
    char_count: usize,
    mode: Mode,
    timings: Timings,
    cycles: u64,
}

impl Animator {
    /// Create an animator over `phrases`.
    ///
    /// # Errors
    /// Returns [`TypewriterError::EmptyPhrases`] for an empty list and
    /// [`TypewriterError::EmptyPhrase`] when any phrase is the empty
    /// string.
    pub fn new(phrases: Vec<String>, timings: Timings) -> Result<Self, TypewriterError> {
        if phrases.is_empty() {
            return Err(TypewriterError::EmptyPhrases);
        }
        if let Some(index) = phrases.iter().position(|p| p.is_empty()) {
            return Err(TypewriterError::EmptyPhrase { index });
        }
        Ok(Self {
            phrases,
            phrase_index: 0,
            char_count: 0,
            mode: Mode::Typing,
            timings,
            cycles: 0,
        })
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the phrase currently being typed or deleted.
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Number of characters currently rendered.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// The phrase currently being typed or deleted.
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    /// Number of full type+delete cycles completed so far.
    ///
    /// Increments when a phrase has been fully typed and fully deleted
    /// again, at the moment the machine advances to the next phrase.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Apply one transition.
    ///
    /// Typing and deleting transitions produce output; the pause
    /// transitions only change mode. The returned delay is how long the
    /// caller should wait before ticking again. There is no terminal
    /// state: `tick` always schedules a next step.
    pub fn tick(&mut self) -> Tick {
        match self.mode {
            Mode::Typing => {
                let len = self.current_phrase().chars().count();
                if self.char_count < len {
                    self.char_count += 1;
                    Tick {
                        output: Some(self.rendered_prefix()),
                        delay: self.timings.type_delay,
                    }
                } else {
                    self.mode = Mode::PausedFull;
                    Tick {
                        output: None,
                        delay: self.timings.full_pause,
                    }
                }
            }
            Mode::PausedFull => {
                self.mode = Mode::Deleting;
                Tick {
                    output: None,
                    delay: Duration::ZERO,
                }
            }
            Mode::Deleting => {
                if self.char_count > 0 {
                    self.char_count -= 1;
                    Tick {
                        output: Some(self.rendered_prefix()),
                        delay: self.timings.delete_delay,
                    }
                } else {
                    self.mode = Mode::PausedEmpty;
                    Tick {
                        output: None,
                        delay: self.timings.empty_pause,
                    }
                }
            }
            Mode::PausedEmpty => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.cycles += 1;
                self.mode = Mode::Typing;
                Tick {
                    output: None,
                    delay: Duration::ZERO,
                }
            }
        }
    }

    /// First `char_count` characters of the current phrase.
    fn rendered_prefix(&self) -> String {
        self.current_phrase().chars().take(self.char_count).collect()
    }
}
