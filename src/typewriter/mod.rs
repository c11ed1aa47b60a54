//! Typewriter text animation.
//!
//! Simulates someone typing and deleting a rotating set of phrases: each
//! phrase is typed character by character, held, deleted character by
//! character, held again, then the next phrase begins, forever.
//!
//! # Architecture
//!
//! - `animator`: the pure state machine (`Typing` → `PausedFull` →
//!   `Deleting` → `PausedEmpty` → next phrase), advanced one transition
//!   per [`Animator::tick`]
//! - `scheduler`: the [`TimerScheduler`] seam and [`TickScheduler`], a
//!   pump-driven single-shot timer queue for single-threaded event loops
//! - `driver`: [`start`]/[`AnimatorHandle::stop`], chaining one pending
//!   timer at a time so the state has a single mutator by construction
//!
//! # Usage
//!
//! ```
//! use std::rc::Rc;
//! use folio::typewriter::{self, SharedLineSink, TickScheduler, TimerScheduler, Timings};
//!
//! let sink = SharedLineSink::new();
//! let scheduler = Rc::new(TickScheduler::new());
//! let handle = typewriter::start(
//!     vec!["Hello".to_string()],
//!     Timings::default(),
//!     Box::new(sink.clone()),
//!     Rc::clone(&scheduler) as Rc<dyn TimerScheduler>,
//! )
//! .unwrap();
//!
//! // The host pumps the scheduler from its event loop.
//! let due = scheduler.next_due().unwrap();
//! scheduler.pump(due);
//! assert_eq!(sink.line(), "H");
//!
//! handle.stop();
//! ```

pub mod animator;
pub mod driver;
pub mod error;
pub mod scheduler;

pub use animator::{Animator, Mode, Tick, Timings};
pub use driver::{start, AnimatorHandle, SharedLineSink, TextSink};
pub use error::TypewriterError;
pub use scheduler::{TickScheduler, TimerCallback, TimerId, TimerScheduler};
