//! Animation driver: wires the state machine to a sink and a scheduler.
//!
//! [`start`] validates the phrase list, creates the animator, and chains
//! single-shot timers through a [`TimerScheduler`]: each fired tick
//! renders to the [`TextSink`] (when the transition produces output) and
//! schedules exactly one follow-up timer. At any instant at most one
//! timer is pending, so the animation state has a single mutator by
//! construction.
//!
//! The returned [`AnimatorHandle`] is the only way to end the loop:
//! [`AnimatorHandle::stop`] cancels the pending timer and marks the
//! animation stopped, after which no further render can occur.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::debug;

use super::animator::{Animator, Timings};
use super::error::TypewriterError;
use super::scheduler::{TimerId, TimerScheduler};

/// Destination for rendered animation frames.
///
/// `render` is synchronous and side-effect only; the driver never reads
/// anything back. It is called once per transition that produces output.
pub trait TextSink {
    fn render(&mut self, text: &str);
}

/// Sink that keeps the latest frame in shared memory.
///
/// The TUI holds a clone and reads the current line on every draw.
#[derive(Debug, Clone, Default)]
pub struct SharedLineSink {
    line: Rc<RefCell<String>>,
}

impl SharedLineSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered frame.
    pub fn line(&self) -> String {
        self.line.borrow().clone()
    }
}

impl TextSink for SharedLineSink {
    fn render(&mut self, text: &str) {
        *self.line.borrow_mut() = text.to_owned();
    }
}

struct DriverState {
    animator: Animator,
    sink: Box<dyn TextSink>,
    scheduler: Rc<dyn TimerScheduler>,
    pending: Option<TimerId>,
    stopped: bool,
}

/// Handle to a running animation.
///
/// The animation lives as long as its handle: timer callbacks hold only a
/// weak reference, so dropping the handle lets the chain end at the next
/// tick without rendering. Call [`stop`](Self::stop) to end the loop
/// immediately and cancel the pending timer.
pub struct AnimatorHandle {
    state: Rc<RefCell<DriverState>>,
}

impl std::fmt::Debug for AnimatorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatorHandle").finish_non_exhaustive()
    }
}

/// Start animating `phrases` into `sink`, ticking on `scheduler`.
///
/// The first tick is scheduled at zero delay; no render happens inside
/// this call. Fails fast without creating any animation state when the
/// phrase list is invalid.
///
/// # Errors
/// [`TypewriterError::EmptyPhrases`] for an empty list,
/// [`TypewriterError::EmptyPhrase`] when a phrase is the empty string.
pub fn start(
    phrases: Vec<String>,
    timings: Timings,
    sink: Box<dyn TextSink>,
    scheduler: Rc<dyn TimerScheduler>,
) -> Result<AnimatorHandle, TypewriterError> {
    let animator = Animator::new(phrases, timings)?;
    debug!("starting typewriter animation");
    let state = Rc::new(RefCell::new(DriverState {
        animator,
        sink,
        scheduler,
        pending: None,
        stopped: false,
    }));
    schedule_next(&state, Duration::ZERO);
    Ok(AnimatorHandle { state })
}

fn schedule_next(state: &Rc<RefCell<DriverState>>, delay: Duration) {
    let weak = Rc::downgrade(state);
    let scheduler = state.borrow().scheduler.clone();
    let id = scheduler.schedule(delay, Box::new(move || run_tick(&weak)));
    state.borrow_mut().pending = Some(id);
}

fn run_tick(weak: &Weak<RefCell<DriverState>>) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let delay = {
        let mut driver = state.borrow_mut();
        if driver.stopped {
            return;
        }
        driver.pending = None;
        let tick = driver.animator.tick();
        if let Some(text) = &tick.output {
            driver.sink.render(text);
        }
        tick.delay
    };
    schedule_next(&state, delay);
}

impl AnimatorHandle {
    /// Stop the animation.
    ///
    /// Cancels the pending timer so no further tick fires and no further
    /// render occurs. Idempotent: calling it again is a no-op.
    pub fn stop(&self) {
        let (scheduler, pending) = {
            let mut driver = self.state.borrow_mut();
            if driver.stopped {
                return;
            }
            driver.stopped = true;
            (driver.scheduler.clone(), driver.pending.take())
        };
        if let Some(id) = pending {
            scheduler.cancel(id);
        }
        debug!("typewriter animation stopped");
    }

    /// True once [`stop`](Self::stop) has been called.
    pub fn is_stopped(&self) -> bool {
        self.state.borrow().stopped
    }

    /// Number of full type+delete cycles completed so far.
    pub fn cycles(&self) -> u64 {
        self.state.borrow().animator.cycles()
    }
}
