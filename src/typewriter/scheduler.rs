//! Single-shot timer scheduling.
//!
//! [`TimerScheduler`] is the seam between the animation driver and the
//! host event loop. [`TickScheduler`] is the crate's cooperative
//! implementation: timers are queued and fire only when the host pumps
//! the scheduler, so a callback can never interrupt other work and never
//! re-enters `schedule`, even for zero delays.

use std::cell::RefCell;
use std::time::{Duration, Instant};

/// Identifier for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Boxed single-shot timer callback.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Cooperative single-shot timer source.
///
/// Implementations must invoke each callback at most once, must not
/// invoke a callback from inside `schedule` (zero-delay timers are
/// deferred like any other), and must honor `cancel` for timers that have
/// not fired yet.
pub trait TimerScheduler {
    /// Schedule `callback` to run once, `delay` after the scheduler's
    /// current time.
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerId;

    /// Cancel a pending timer. No-op if it already fired or was
    /// cancelled.
    fn cancel(&self, id: TimerId);
}

struct PendingTimer {
    id: TimerId,
    due: Instant,
    callback: TimerCallback,
}

struct SchedulerInner {
    /// Last pumped time; new timers are scheduled relative to this.
    now: Instant,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

/// Pump-driven timer queue for single-threaded event loops.
///
/// The host advances time explicitly: [`pump`](Self::pump) fires every
/// timer due at or before the given instant, in due order, and
/// [`next_due`](Self::next_due) tells the host how long it may sleep or
/// poll for input. A callback may schedule or cancel timers; timers it
/// schedules with zero delay fire within the same pump, later ones wait
/// for the next.
pub struct TickScheduler {
    inner: RefCell<SchedulerInner>,
}

impl TickScheduler {
    /// Scheduler whose clock starts at the current instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Scheduler whose clock starts at `now`. Lets tests drive time
    /// deterministically.
    pub fn starting_at(now: Instant) -> Self {
        Self {
            inner: RefCell::new(SchedulerInner {
                now,
                next_id: 0,
                pending: Vec::new(),
            }),
        }
    }

    /// Due time of the earliest pending timer, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.inner.borrow().pending.iter().map(|t| t.due).min()
    }

    /// True when no timer is pending.
    pub fn is_idle(&self) -> bool {
        self.inner.borrow().pending.is_empty()
    }

    /// Advance the clock to `now` and fire every timer due by then, in
    /// due order. Returns the number of callbacks invoked.
    pub fn pump(&self, now: Instant) -> usize {
        {
            let mut inner = self.inner.borrow_mut();
            if now > inner.now {
                inner.now = now;
            }
        }

        let mut fired = 0;
        loop {
            // Take the earliest due timer out before invoking it, so the
            // callback is free to schedule or cancel.
            let callback = {
                let mut inner = self.inner.borrow_mut();
                let next = inner
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= now)
                    .min_by_key(|(_, t)| t.due)
                    .map(|(i, _)| i);
                match next {
                    Some(i) => inner.pending.remove(i).callback,
                    None => break,
                }
            };
            callback();
            fired += 1;
        }
        fired
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerScheduler for TickScheduler {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let id = TimerId(inner.next_id);
        inner.next_id += 1;
        let due = inner.now + delay;
        inner.pending.push(PendingTimer { id, due, callback });
        id
    }

    fn cancel(&self, id: TimerId) {
        self.inner
            .borrow_mut()
            .pending
            .retain(|timer| timer.id != id);
    }
}
