//! Typewriter subcommand handler
//!
//! Runs the headline animation straight into the current terminal, with
//! no alternate screen: Ctrl-C (or a cycle limit) ends it.

use std::io::{self, Write};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use folio::typewriter::{self, TextSink, TickScheduler, TimerScheduler, Timings};

/// Upper bound on one sleep slice, so Ctrl-C stays responsive during the
/// long pauses.
const MAX_SLEEP: Duration = Duration::from_millis(50);

/// Sink that rewrites the current terminal line in place.
struct LineSink;

impl TextSink for LineSink {
    fn render(&mut self, text: &str) {
        // Carriage return + clear-to-end redraws the line without scrolling.
        print!("\r\x1b[K{}", text);
        let _ = io::stdout().flush();
    }
}

/// Run the typewriter against stdout.
///
/// Stops after `cycles` completed phrase cycles (`0` means run until
/// Ctrl-C).
pub fn handle_run(phrases: Vec<String>, timings: Timings, cycles: u64) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))?;

    let scheduler = Rc::new(TickScheduler::new());
    let handle = typewriter::start(
        phrases,
        timings,
        Box::new(LineSink),
        Rc::clone(&scheduler) as Rc<dyn TimerScheduler>,
    )?;

    while running.load(Ordering::SeqCst) {
        scheduler.pump(Instant::now());
        if cycles > 0 && handle.cycles() >= cycles {
            break;
        }
        if let Some(due) = scheduler.next_due() {
            let wait = due.saturating_duration_since(Instant::now());
            thread::sleep(wait.min(MAX_SLEEP));
        }
    }

    handle.stop();
    println!();
    Ok(())
}
