//! End-to-end tests for the typewriter animation.
//!
//! Drives the public start/stop contract against the cooperative
//! scheduler and checks the rendered frame sequences from the outside.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use folio::typewriter::{
    self, AnimatorHandle, TextSink, TickScheduler, TimerScheduler, Timings, TypewriterError,
};

#[derive(Clone, Default)]
struct RecordingSink {
    frames: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    fn frames(&self) -> Vec<String> {
        self.frames.borrow().clone()
    }
}

impl TextSink for RecordingSink {
    fn render(&mut self, text: &str) {
        self.frames.borrow_mut().push(text.to_owned());
    }
}

fn start_animation(
    phrases: &[&str],
    scheduler: &Rc<TickScheduler>,
) -> (AnimatorHandle, RecordingSink) {
    let sink = RecordingSink::default();
    let handle = typewriter::start(
        phrases.iter().map(|p| p.to_string()).collect(),
        Timings::default(),
        Box::new(sink.clone()),
        Rc::clone(scheduler) as Rc<dyn TimerScheduler>,
    )
    .unwrap();
    (handle, sink)
}

/// Pump the scheduler timer by timer until `want` frames were rendered.
fn pump_frames(scheduler: &TickScheduler, sink: &RecordingSink, want: usize) {
    while sink.frames().len() < want {
        let due = scheduler.next_due().expect("animation went idle");
        scheduler.pump(due);
    }
}

#[test]
fn ab_scenario_renders_the_specified_sequence() {
    let scheduler = Rc::new(TickScheduler::starting_at(Instant::now()));
    let (_handle, sink) = start_animation(&["AB"], &scheduler);

    pump_frames(&scheduler, &sink, 10);
    assert_eq!(
        sink.frames(),
        vec!["A", "AB", "A", "", "A", "AB", "A", "", "A", "AB"]
    );
}

#[test]
fn two_phrases_alternate_without_repeating() {
    let scheduler = Rc::new(TickScheduler::starting_at(Instant::now()));
    let (handle, sink) = start_animation(&["A", "B"], &scheduler);

    pump_frames(&scheduler, &sink, 6);
    assert_eq!(sink.frames(), vec!["A", "", "B", "", "A", ""]);
    assert_eq!(handle.cycles(), 2);
}

#[test]
fn typing_prefixes_have_no_gaps() {
    let scheduler = Rc::new(TickScheduler::starting_at(Instant::now()));
    let (_handle, sink) = start_animation(&["abcd"], &scheduler);

    pump_frames(&scheduler, &sink, 4);
    assert_eq!(sink.frames(), vec!["a", "ab", "abc", "abcd"]);
}

#[test]
fn deleting_prefixes_descend_to_empty() {
    let scheduler = Rc::new(TickScheduler::starting_at(Instant::now()));
    let (_handle, sink) = start_animation(&["abc"], &scheduler);

    pump_frames(&scheduler, &sink, 6);
    let frames = sink.frames();
    assert_eq!(&frames[3..6], &["ab", "a", ""]);
}

#[test]
fn stop_prevents_any_further_render() {
    let scheduler = Rc::new(TickScheduler::starting_at(Instant::now()));
    let (handle, sink) = start_animation(&["hello world"], &scheduler);

    pump_frames(&scheduler, &sink, 3);
    handle.stop();
    let frames_at_stop = sink.frames();

    scheduler.pump(Instant::now() + Duration::from_secs(120));
    assert_eq!(sink.frames(), frames_at_stop);
    assert!(handle.is_stopped());
}

#[test]
fn empty_phrase_list_fails_fast_with_no_renders() {
    let scheduler = Rc::new(TickScheduler::starting_at(Instant::now()));
    let sink = RecordingSink::default();

    let err = typewriter::start(
        vec![],
        Timings::default(),
        Box::new(sink.clone()),
        Rc::clone(&scheduler) as Rc<dyn TimerScheduler>,
    )
    .unwrap_err();

    assert_eq!(err, TypewriterError::EmptyPhrases);
    assert!(sink.frames().is_empty());
    assert!(scheduler.is_idle());
}

#[test]
fn delays_follow_the_configured_cadence() {
    let start = Instant::now();
    let scheduler = Rc::new(TickScheduler::starting_at(start));
    let (_handle, sink) = start_animation(&["AB"], &scheduler);

    // First tick is due immediately.
    assert_eq!(scheduler.next_due(), Some(start));
    scheduler.pump(start); // renders "A"
    assert_eq!(scheduler.next_due(), Some(start + Duration::from_millis(100)));

    scheduler.pump(start + Duration::from_millis(100)); // renders "AB"
    scheduler.pump(start + Duration::from_millis(200)); // silent: hold full phrase
    assert_eq!(
        scheduler.next_due(),
        Some(start + Duration::from_millis(2200))
    );

    // The hold expires into deleting; the zero-delay flip and the first
    // deletion land in the same pump.
    scheduler.pump(start + Duration::from_millis(2200));
    assert_eq!(sink.frames().last().map(String::as_str), Some("A"));
    assert_eq!(
        scheduler.next_due(),
        Some(start + Duration::from_millis(2250))
    );

    scheduler.pump(start + Duration::from_millis(2250)); // renders ""
    scheduler.pump(start + Duration::from_millis(2300)); // silent: hold empty line
    assert_eq!(
        scheduler.next_due(),
        Some(start + Duration::from_millis(3300))
    );
}
