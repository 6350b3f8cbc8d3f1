//! Rotating status line shown while a search is in flight.
//!
//! The backend reports no real progress, so the UI cycles a fixed list of
//! six stage descriptions on a 3 second interval. The rotation itself is a
//! plain state machine; [`start_rotation`] drives it with a
//! [`gloo_timers::callback::Interval`] whose handle cancels the timer on
//! drop, so the caller stops the rotation by dropping the handle once the
//! request resolves.

use gloo_timers::callback::Interval;
use leptos::prelude::{Set, WriteSignal};

/// Stage descriptions, shown in order and wrapped circularly.
pub const STATUS_STEPS: [&str; 6] = [
    "Initializing Neural Synthesizer...",
    "Querying SerpAPI for real-time data...",
    "Scanning and filtering source URLs...",
    "Extracting clean text from web pages...",
    "Synthesizing key evidence with Gemini 2.5 Flash...",
    "Structuring final JSON response...",
];

/// Milliseconds between advances.
pub const ROTATION_INTERVAL_MS: u32 = 3_000;

/// Circular cursor over [`STATUS_STEPS`]. Position never persists across
/// searches; every request starts a fresh rotation.
#[derive(Debug, Default)]
pub struct StatusRotation {
    step: usize,
}

impl StatusRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static str {
        STATUS_STEPS[self.step]
    }

    /// Advance one step, wrapping after the last string.
    pub fn advance(&mut self) -> &'static str {
        self.step = (self.step + 1) % STATUS_STEPS.len();
        self.current()
    }
}

/// Show the first status immediately, then advance every
/// [`ROTATION_INTERVAL_MS`]. Dropping the returned handle stops the timer.
pub fn start_rotation(set_status: WriteSignal<String>) -> Interval {
    let mut rotation = StatusRotation::new();
    set_status.set(rotation.current().to_string());
    Interval::new(ROTATION_INTERVAL_MS, move || {
        set_status.set(rotation.advance().to_string());
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_step() {
        let rotation = StatusRotation::new();
        assert_eq!(rotation.current(), STATUS_STEPS[0]);
    }

    #[test]
    fn advances_in_declared_order() {
        let mut rotation = StatusRotation::new();
        for expected in STATUS_STEPS.iter().skip(1) {
            assert_eq!(rotation.advance(), *expected);
        }
    }

    #[test]
    fn wraps_with_period_six() {
        let mut rotation = StatusRotation::new();
        for _ in 0..STATUS_STEPS.len() {
            rotation.advance();
        }
        assert_eq!(rotation.current(), STATUS_STEPS[0]);
    }
}
