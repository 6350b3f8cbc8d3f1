//! Leptos components for the results area.

pub mod results;

pub use results::{classify_confidence, ConfidenceTone, ResultsPanel};
