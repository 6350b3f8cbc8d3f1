//! Progressive ("typewriter") reveal of the synthesized answer.
//!
//! The answer may contain literal newlines and inline HTML tags. Newlines
//! become `<br>` up front; the reveal then advances one character per step,
//! except that an opening `<` swallows the whole tag in a single step so
//! every intermediate frame renders well-formed markup. This is the one
//! trusted-HTML path in the app; everything else renders as escaped text.
//!
//! [`TypewriterState`] is the step machine; [`reveal`] drives it against a
//! live element on a fixed delay. A reveal is not cancelable, which is
//! safe because the renderer rebuilds the results area before starting a
//! new one.

use gloo_timers::future::TimeoutFuture;

/// Per-step delay used for the answer region.
pub const DEFAULT_DELAY_MS: u32 = 20;

/// Cursor over the prepared text. One [`step`](Self::step) per animation
/// frame; the accumulated prefix is what the element should display.
#[derive(Debug)]
pub struct TypewriterState {
    text: String,
    cursor: usize,
    revealed: String,
}

impl TypewriterState {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.replace('\n', "<br>"),
            cursor: 0,
            revealed: String::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Visible prefix after the steps taken so far.
    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    /// Advance by one character, or by one whole tag when the next
    /// character opens one. A `<` with no closing `>` in the remaining
    /// text is emitted as a literal character. Returns the new visible
    /// prefix, or `None` once the text is exhausted.
    pub fn step(&mut self) -> Option<&str> {
        let rest = &self.text[self.cursor..];
        let first = rest.chars().next()?;

        let taken = if first == '<' {
            match rest.find('>') {
                Some(end) => end + 1,
                None => first.len_utf8(),
            }
        } else {
            first.len_utf8()
        };

        self.revealed.push_str(&rest[..taken]);
        self.cursor += taken;
        Some(&self.revealed)
    }
}

/// Clear the element, then reveal `text` into it step by step, waiting
/// `delay_ms` between steps.
pub async fn reveal(element: &web_sys::Element, text: &str, delay_ms: u32) {
    let mut state = TypewriterState::new(text);
    element.set_inner_html("");
    while let Some(visible) = state.step() {
        element.set_inner_html(visible);
        TimeoutFuture::new(delay_ms).await;
    }
}
