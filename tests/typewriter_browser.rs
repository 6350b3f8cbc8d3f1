//! In-browser checks for the typewriter reveal and the clipboard no-op.
//!
//! These run in a headless browser via wasm-bindgen-test; the pure state
//! machines are covered by the in-module unit tests.

use research_wasm::typewriter::{reveal, TypewriterState};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn test_element() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
async fn reveal_writes_full_markup() {
    let element = test_element();
    reveal(&element, "Hello\n<b>world</b>", 0).await;
    assert_eq!(element.inner_html(), "Hello<br><b>world</b>");
    assert_eq!(element.text_content().unwrap_or_default(), "Helloworld");
}

#[wasm_bindgen_test]
async fn reveal_clears_previous_content() {
    let element = test_element();
    element.set_inner_html("stale");
    reveal(&element, "fresh", 0).await;
    assert_eq!(element.inner_html(), "fresh");
}

#[wasm_bindgen_test]
fn intermediate_frames_never_split_tags() {
    let element = test_element();
    let mut state = TypewriterState::new("pre <i>mid</i> post");
    while let Some(frame) = state.step() {
        element.set_inner_html(frame);
        // A split tag would surface a literal '<' in the visible text.
        assert!(!element.text_content().unwrap_or_default().contains('<'));
    }
    assert_eq!(element.inner_html(), "pre <i>mid</i> post");
}

#[wasm_bindgen_test]
fn copy_with_missing_element_is_a_noop() {
    research_wasm::clipboard::copy_element_text(None);
}
