//! Copy-to-clipboard helper for the rendered answer.

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copy an element's visible text (tags stripped) to the system clipboard
/// and confirm with a blocking alert. A missing element is a silent no-op;
/// the copy button can only outlive its answer region between renders.
pub fn copy_element_text(element: Option<web_sys::Element>) {
    let Some(element) = element else {
        return;
    };
    let text = element.text_content().unwrap_or_default();

    let Some(window) = web_sys::window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();

    spawn_local(async move {
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => {
                let _ = window.alert_with_message("Answer copied to clipboard!");
            }
            Err(err) => {
                log::warn!("clipboard write failed: {:?}", err);
            }
        }
    });
}
