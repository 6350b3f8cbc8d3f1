//! In-browser rendering checks for the results area.
//!
//! Remote-supplied text must come out of the view tree as escaped text, a
//! response with N sources must render exactly N entries in order, and an
//! empty query must never start a request.

use leptos::prelude::*;
use research_wasm::api::{KeyPoints, ParsedData, SearchResponse, Source};
use research_wasm::app::SearchPhase;
use research_wasm::components::ResultsPanel;
use research_wasm::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const HOSTILE: &str = r#"<b>bold</b> & "quoted" 'single'"#;

fn mount_host() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host: web_sys::HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn mount_results(response: SearchResponse) -> web_sys::HtmlElement {
    let host = mount_host();
    leptos::mount::mount_to(host.clone(), move || {
        let (phase, _) = signal(SearchPhase::Done(response));
        let (status_line, _) = signal(String::new());
        view! { <ResultsPanel phase=phase status_line=status_line/> }
    })
    .forget();
    host
}

fn hostile_response() -> SearchResponse {
    SearchResponse {
        parsed_data: Some(ParsedData {
            answer: Some("Safe answer.".to_string()),
            key_points: Some(KeyPoints::Many(vec![HOSTILE.to_string()])),
            confidence: Some(format!("consistent {HOSTILE}")),
        }),
        model: Some("x".to_string()),
        sources: Some(vec![Source {
            url: "http://a".to_string(),
            title: Some(HOSTILE.to_string()),
            domain: Some(HOSTILE.to_string()),
            snippet: Some(HOSTILE.to_string()),
        }]),
        ..Default::default()
    }
}

#[wasm_bindgen_test]
fn remote_text_renders_escaped() {
    let host = mount_results(hostile_response());

    // The payload's tag never becomes an element anywhere in the panel.
    assert!(host.query_selector("b").unwrap().is_none());

    let html = host.inner_html();
    assert!(html.contains("&lt;b&gt;"), "unescaped '<' in: {html}");
    assert!(html.contains("&amp;"), "unescaped '&' in: {html}");

    // The visible text round-trips the raw payload unchanged.
    let text = host.text_content().unwrap_or_default();
    assert!(text.contains(HOSTILE), "payload mangled in: {text}");
}

#[wasm_bindgen_test]
fn n_sources_render_n_entries_in_order() {
    let sources: Vec<Source> = (1..=4)
        .map(|i| Source {
            url: format!("http://s{i}"),
            title: Some(format!("Source {i}")),
            domain: Some(format!("s{i}.com")),
            snippet: Some("s".to_string()),
        })
        .collect();
    let response = SearchResponse {
        sources: Some(sources),
        ..Default::default()
    };
    let host = mount_results(response);

    let links = host.query_selector_all("a").unwrap();
    assert_eq!(links.length(), 4);
    for i in 0..4 {
        let entry = links.item(i).unwrap().text_content().unwrap_or_default();
        let expected = format!("[{}] Source {}", i + 1, i + 1);
        assert_eq!(entry, expected);
    }
}

#[wasm_bindgen_test]
fn empty_query_submits_nothing() {
    let host = mount_host();
    leptos::mount::mount_to(host.clone(), App).forget();

    let button: web_sys::HtmlElement = host
        .query_selector("button.btn-primary")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    button.click();

    // No request started: the results area still shows the idle hint and
    // the submit control never entered the searching state.
    let text = host.text_content().unwrap_or_default();
    assert!(text.contains("Enter a question above"));
    assert!(!text.contains("Searching..."));
}
