//! Results area: answer card, key points, confidence, sources, and the
//! loading/error states.
//!
//! Everything coming back from the backend renders through Leptos text
//! nodes, which escape by construction. The single exception is the answer
//! region, which the typewriter fills via `set_inner_html` so inline
//! markup in the synthesized answer survives; that path must stay the only
//! one.

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::api::{KeyPoints, SearchError, SearchResponse, Source};
use crate::app::SearchPhase;
use crate::{clipboard, typewriter};

/// Three-way confidence coloring, by substring match on the lowercased
/// text. First match wins in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTone {
    Consistent,
    Conflicting,
    Neutral,
}

pub fn classify_confidence(text: &str) -> ConfidenceTone {
    let lowered = text.to_lowercase();
    if lowered.contains("consistent") {
        ConfidenceTone::Consistent
    } else if lowered.contains("conflicting") {
        ConfidenceTone::Conflicting
    } else {
        ConfidenceTone::Neutral
    }
}

fn tone_class(tone: ConfidenceTone) -> &'static str {
    match tone {
        ConfidenceTone::Consistent => "text-success",
        ConfidenceTone::Conflicting => "text-error",
        ConfidenceTone::Neutral => "opacity-70",
    }
}

/// Local time at render time, not response time.
fn local_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("en-US", &JsValue::UNDEFINED)
        .into()
}

/// Switches the results area on the current search phase.
#[component]
pub fn ResultsPanel(
    phase: ReadSignal<SearchPhase>,
    status_line: ReadSignal<String>,
) -> impl IntoView {
    view! {
        <div class="mt-8 space-y-6">
            {move || match phase.get() {
                SearchPhase::Idle => view! { <IdleCard/> }.into_any(),
                SearchPhase::Loading => view! { <LoadingCard status_line=status_line/> }.into_any(),
                SearchPhase::Failed(error) => view! { <ErrorCard error=error/> }.into_any(),
                SearchPhase::Done(response) => view! { <ResultCards response=response/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn IdleCard() -> impl IntoView {
    view! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body text-center py-12 opacity-70">
                <p>"Enter a question above to start a research run."</p>
            </div>
        </div>
    }
}

/// Spinner plus the rotating status line for the in-flight request.
#[component]
fn LoadingCard(status_line: ReadSignal<String>) -> impl IntoView {
    view! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body items-center py-12">
                <span class="loading loading-spinner loading-lg text-primary"></span>
                <p class="opacity-70" role="status" aria-live="polite">
                    {move || status_line.get()}
                </p>
            </div>
        </div>
    }
}

/// Inline error panel. Application errors also get the credential hint;
/// transport errors show only the underlying message.
#[component]
fn ErrorCard(error: SearchError) -> impl IntoView {
    let show_hint = matches!(error, SearchError::Api(_));
    let message = error.to_string();

    view! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <div class="alert alert-error">
                    <p class="text-sm">{message}</p>
                </div>
                {show_hint.then(|| view! {
                    <p class="text-sm opacity-70 mt-2">
                        "Please verify your GEMINI_API_KEY and SERPAPI_KEY are valid, and ensure the backend is running."
                    </p>
                })}
            </div>
        </div>
    }
}

/// Successful response: answer card, then a sources card when the list is
/// non-empty.
#[component]
fn ResultCards(response: SearchResponse) -> impl IntoView {
    let sources = response.sources().to_vec();

    view! {
        <AnswerCard response=response/>
        {(!sources.is_empty()).then(|| view! { <SourcesCard sources=sources/> })}
    }
}

/// Answer card: copy header, typewriter target, key points, confidence,
/// model/timestamp footer.
#[component]
fn AnswerCard(response: SearchResponse) -> impl IntoView {
    let answer_ref = NodeRef::<leptos::html::Div>::new();
    let answer_text = StoredValue::new(response.answer_text().to_string());
    let reveal_started = StoredValue::new(false);

    // The reveal starts once the answer region is mounted. The renderer
    // rebuilds this card per response, so each reveal owns its element.
    Effect::new(move |_| {
        let Some(node) = answer_ref.get() else {
            return;
        };
        if reveal_started.get_value() {
            return;
        }
        reveal_started.set_value(true);

        let element: web_sys::Element = node.into();
        let text = answer_text.get_value();
        spawn_local(async move {
            typewriter::reveal(&element, &text, typewriter::DEFAULT_DELAY_MS).await;
        });
    });

    let copy_answer = move |_| {
        let node = answer_ref.get_untracked();
        clipboard::copy_element_text(node.map(web_sys::Element::from));
    };

    let confidence = response.confidence_text().to_string();
    let confidence_class = format!(
        "text-sm {}",
        tone_class(classify_confidence(&confidence))
    );
    let footer = format!(
        "Model used: {} • Generated at: {}",
        response.model_name(),
        local_timestamp()
    );

    view! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between border-b border-base-300 pb-3">
                    <h2 class="card-title">"Final Synthesized Answer"</h2>
                    <button type="button" class="btn btn-sm btn-ghost gap-2" on:click=copy_answer>
                        "Copy"
                    </button>
                </div>

                <div class="mt-4 leading-relaxed" node_ref=answer_ref></div>

                <h3 class="font-semibold mt-6">"Key Points & Evidence"</h3>
                <KeyPointsBlock points=response.key_points()/>

                <h3 class="font-semibold mt-6">"Confidence Score"</h3>
                <p class=confidence_class>{confidence}</p>

                <div class="text-sm opacity-70 mt-6 border-t border-base-300 pt-3">
                    {footer}
                </div>
            </div>
        </div>
    }
}

#[component]
fn KeyPointsBlock(points: KeyPoints) -> impl IntoView {
    match points {
        KeyPoints::Many(points) => view! {
            <ul class="list-disc list-inside text-sm space-y-1">
                {points.into_iter().map(|point| view! { <li>{point}</li> }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        KeyPoints::One(text) => view! { <p class="text-sm">{text}</p> }.into_any(),
    }
}

#[component]
fn SourcesCard(sources: Vec<Source>) -> impl IntoView {
    let count = sources.len();

    view! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">{format!("Sources Used ({})", count)}</h2>
                <div class="space-y-3">
                    {sources
                        .into_iter()
                        .enumerate()
                        .map(|(index, source)| view! { <SourceItem index={index + 1} source=source/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SourceItem(index: usize, source: Source) -> impl IntoView {
    let label = format!("[{}] {}", index, source.title_text());
    let detail = format!("{} • {}", source.domain_text(), source.snippet_text());
    let url = source.url.clone();

    view! {
        <div class="p-3 bg-base-100 rounded-lg">
            <div class="text-sm">
                <a class="link link-primary" href=url target="_blank" rel="noopener noreferrer">
                    {label}
                </a>
            </div>
            <div class="text-xs opacity-70">{detail}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistent_is_green_regardless_of_case() {
        assert_eq!(
            classify_confidence("Consistent across 3 sources"),
            ConfidenceTone::Consistent
        );
        assert_eq!(
            classify_confidence("CONSISTENT findings"),
            ConfidenceTone::Consistent
        );
    }

    #[test]
    fn conflicting_is_red() {
        assert_eq!(
            classify_confidence("Conflicting reports found"),
            ConfidenceTone::Conflicting
        );
    }

    #[test]
    fn neither_substring_is_neutral() {
        assert_eq!(classify_confidence("High"), ConfidenceTone::Neutral);
        assert_eq!(classify_confidence(""), ConfidenceTone::Neutral);
    }

    #[test]
    fn consistent_wins_when_both_present() {
        assert_eq!(
            classify_confidence("consistent overall, conflicting in details"),
            ConfidenceTone::Consistent
        );
        assert_eq!(
            classify_confidence("conflicting first, but consistent"),
            ConfidenceTone::Consistent
        );
    }

    #[test]
    fn tone_maps_to_expected_classes() {
        assert_eq!(tone_class(ConfidenceTone::Consistent), "text-success");
        assert_eq!(tone_class(ConfidenceTone::Conflicting), "text-error");
        assert_eq!(tone_class(ConfidenceTone::Neutral), "opacity-70");
    }
}
