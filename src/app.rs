//! Root application component: query form and search flow.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, SearchError, SearchRequest, SearchResponse};
use crate::components::ResultsPanel;
use crate::status;

/// Lifecycle of the results area. At most one search is in flight; the
/// submit control is disabled while `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Failed(SearchError),
    Done(SearchResponse),
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (max_results, set_max_results) = signal(String::from("5"));
    let (phase, set_phase) = signal(SearchPhase::Idle);
    let (status_line, set_status_line) = signal(String::new());

    let searching = move || matches!(phase.get(), SearchPhase::Loading);

    let run_search = move || {
        if matches!(phase.get_untracked(), SearchPhase::Loading) {
            return;
        }

        let trimmed = query.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Please enter a query");
            }
            return;
        }

        // max_results passes through unvalidated; the backend coerces it.
        let request = SearchRequest {
            query: trimmed,
            max_results: max_results.get_untracked(),
        };

        set_phase.set(SearchPhase::Loading);

        spawn_local(async move {
            let rotation = status::start_rotation(set_status_line);
            let outcome = api::search(&request).await;
            // The status timer must stop before results render.
            drop(rotation);

            match outcome {
                Ok(response) => {
                    log::info!("search succeeded with {} sources", response.sources().len());
                    set_phase.set(SearchPhase::Done(response));
                }
                Err(error) => {
                    log::error!("search failed: {}", error);
                    set_phase.set(SearchPhase::Failed(error));
                }
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
            ev.prevent_default();
            run_search();
        }
    };

    view! {
        <div class="min-h-screen bg-base-100 text-base-content">
            <div class="container mx-auto px-4 py-8 max-w-3xl">
                <Header/>

                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body space-y-4">
                        <div>
                            <label for="query" class="block text-sm font-medium mb-2">
                                "Your question"
                            </label>
                            <textarea
                                id="query"
                                rows="3"
                                placeholder="What would you like to research?"
                                class="textarea textarea-bordered w-full"
                                prop:value=move || query.get()
                                on:input=move |ev| set_query.set(event_target_value(&ev))
                                on:keydown=on_keydown
                            />
                            <p class="text-xs opacity-60 mt-1">
                                "Ctrl+Enter (Cmd+Enter on macOS) submits"
                            </p>
                        </div>

                        <div class="flex items-end gap-4">
                            <div>
                                <label for="max-results" class="block text-sm font-medium mb-2">
                                    "Max sources"
                                </label>
                                <input
                                    id="max-results"
                                    type="number"
                                    min="1"
                                    class="input input-bordered w-28"
                                    prop:value=move || max_results.get()
                                    on:input=move |ev| set_max_results.set(event_target_value(&ev))
                                />
                            </div>
                            <button
                                type="button"
                                class="btn btn-primary flex-1 gap-2"
                                prop:disabled=searching
                                on:click=move |_| run_search()
                            >
                                {move || if searching() {
                                    view! {
                                        <>
                                            <span class="loading loading-spinner"></span>
                                            "Searching..."
                                        </>
                                    }.into_any()
                                } else {
                                    view! { <>"Search"</> }.into_any()
                                }}
                            </button>
                        </div>
                    </div>
                </div>

                <ResultsPanel phase=phase status_line=status_line/>
            </div>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="mb-8 text-center">
            <h1 class="text-4xl font-bold mb-2">"Neural Research Agent"</h1>
            <p class="opacity-70">
                "Real-time web search, synthesized into one sourced answer"
            </p>
        </header>
    }
}
