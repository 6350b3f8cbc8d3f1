//! Search API contract and HTTP client.
//!
//! One endpoint: `POST /api/search` with a JSON body of
//! `{"query", "max_results"}`. The response carries the synthesized answer
//! plus structured fields; everything except `error` is optional, and the
//! accessors on [`SearchResponse`] fall back to placeholder text so the
//! renderer never deals with missing data.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

/// Endpoint served by the backend research agent.
pub const SEARCH_ENDPOINT: &str = "/api/search";

/// Fallback answer when the backend produced nothing usable.
pub const ANSWER_PLACEHOLDER: &str =
    "Analysis complete. No synthesized answer could be generated from available sources.";
/// Fallback for a missing `key_points` field.
pub const KEY_POINTS_PLACEHOLDER: &str = "No key points extracted.";
/// Fallback for a missing `confidence` field.
pub const CONFIDENCE_PLACEHOLDER: &str = "Confidence not determined.";
/// Fallback for a missing source snippet.
pub const SNIPPET_PLACEHOLDER: &str = "No snippet available.";

/// Body of the search POST. `max_results` travels as the raw string from
/// the form control; the backend coerces it.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: String,
}

/// Structured synthesis block nested under `parsed_data`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParsedData {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub key_points: Option<KeyPoints>,
    #[serde(default)]
    pub confidence: Option<String>,
}

/// `key_points` arrives either as a single string or as a list of strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum KeyPoints {
    Many(Vec<String>),
    One(String),
}

/// One entry of the `sources` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Source {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl Source {
    /// Display title, falling back to the URL.
    pub fn title_text(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.url,
        }
    }

    pub fn domain_text(&self) -> &str {
        self.domain.as_deref().unwrap_or_default()
    }

    pub fn snippet_text(&self) -> &str {
        match self.snippet.as_deref() {
            Some(snippet) if !snippet.is_empty() => snippet,
            _ => SNIPPET_PLACEHOLDER,
        }
    }
}

/// The backend's response, consumed as-is. Presence checks only; unknown
/// or missing fields degrade to placeholders in the accessors below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub parsed_data: Option<ParsedData>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub sources: Option<Vec<Source>>,
    #[serde(default)]
    pub error: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

impl SearchResponse {
    /// Answer text for the typewriter: `parsed_data.answer`, then the
    /// top-level fallback `answer`, then the placeholder.
    pub fn answer_text(&self) -> &str {
        non_empty(
            self.parsed_data
                .as_ref()
                .and_then(|parsed| parsed.answer.as_deref()),
        )
        .or_else(|| non_empty(self.answer.as_deref()))
        .unwrap_or(ANSWER_PLACEHOLDER)
    }

    pub fn key_points(&self) -> KeyPoints {
        match self
            .parsed_data
            .as_ref()
            .and_then(|parsed| parsed.key_points.clone())
        {
            Some(KeyPoints::One(text)) if text.is_empty() => {
                KeyPoints::One(KEY_POINTS_PLACEHOLDER.to_string())
            }
            Some(points) => points,
            None => KeyPoints::One(KEY_POINTS_PLACEHOLDER.to_string()),
        }
    }

    pub fn confidence_text(&self) -> &str {
        non_empty(
            self.parsed_data
                .as_ref()
                .and_then(|parsed| parsed.confidence.as_deref()),
        )
        .unwrap_or(CONFIDENCE_PLACEHOLDER)
    }

    pub fn model_name(&self) -> &str {
        non_empty(self.model.as_deref()).unwrap_or("N/A")
    }

    pub fn sources(&self) -> &[Source] {
        self.sources.as_deref().unwrap_or_default()
    }
}

/// How a search attempt failed.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The request never produced a decodable response
    /// (network, DNS, or JSON decoding failure).
    Transport(String),
    /// A well-formed response signaled failure: non-2xx status or a
    /// non-empty `error` field in the body.
    Api(String),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SearchError::Transport(msg) => write!(f, "Network error: {}", msg),
            SearchError::Api(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl From<gloo_net::Error> for SearchError {
    fn from(err: gloo_net::Error) -> Self {
        SearchError::Transport(err.to_string())
    }
}

/// Classify a decoded response: a non-empty `error` field wins over the
/// HTTP status, and a non-OK status without one reports the generic text.
fn classify_outcome(ok: bool, body: SearchResponse) -> Result<SearchResponse, SearchError> {
    if let Some(error) = non_empty(body.error.as_deref()) {
        return Err(SearchError::Api(error.to_string()));
    }
    if !ok {
        return Err(SearchError::Api("Unknown API Error".to_string()));
    }
    Ok(body)
}

/// Issue one search. A single attempt, no retries; the only timeout is
/// whatever the browser's fetch applies.
pub async fn search(request: &SearchRequest) -> Result<SearchResponse, SearchError> {
    let response = Request::post(SEARCH_ENDPOINT)
        .json(request)?
        .send()
        .await?;

    let ok = response.ok();
    let body: SearchResponse = response.json().await?;
    classify_outcome(ok, body)
}
