//! # Research Agent Frontend
//!
//! Browser-side UI for the neural research agent, compiled to WebAssembly.
//!
//! The page collects a query and a max-results count, POSTs them to
//! `/api/search`, rotates a status line while the request is in flight,
//! and renders the synthesized answer (typewriter reveal, copy button),
//! key points, confidence, and source list from the JSON response.
//!
//! ## Modules
//!
//! - [`api`]: search request/response contract and HTTP client
//! - [`status`]: rotating status line shown during a request
//! - [`typewriter`]: progressive text reveal for the answer region
//! - [`clipboard`]: copy-to-clipboard helper for the rendered answer
//! - [`components`]: Leptos components for the results area

pub mod api;
pub mod app;
pub mod clipboard;
pub mod components;
pub mod status;
pub mod typewriter;

pub use app::App;
