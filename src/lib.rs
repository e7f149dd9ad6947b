//! Shoe Card
//!
//! Server-rendered product card for a shoe catalog: classifies a listing as on sale, newly
//! released, or plain, and renders the card with the matching badge and price styling.
//!
//! # Architecture
//!
//! - **Catalog**: pure classification and layout, with routing, formatting, pluralization,
//!   recency and theming injected as collaborators
//! - **UI**: Leptos SSR components
//! - **Server**: Axum endpoints returning classification JSON and HTML card fragments
//!
//! # Modules
//!
//! - [`catalog`]: listing model, variant classifier, card layout
//! - [`ui`]: Leptos components
//! - [`config`]: layered configuration
//! - [`server`]: HTTP surface

#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::unused_async)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod server;
pub mod telemetry;
pub mod ui;

use crate::catalog::CardEnv;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Card collaborators built from configuration.
    pub env: CardEnv,
}

impl AppState {
    pub fn new(env: CardEnv) -> Self {
        Self { env }
    }
}
