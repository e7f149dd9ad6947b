//! HTTP surface: classification JSON and server-rendered card fragments.

use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::AppState;
use crate::catalog::{BadgeDescriptor, DisplayVariant, ShoeListing};
use crate::config::AppConfig;
use crate::error::Result;
use crate::ui::components::render_card_html;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> Result<()> {
    info!(
        name: "catalog.config.loaded",
        detail_prefix = %config.catalog.detail_prefix,
        recency_days = config.catalog.recency_days,
        "Catalog configuration loaded"
    );

    let app = router(AppState::new(config.card_env()));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/classify", post(api_classify))
        .route("/api/cards/render", post(api_render_card))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Classification result for one listing.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub variant: DisplayVariant,
    pub badge: BadgeDescriptor,
}

async fn api_classify(
    State(state): State<AppState>,
    Json(listing): Json<ShoeListing>,
) -> Json<ClassifyResponse> {
    let variant = listing.variant(state.env.recency.as_ref());

    debug!(
        name: "card.classified",
        slug = %listing.slug,
        variant = %variant,
        "Listing classified"
    );

    Json(ClassifyResponse {
        variant,
        badge: variant.badge(),
    })
}

/// Render a listing into a card fragment for HTMX swaps.
async fn api_render_card(
    State(state): State<AppState>,
    Json(listing): Json<ShoeListing>,
) -> Html<String> {
    let slug = listing.slug.clone();
    let html = render_card_html(listing, state.env.clone());

    debug!(
        name: "card.rendered",
        slug = %slug,
        bytes = html.len(),
        "Card rendered"
    );

    Html(html)
}
