//! HTTP server for the catalog
//!
//! One router serves both halves of the app:
//! - `/api/*`: the fixture-backed JSON API
//! - `/` and `/font/:id`: server-rendered pages, which read the API through
//!   whatever [`FamilyProvider`] the state carries

mod api;
mod pages;

use crate::data::FixtureCatalog;
use crate::provider::{FamilyProvider, FixtureProvider};
use crate::ui::theme::ThemeContext;
use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// State shared by all handlers
#[derive(Clone)]
pub struct ServerState {
    /// Data source behind `/api/*`
    pub api: FixtureProvider,
    /// Data source the pages render from
    pub pages: Arc<dyn FamilyProvider>,
    pub theme: ThemeContext,
}

impl ServerState {
    pub fn new(catalog: Arc<FixtureCatalog>, pages: Arc<dyn FamilyProvider>, theme: ThemeContext) -> Self {
        Self {
            api: FixtureProvider::new(catalog),
            pages,
            theme,
        }
    }

    /// Pages read the fixtures in-process instead of over HTTP
    pub fn with_fixture_pages(catalog: Arc<FixtureCatalog>) -> Self {
        let pages = Arc::new(FixtureProvider::new(catalog.clone()));
        Self::new(catalog, pages, ThemeContext::default())
    }
}

pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(pages::list_page))
        .route("/font/:id", get(pages::detail_page))
        .route("/api/families", get(api::list_families))
        .route("/api/familyDetails", get(api::family_details))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "fontshelf is healthy"
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(addr: SocketAddr, state: ServerState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(
        "Serving catalog on http://{} (pages read from {})",
        listener.local_addr()?,
        state.pages.name()
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
