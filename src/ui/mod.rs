//! Server-rendered web UI.
//!
//! Pages are rendered with Dioxus SSR and carry their own inline scripts, so
//! the toggle works without the wasm client:
//! - components/ - layout, toggle button and the restore/toggle scripts
//! - pages/ - page components

pub mod components;
pub mod pages;

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use dioxus::prelude::*;
use serde_json::json;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::darkmode::DarkModeSettings;
use pages::HomePage;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub dark_mode: Arc<DarkModeSettings>,
}

impl AppState {
    pub fn new(dark_mode: DarkModeSettings) -> Self {
        Self {
            dark_mode: Arc::new(dark_mode),
        }
    }
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/status", get(status_handler))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Render the home page to a full HTML document
pub fn render_home(settings: &DarkModeSettings) -> String {
    let settings = settings.clone();
    let html = dioxus::ssr::render_element(rsx! { HomePage { settings: settings } });
    format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>", html)
}

/// GET / - Home page with the dark mode toggle
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_home(&state.dark_mode))
}

/// GET /status - Health check
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "service": "dark-mode-toggle",
        "version": env!("CARGO_PKG_VERSION"),
        "storage_key": state.dark_mode.storage_key,
    }))
}
