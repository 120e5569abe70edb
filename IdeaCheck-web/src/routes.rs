use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::config::WebConfig;

const INDEX_TEMPLATE: &str = include_str!("../assets/index.html");
const API_BASE_URL_PLACEHOLDER: &str = "__API_BASE_URL__";

/// Render the single page with the API location baked in
pub fn render_index(api_base_url: &str) -> String {
    // A JSON string is a valid JS string literal; "</" is split so it cannot close the script tag
    let literal = serde_json::to_string(api_base_url)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/");
    INDEX_TEMPLATE.replace(API_BASE_URL_PLACEHOLDER, &literal)
}

/// Create the web client router
pub fn create_app(config: &WebConfig) -> Router {
    debug!(api_base_url = %config.api_base_url, "Creating web client router");

    let page: Arc<str> = Arc::from(render_index(&config.api_base_url));

    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .with_state(page)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http())
}

async fn index(State(page): State<Arc<str>>) -> Html<String> {
    Html(page.to_string())
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html("<h1>404</h1><p>Page not found</p>"))
}
