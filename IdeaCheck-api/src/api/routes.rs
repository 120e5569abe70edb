use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use idea_check_domain::services::SharedEvaluationService;

use crate::api::cors::configure_cors;
use crate::api::handlers::health::{AppEnvironment, SharedHealthService};
use crate::api::handlers::{evaluation, health, root};
use crate::config::{ApiConfig, ConfigError};
use crate::entities::common::ErrorResponse;
use crate::openapi::configure_docs_routes;

/// Services the router is built from
#[derive(Clone)]
pub struct AppServices {
    pub evaluation: SharedEvaluationService,
    pub health: SharedHealthService,
}

/// Create the application router
pub fn create_app(config: &ApiConfig, services: AppServices) -> Result<Router, ConfigError> {
    debug!("Creating application router");

    // Business endpoints
    let api_routes = Router::new()
        .route("/api/evaluateIdea", post(evaluation::evaluate_idea))
        .with_state(services.evaluation);

    debug!("API routes configured");

    // Public routes that don't need any service state
    let public_routes = Router::new()
        .route("/", get(root::root))
        .route("/api/health", get(health::simple_health_check))
        .route("/health", get(health::health_check))
        .layer(Extension(services.health))
        .layer(Extension(AppEnvironment(config.app_env.clone())));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .merge(configure_docs_routes())
        .fallback(not_found);

    debug!("Documentation routes merged");

    let app = configure_cors(app, &config.cors)?.layer(TraceLayer::new_for_http());
    debug!("CORS and tracing layers applied");

    health::initialize_server_start_time();

    Ok(app)
}

async fn not_found() -> ErrorResponse {
    ErrorResponse::not_found("resource")
}
