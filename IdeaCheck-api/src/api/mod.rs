pub mod cors;
pub mod handlers;
pub mod routes;


use axum::Router;
use idea_check_domain::services::create_default_evaluation_service;

use crate::api::handlers::health::create_health_service;
use crate::api::routes::AppServices;
use crate::config::ApiConfig;

/// Create the application router with the default services
pub fn create_application(config: &ApiConfig) -> anyhow::Result<Router> {
    let evaluation = create_default_evaluation_service(config.huggingface.clone(), config.ai_total_timeout)?;
    let health = create_health_service(evaluation.clone());

    let app = routes::create_app(config, AppServices { evaluation, health })?;
    Ok(app)
}
