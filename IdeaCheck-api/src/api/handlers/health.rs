use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use utoipa::ToSchema;
use std::time::{SystemTime, UNIX_EPOCH};
use std::sync::{Once, Arc};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use async_trait::async_trait;

use idea_check_domain::health::{
    analysis_provider_component, ComponentStatus as DomainComponentStatus, HealthComponent, HealthServiceTrait,
    SystemHealth, SystemStatus,
};
use idea_check_domain::services::SharedEvaluationService;

/// Minimal liveness response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SimpleHealthResponse {
    /// Always "healthy" while the process is serving requests
    #[schema(example = "healthy")]
    pub status: String,
}

/// Detailed health check response model
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok", "degraded", or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// Timestamp of when the response was generated
    pub timestamp: u64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Details about various components of the system
    pub components: HashMap<String, ComponentHealthStatus>,
    /// Environment information
    pub environment: String,
}

/// Health status for an individual component
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok", "degraded", or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Deployment environment name reported by the health check
#[derive(Debug, Clone)]
pub struct AppEnvironment(pub String);

/// Shared health service handle
pub type SharedHealthService = Arc<dyn HealthServiceTrait + Send + Sync>;

// Track the time when the server started using a thread-safe OnceCell
static SERVER_START_TIME: OnceCell<u64> = OnceCell::new();
static INIT: Once = Once::new();

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// Initialize the server start time
pub fn initialize_server_start_time() {
    INIT.call_once(|| {
        let _ = SERVER_START_TIME.set(unix_now());
    });
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "API is running", body = SimpleHealthResponse)
    ),
    tag = "health"
)]
pub async fn simple_health_check() -> Json<SimpleHealthResponse> {
    debug!("Liveness check requested");
    Json(SimpleHealthResponse {
        status: "healthy".to_string(),
    })
}

/// Detailed health check with component status
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is healthy or degraded", body = HealthResponse),
        (status = 503, description = "API is not healthy", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip_all)]
pub async fn health_check(
    Extension(health_service): Extension<SharedHealthService>,
    Extension(environment): Extension<AppEnvironment>,
) -> impl IntoResponse {
    info!("Health check requested");

    let now = unix_now();
    let uptime = SERVER_START_TIME.get().map(|&start_time| now.saturating_sub(start_time));

    let system_health = health_service.get_system_health().await;

    let overall_status = match system_health.status {
        SystemStatus::Healthy => "ok",
        SystemStatus::Degraded => "degraded",
        SystemStatus::Unhealthy => "error",
    };

    let components = system_health
        .components
        .iter()
        .map(|(name, component)| {
            (
                name.clone(),
                ComponentHealthStatus {
                    status: map_component_status(&component.status),
                    message: component.details.clone(),
                },
            )
        })
        .collect();

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime,
        components,
        environment: environment.0,
    };

    // A degraded API still serves evaluations through the heuristic fallback
    let status = match system_health.status {
        SystemStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };

    (status, Json(response))
}

/// Map domain component status to API status string
fn map_component_status(status: &DomainComponentStatus) -> String {
    match status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Degraded => "degraded",
        DomainComponentStatus::Unhealthy => "error",
    }
    .to_string()
}

/// Implementation of the health service
pub struct HealthService {
    evaluation_service: SharedEvaluationService,
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService")
            .field("ai_available", &self.evaluation_service.ai_available())
            .finish()
    }
}

impl HealthService {
    /// Create a new health service
    pub fn new(evaluation_service: SharedEvaluationService) -> Self {
        HealthService { evaluation_service }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        components.insert("api".to_string(), HealthComponent::healthy());
        components.insert(
            "analysis_provider".to_string(),
            analysis_provider_component(self.check_analysis_provider().await),
        );

        SystemHealth::from_components(components)
    }

    async fn check_analysis_provider(&self) -> bool {
        self.evaluation_service.ai_available()
    }
}

/// Factory function to create a health service
pub fn create_health_service(evaluation_service: SharedEvaluationService) -> SharedHealthService {
    Arc::new(HealthService::new(evaluation_service))
}
