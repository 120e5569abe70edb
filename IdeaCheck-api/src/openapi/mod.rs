use axum::Router;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Path of the generated OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

/// Configure the interactive documentation endpoints
///
/// Swagger UI is served at `/docs` and ReDoc at `/redoc`, both reading the
/// same OpenAPI document.
pub fn configure_docs_routes() -> Router {
    let swagger = SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi());

    Router::new()
        .merge(swagger)
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::root::root,
        crate::api::handlers::health::simple_health_check,
        crate::api::handlers::health::health_check,

        // Evaluation endpoints
        crate::api::handlers::evaluation::evaluate_idea,
    ),
    components(
        schemas(
            // Entities
            crate::entities::evaluation::EvaluateIdeaRequest,
            crate::entities::evaluation::EvaluateIdeaResponse,
            crate::entities::evaluation::EvaluationData,
            crate::entities::evaluation::RootResponse,
            crate::entities::common::ErrorResponse,

            // Health handlers
            crate::api::handlers::health::SimpleHealthResponse,
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentHealthStatus,

            // Domain schemas
            idea_check_domain::entities::business_idea::AnalysisSource,
            idea_check_domain::entities::business_idea::IdeaAnalysis,
            idea_check_domain::entities::business_idea::SwotAnalysis
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "evaluation", description = "Business idea evaluation")
    ),
    info(
        title = "IdeaCheck API",
        version = "0.1.0",
        description = "Evaluates business ideas with an AI model and a rule-based fallback",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "IdeaCheck API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().expect("tags should be defined");
        assert!(tags.iter().any(|tag| tag.name == "health"));
        assert!(tags.iter().any(|tag| tag.name == "evaluation"));

        let paths = &openapi.paths.paths;
        assert!(paths.contains_key("/"));
        assert!(paths.contains_key("/api/health"));
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/api/evaluateIdea"));

        let schemas = &openapi.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("EvaluateIdeaRequest"));
        assert!(schemas.contains_key("IdeaAnalysis"));
    }

    #[test]
    fn test_api_doc_serializes() {
        let json = ApiDoc::openapi().to_json().expect("OpenAPI document should serialize");
        assert!(json.contains("evaluateIdea"));
    }
}
