#[cfg(test)]
mod health_tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use idea_check_domain::entities::business_idea::IdeaAnalysis;
    use idea_check_domain::health::{ComponentStatus, HealthComponent};
    use idea_check_domain::testing::{MockEvaluationService, MockHealthService};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::api::routes::tests::{
        create_test_app, create_test_app_with_health, create_test_app_with_real_health,
    };

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_ok_when_ai_is_available() {
        let service = MockEvaluationService::new().with_ai_analysis(IdeaAnalysis::default());
        let app = create_test_app_with_real_health(Arc::new(service));

        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["components"]["api"]["status"], "ok");
        assert_eq!(body["components"]["analysis_provider"]["status"], "ok");
        assert!(body["components"]["analysis_provider"].get("message").is_none());
    }

    #[tokio::test]
    async fn test_health_reports_degraded_without_ai() {
        let app = create_test_app_with_real_health(Arc::new(MockEvaluationService::new()));

        let (status, body) = get_json(app, "/health").await;

        // Evaluations still work through the heuristic fallback
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        let provider = &body["components"]["analysis_provider"];
        assert_eq!(provider["status"], "degraded");
        assert!(provider["message"].as_str().unwrap().contains("heuristic"));
    }

    #[tokio::test]
    async fn test_unhealthy_component_returns_service_unavailable() {
        let health = MockHealthService::new().with_component(
            "cache",
            HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some("Cache unreachable".to_string()),
            },
        );
        let app = create_test_app_with_health(Arc::new(MockEvaluationService::new()), Arc::new(health));

        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "error");
        assert_eq!(body["components"]["cache"]["message"], "Cache unreachable");
    }

    #[tokio::test]
    async fn test_health_routes() {
        let app = create_test_app(MockEvaluationService::new());

        let (status, body) = get_json(app.clone(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "status": "healthy" }));

        let (status, body) = get_json(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["environment"], "development");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
