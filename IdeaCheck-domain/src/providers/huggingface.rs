use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{build_prompt, parse_generated_analysis, AnalysisProvider, ProviderError};
use crate::entities::business_idea::{BusinessIdea, IdeaAnalysis};

/// Default inference endpoint
pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/google/flan-t5-large";

/// Configuration for the Hugging Face inference provider
#[derive(Clone)]
pub struct HuggingFaceConfig {
    /// API token, requests are skipped when unset
    pub api_key: Option<String>,
    /// Full model inference URL
    pub model_url: String,
    /// Timeout for a single inference request
    pub request_timeout: Duration,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model_url: DEFAULT_MODEL_URL.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl std::fmt::Debug for HuggingFaceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model_url", &self.model_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// Analysis provider backed by the Hugging Face inference API
#[derive(Debug, Clone)]
pub struct HuggingFaceProvider {
    client: reqwest::Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceProvider {
    /// Create a new provider with its own HTTP client
    pub fn new(config: HuggingFaceConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl AnalysisProvider for HuggingFaceProvider {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn is_configured(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    #[instrument(skip(self, idea), fields(business = %idea.business_name))]
    async fn analyze(&self, idea: &BusinessIdea) -> Result<IdeaAnalysis, ProviderError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(ProviderError::NotConfigured),
        };

        let prompt = build_prompt(idea);
        let response = self
            .client
            .post(&self.config.model_url)
            .header(header::AUTHORIZATION, format!("Bearer {}", api_key))
            .json(&InferenceRequest { inputs: &prompt })
            .send()
            .await?
            .error_for_status()?;

        let generated: Vec<GeneratedText> = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let text = generated
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or_else(|| ProviderError::MalformedResponse("empty generation list".to_string()))?;

        debug!("Received {} characters of generated text", text.len());

        parse_generated_analysis(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    fn idea() -> BusinessIdea {
        BusinessIdea {
            business_name: "Acme".to_string(),
            description: "Widgets".to_string(),
            target_market: "Local".to_string(),
            revenue_model: "Subscription".to_string(),
            cost_structure: "Low".to_string(),
            distribution_channels: "Online".to_string(),
            industry: "SaaS".to_string(),
        }
    }

    /// Serve `router` on an ephemeral port and return its base URL
    async fn spawn_server(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn provider(url: String, api_key: Option<&str>) -> HuggingFaceProvider {
        HuggingFaceProvider::new(HuggingFaceConfig {
            api_key: api_key.map(str::to_string),
            model_url: url,
            request_timeout: Duration::from_secs(2),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_analyze_parses_generated_text() {
        let router = Router::new().route(
            "/model",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(headers["authorization"], "Bearer secret");
                assert!(body["inputs"].as_str().unwrap().contains("Business Name: Acme"));
                Json(json!([{
                    "generated_text": "Sure! {\"swot_analysis\": {\"strengths\": [\"Niche\"], \"weaknesses\": [], \"opportunities\": [], \"threats\": []}, \"viability_score\": 64, \"risk_factors\": [], \"summary\": [\"ok\"]}"
                }]))
            }),
        );
        let base = spawn_server(router).await;

        let analysis = provider(format!("{}/model", base), Some("secret"))
            .analyze(&idea())
            .await
            .unwrap();

        assert_eq!(analysis.viability_score, 64);
        assert_eq!(analysis.swot_analysis.strengths, vec!["Niche"]);
    }

    #[tokio::test]
    async fn test_analyze_reports_error_status() {
        let router = Router::new().route("/model", post(|| async { StatusCode::SERVICE_UNAVAILABLE }));
        let base = spawn_server(router).await;

        let result = provider(format!("{}/model", base), Some("secret")).analyze(&idea()).await;
        assert!(matches!(result, Err(ProviderError::Status(503))));
    }

    #[tokio::test]
    async fn test_analyze_rejects_text_without_json() {
        let router = Router::new().route(
            "/model",
            post(|| async { Json(json!([{ "generated_text": "I cannot help with that." }])) }),
        );
        let base = spawn_server(router).await;

        let result = provider(format!("{}/model", base), Some("secret")).analyze(&idea()).await;
        assert!(matches!(result, Err(ProviderError::NoJson)));
    }

    #[tokio::test]
    async fn test_analyze_rejects_unexpected_body() {
        let router = Router::new().route("/model", post(|| async { Json(json!({ "error": "loading" })) }));
        let base = spawn_server(router).await;

        let result = provider(format!("{}/model", base), Some("secret")).analyze(&idea()).await;
        assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_unconfigured_provider_skips_request() {
        let provider = provider("http://127.0.0.1:9/unused".to_string(), Some("  "));
        assert!(!provider.is_configured());

        let result = provider.analyze(&idea()).await;
        assert!(matches!(result, Err(ProviderError::NotConfigured)));
    }

    #[test]
    fn test_debug_output_redacts_api_key() {
        let config = HuggingFaceConfig {
            api_key: Some("hf_topsecret".to_string()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hf_topsecret"));
        assert!(rendered.contains("<redacted>"));
    }
}
