//! AI analysis providers
//!
//! A provider turns a [`BusinessIdea`] into an [`IdeaAnalysis`] by asking an
//! external model. Providers are allowed to fail; the evaluation service
//! falls back to the heuristic analyser when they do.

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::business_idea::{BusinessIdea, IdeaAnalysis};

pub mod huggingface;

pub use huggingface::{HuggingFaceConfig, HuggingFaceProvider};

/// Errors raised while asking a provider for an analysis
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No credentials are configured for the provider
    #[error("Provider is not configured")]
    NotConfigured,

    /// The HTTP request could not be completed (connection, timeout, ...)
    #[error("Request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status
    #[error("Provider returned status {0}")]
    Status(u16),

    /// The response body did not have the expected shape
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// The generated text did not contain a JSON object
    #[error("No valid JSON found in AI response")]
    NoJson,

    /// The JSON object could not be parsed into an analysis
    #[error("Could not parse analysis: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ProviderError::Status(status.as_u16()),
            None => ProviderError::Request(err.to_string()),
        }
    }
}

/// Trait for AI analysis providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Short provider name used in logs and health output
    fn name(&self) -> &'static str;

    /// Whether the provider has what it needs to make requests
    fn is_configured(&self) -> bool;

    /// Ask the provider to analyse an idea
    async fn analyze(&self, idea: &BusinessIdea) -> Result<IdeaAnalysis, ProviderError>;
}

/// Build the model prompt for an idea
pub fn build_prompt(idea: &BusinessIdea) -> String {
    format!(
        r#"Analyze this business idea and provide a detailed analysis in JSON format:

Business Name: {}
Description: {}
Target Market: {}
Revenue Model: {}
Cost Structure: {}
Distribution Channels: {}
Industry: {}

Provide analysis in this exact JSON format:
{{
    "swot_analysis": {{
        "strengths": ["point1", "point2", "point3"],
        "weaknesses": ["point1", "point2", "point3"],
        "opportunities": ["point1", "point2", "point3"],
        "threats": ["point1", "point2", "point3"]
    }},
    "viability_score": number_between_0_and_100,
    "risk_factors": ["risk1", "risk2", "risk3"],
    "summary": ["point1", "point2", "point3"]
}}"#,
        idea.business_name,
        idea.description,
        idea.target_market,
        idea.revenue_model,
        idea.cost_structure,
        idea.distribution_channels,
        idea.industry,
    )
}

/// Slice of `text` from the first `{` to the last `}` inclusive.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Parse the JSON object embedded in generated model text
pub fn parse_generated_analysis(text: &str) -> Result<IdeaAnalysis, ProviderError> {
    let json = extract_json_object(text).ok_or(ProviderError::NoJson)?;
    let analysis: IdeaAnalysis =
        serde_json::from_str(json).map_err(|e| ProviderError::Parse(e.to_string()))?;
    Ok(analysis.normalized())
}
