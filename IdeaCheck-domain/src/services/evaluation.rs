use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::entities::business_idea::{AnalysisSource, BusinessIdea, Evaluation, IdeaAnalysis};
use crate::providers::{AnalysisProvider, HuggingFaceConfig, HuggingFaceProvider, ProviderError};
use crate::services::heuristics::analyze_business_idea;

/// Default bound on the whole AI analysis
pub const DEFAULT_AI_TOTAL_TIMEOUT: Duration = Duration::from_secs(15);

/// Evaluation service errors
#[derive(Debug, Error)]
pub enum EvaluationServiceError {
    /// The submitted idea is incomplete
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Anything else that prevented an evaluation
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Trait for business idea evaluation
#[async_trait]
pub trait EvaluationServiceTrait {
    /// Validate an idea before evaluating it
    fn validate_idea(&self, idea: &BusinessIdea) -> Result<(), EvaluationServiceError>;

    /// Evaluate an idea, preferring the AI provider and falling back to heuristics
    async fn evaluate(&self, idea: BusinessIdea) -> Result<Evaluation, EvaluationServiceError>;

    /// Whether AI analysis can be attempted at all
    fn ai_available(&self) -> bool;
}

/// Evaluation service for domain logic
pub struct EvaluationService<P: AnalysisProvider> {
    provider: P,
    ai_timeout: Duration,
}

impl<P: AnalysisProvider> EvaluationService<P> {
    /// Create a new evaluation service
    pub fn new(provider: P, ai_timeout: Duration) -> Self {
        Self { provider, ai_timeout }
    }

    /// Run the provider under the overall timeout
    async fn try_ai(&self, idea: &BusinessIdea) -> Result<IdeaAnalysis, ProviderError> {
        if !self.provider.is_configured() {
            return Err(ProviderError::NotConfigured);
        }

        match tokio::time::timeout(self.ai_timeout, self.provider.analyze(idea)).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Request(format!(
                "analysis timed out after {}s",
                self.ai_timeout.as_secs_f32()
            ))),
        }
    }
}

#[async_trait]
impl<P: AnalysisProvider> EvaluationServiceTrait for EvaluationService<P> {
    fn validate_idea(&self, idea: &BusinessIdea) -> Result<(), EvaluationServiceError> {
        if let Err(validation_errors) = idea.validate() {
            let mut messages: Vec<String> = validation_errors
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |err| match &err.message {
                        Some(msg) => msg.to_string(),
                        None => format!("Invalid {}", field),
                    })
                })
                .collect();
            messages.sort();

            return Err(EvaluationServiceError::ValidationError(messages.join(", ")));
        }

        Ok(())
    }

    #[instrument(skip(self, idea), fields(business = %idea.business_name, industry = %idea.industry))]
    async fn evaluate(&self, idea: BusinessIdea) -> Result<Evaluation, EvaluationServiceError> {
        self.validate_idea(&idea)?;

        let (analysis, source) = match self.try_ai(&idea).await {
            Ok(analysis) => {
                info!(provider = self.provider.name(), "AI analysis succeeded");
                (analysis, AnalysisSource::Ai)
            }
            Err(ProviderError::NotConfigured) => {
                debug!("AI provider not configured, using heuristic analysis");
                (analyze_business_idea(&idea), AnalysisSource::Heuristic)
            }
            Err(err) => {
                warn!(provider = self.provider.name(), error = %err, "AI analysis failed, falling back to basic analysis");
                (analyze_business_idea(&idea), AnalysisSource::Heuristic)
            }
        };

        Ok(Evaluation::new(&idea, analysis, source))
    }

    fn ai_available(&self) -> bool {
        self.provider.is_configured()
    }
}

/// Shared handle to an evaluation service
pub type SharedEvaluationService = Arc<dyn EvaluationServiceTrait + Send + Sync>;

/// Create the default evaluation service backed by Hugging Face
pub fn create_default_evaluation_service(
    config: HuggingFaceConfig,
    ai_timeout: Duration,
) -> Result<SharedEvaluationService, EvaluationServiceError> {
    let provider = HuggingFaceProvider::new(config)
        .map_err(|e| EvaluationServiceError::Internal(e.to_string()))?;

    Ok(Arc::new(EvaluationService::new(provider, ai_timeout)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::business_idea::SwotAnalysis;
    use crate::providers::MockAnalysisProvider;

    fn idea() -> BusinessIdea {
        BusinessIdea {
            business_name: "Acme".to_string(),
            description: "Widgets for everyone".to_string(),
            target_market: "Local".to_string(),
            revenue_model: "Subscription".to_string(),
            cost_structure: "Low".to_string(),
            distribution_channels: "Online".to_string(),
            industry: "SaaS".to_string(),
        }
    }

    fn ai_analysis() -> IdeaAnalysis {
        IdeaAnalysis {
            swot_analysis: SwotAnalysis {
                strengths: vec!["From the model".to_string()],
                ..Default::default()
            },
            viability_score: 91,
            risk_factors: vec![],
            summary: vec!["Model summary".to_string()],
        }
    }

    fn configured_mock() -> MockAnalysisProvider {
        let mut provider = MockAnalysisProvider::new();
        provider.expect_is_configured().return_const(true);
        provider.expect_name().return_const("mock");
        provider
    }

    #[tokio::test]
    async fn test_ai_result_is_used_when_provider_succeeds() {
        let mut provider = configured_mock();
        provider
            .expect_analyze()
            .times(1)
            .returning(|_| Ok(ai_analysis()));

        let service = EvaluationService::new(provider, Duration::from_secs(1));
        let evaluation = service.evaluate(idea()).await.unwrap();

        assert_eq!(evaluation.source, AnalysisSource::Ai);
        assert_eq!(evaluation.analysis.viability_score, 91);
        assert_eq!(evaluation.business_name, "Acme");
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_to_heuristics() {
        let mut provider = configured_mock();
        provider
            .expect_analyze()
            .times(1)
            .returning(|_| Err(ProviderError::Status(500)));

        let service = EvaluationService::new(provider, Duration::from_secs(1));
        let evaluation = service.evaluate(idea()).await.unwrap();

        assert_eq!(evaluation.source, AnalysisSource::Heuristic);
        assert_eq!(evaluation.analysis, analyze_business_idea(&idea()));
    }

    #[tokio::test]
    async fn test_unconfigured_provider_is_never_called() {
        let mut provider = MockAnalysisProvider::new();
        provider.expect_is_configured().return_const(false);
        provider.expect_name().return_const("mock");
        provider.expect_analyze().never();

        let service = EvaluationService::new(provider, Duration::from_secs(1));
        assert!(!service.ai_available());

        let evaluation = service.evaluate(idea()).await.unwrap();
        assert_eq!(evaluation.source, AnalysisSource::Heuristic);
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        struct SlowProvider;

        #[async_trait]
        impl AnalysisProvider for SlowProvider {
            fn name(&self) -> &'static str {
                "slow"
            }

            fn is_configured(&self) -> bool {
                true
            }

            async fn analyze(&self, _idea: &BusinessIdea) -> Result<IdeaAnalysis, ProviderError> {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(IdeaAnalysis::default())
            }
        }

        let service = EvaluationService::new(SlowProvider, Duration::from_millis(50));
        let evaluation = service.evaluate(idea()).await.unwrap();

        assert_eq!(evaluation.source, AnalysisSource::Heuristic);
    }

    #[tokio::test]
    async fn test_invalid_idea_is_rejected_before_analysis() {
        let mut provider = MockAnalysisProvider::new();
        provider.expect_analyze().never();
        provider.expect_is_configured().return_const(true);
        provider.expect_name().return_const("mock");

        let service = EvaluationService::new(provider, Duration::from_secs(1));
        let mut incomplete = idea();
        incomplete.business_name = String::new();
        incomplete.industry = String::new();

        match service.evaluate(incomplete).await {
            Err(EvaluationServiceError::ValidationError(msg)) => {
                assert_eq!(msg, "Business name is required, Industry is required");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_service_without_key_reports_ai_unavailable() {
        let service =
            create_default_evaluation_service(HuggingFaceConfig::default(), DEFAULT_AI_TOTAL_TIMEOUT).unwrap();
        assert!(!service.ai_available());
    }
}
