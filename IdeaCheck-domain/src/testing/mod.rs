// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::entities::business_idea::{AnalysisSource, BusinessIdea, Evaluation, IdeaAnalysis};
use crate::health::{analysis_provider_component, HealthComponent, HealthServiceTrait, SystemHealth};
use crate::services::evaluation::{EvaluationServiceError, EvaluationServiceTrait};
use crate::services::heuristics::analyze_business_idea;
use validator::Validate;

/// Mock implementation of the EvaluationServiceTrait for testing
pub struct MockEvaluationService {
    ai_analysis: Option<IdeaAnalysis>,
    should_fail: bool,
    calls: AtomicUsize,
}

impl Default for MockEvaluationService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEvaluationService {
    /// Create a mock that always answers with the heuristic analysis
    pub fn new() -> Self {
        Self {
            ai_analysis: None,
            should_fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Configure the mock to answer with a fixed AI analysis
    pub fn with_ai_analysis(mut self, analysis: IdeaAnalysis) -> Self {
        self.ai_analysis = Some(analysis);
        self
    }

    /// Configure the mock to fail every evaluation with an internal error
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Number of evaluations attempted so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EvaluationServiceTrait for MockEvaluationService {
    fn validate_idea(&self, idea: &BusinessIdea) -> Result<(), EvaluationServiceError> {
        idea.validate()
            .map_err(|e| EvaluationServiceError::ValidationError(e.to_string()))
    }

    async fn evaluate(&self, idea: BusinessIdea) -> Result<Evaluation, EvaluationServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.validate_idea(&idea)?;

        if self.should_fail {
            return Err(EvaluationServiceError::Internal("mock evaluation failure".to_string()));
        }

        let evaluation = match &self.ai_analysis {
            Some(analysis) => Evaluation::new(&idea, analysis.clone(), AnalysisSource::Ai),
            None => Evaluation::new(&idea, analyze_business_idea(&idea), AnalysisSource::Heuristic),
        };
        Ok(evaluation)
    }

    fn ai_available(&self) -> bool {
        self.ai_analysis.is_some()
    }
}

/// Mock implementation of the HealthServiceTrait for testing
#[derive(Debug, Default)]
pub struct MockHealthService {
    ai_available: bool,
    extra: HashMap<String, HealthComponent>,
}

impl MockHealthService {
    /// Create a mock health service; AI is reported unavailable by default
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the AI provider as available
    pub fn with_ai_available(mut self) -> Self {
        self.ai_available = true;
        self
    }

    /// Add an arbitrary component to the report
    pub fn with_component(mut self, name: &str, component: HealthComponent) -> Self {
        self.extra.insert(name.to_string(), component);
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = self.extra.clone();
        components.insert("api".to_string(), HealthComponent::healthy());
        components.insert(
            "analysis_provider".to_string(),
            analysis_provider_component(self.ai_available),
        );
        SystemHealth::from_components(components)
    }

    async fn check_analysis_provider(&self) -> bool {
        self.ai_available
    }
}
