pub mod heuristics;
pub mod evaluation;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use evaluation::{
    create_default_evaluation_service, EvaluationService, EvaluationServiceError, EvaluationServiceTrait,
    SharedEvaluationService,
};
pub use heuristics::analyze_business_idea;
