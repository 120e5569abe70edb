// Domain entities and value objects
pub mod business_idea;

// Re-export common types for easier imports
pub use business_idea::{AnalysisSource, BusinessIdea, Evaluation, IdeaAnalysis, SwotAnalysis};
