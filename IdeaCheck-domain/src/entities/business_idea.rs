use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Maximum number of entries kept in each list of an analysis
pub const MAX_LIST_ENTRIES: usize = 3;

/// Upper bound of the viability score
pub const MAX_VIABILITY_SCORE: u8 = 100;

/// A business idea submitted for evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BusinessIdea {
    /// Name of the business
    #[validate(length(min = 1, message = "Business name is required"))]
    pub business_name: String,

    /// Free-form description of what the business does
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Who the business sells to
    #[validate(length(min = 1, message = "Target market is required"))]
    pub target_market: String,

    /// How the business makes money
    #[validate(length(min = 1, message = "Revenue model is required"))]
    pub revenue_model: String,

    /// Main cost drivers
    #[validate(length(min = 1, message = "Cost structure is required"))]
    pub cost_structure: String,

    /// How the product reaches customers
    #[validate(length(min = 1, message = "Distribution channels are required"))]
    pub distribution_channels: String,

    /// Industry label, e.g. "SaaS", "E-commerce" or "Services"
    #[validate(length(min = 1, message = "Industry is required"))]
    pub industry: String,
}

/// Strengths, weaknesses, opportunities and threats of an idea
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct SwotAnalysis {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub threats: Vec<String>,
}

/// Result of analysing a business idea
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct IdeaAnalysis {
    /// SWOT breakdown
    pub swot_analysis: SwotAnalysis,

    /// Viability score between 0 and 100
    #[cfg_attr(feature = "with-api", schema(minimum = 0, maximum = 100))]
    #[serde(deserialize_with = "deserialize_viability_score")]
    pub viability_score: u8,

    /// Main risks of the idea
    #[serde(default)]
    pub risk_factors: Vec<String>,

    /// Short human-readable summary lines
    #[serde(default)]
    pub summary: Vec<String>,
}

/// Accept any finite JSON number and round it into the score range.
/// Model output is not trusted to be an integer within bounds.
fn deserialize_viability_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() {
        return Err(D::Error::custom("viability_score must be a finite number"));
    }
    Ok(raw.round().clamp(0.0, f64::from(MAX_VIABILITY_SCORE)) as u8)
}

impl IdeaAnalysis {
    /// Clamp the score and keep only the first entries of every list.
    pub fn normalized(mut self) -> Self {
        self.viability_score = self.viability_score.min(MAX_VIABILITY_SCORE);
        self.swot_analysis.strengths.truncate(MAX_LIST_ENTRIES);
        self.swot_analysis.weaknesses.truncate(MAX_LIST_ENTRIES);
        self.swot_analysis.opportunities.truncate(MAX_LIST_ENTRIES);
        self.swot_analysis.threats.truncate(MAX_LIST_ENTRIES);
        self.risk_factors.truncate(MAX_LIST_ENTRIES);
        self
    }
}

/// Which analyser produced an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Produced by the external AI provider
    Ai,
    /// Produced by the rule-based fallback
    Heuristic,
}

impl std::fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisSource::Ai => write!(f, "ai"),
            AnalysisSource::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// A completed evaluation of a business idea
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: Uuid,
    pub business_name: String,
    pub industry: String,
    pub analysis: IdeaAnalysis,
    pub source: AnalysisSource,
    pub evaluated_at: DateTime<Utc>,
}

impl Evaluation {
    /// Create an evaluation for an idea, stamping it with a fresh id and the current time
    pub fn new(idea: &BusinessIdea, analysis: IdeaAnalysis, source: AnalysisSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            business_name: idea.business_name.clone(),
            industry: idea.industry.clone(),
            analysis: analysis.normalized(),
            source,
            evaluated_at: Utc::now(),
        }
    }
}
