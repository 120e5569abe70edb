use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use idea_check_domain::entities::business_idea::{AnalysisSource, BusinessIdea, Evaluation};

/// Request payload for evaluating a business idea
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateIdeaRequest {
    /// Name of the business
    #[schema(example = "Acme Cloud")]
    pub business_name: String,

    /// What the business does
    pub description: String,

    /// Who the business sells to
    #[schema(example = "Global small businesses")]
    pub target_market: String,

    /// How the business makes money
    #[schema(example = "Monthly subscription")]
    pub revenue_model: String,

    /// Main cost drivers
    #[schema(example = "Low, mostly hosting")]
    pub cost_structure: String,

    /// How the product reaches customers
    #[schema(example = "Online")]
    pub distribution_channels: String,

    /// Industry label
    #[schema(example = "SaaS")]
    pub industry: String,
}

impl From<EvaluateIdeaRequest> for BusinessIdea {
    fn from(request: EvaluateIdeaRequest) -> Self {
        BusinessIdea {
            business_name: request.business_name,
            description: request.description,
            target_market: request.target_market,
            revenue_model: request.revenue_model,
            cost_structure: request.cost_structure,
            distribution_channels: request.distribution_channels,
            industry: request.industry,
        }
    }
}

/// Evaluation result payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationData {
    pub business_name: String,
    pub industry: String,

    /// The analysis as a JSON-encoded string
    #[schema(example = "{\"swot_analysis\":{\"strengths\":[],\"weaknesses\":[],\"opportunities\":[],\"threats\":[]},\"viability_score\":55,\"risk_factors\":[],\"summary\":[]}")]
    pub analysis: String,

    /// Which analyser produced the result
    pub analysis_source: AnalysisSource,

    pub evaluation_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
}

/// Response envelope for a successful evaluation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvaluateIdeaResponse {
    /// Always "success"
    pub status: String,
    pub message: String,
    pub data: EvaluationData,
}

impl TryFrom<Evaluation> for EvaluateIdeaResponse {
    type Error = serde_json::Error;

    fn try_from(evaluation: Evaluation) -> Result<Self, Self::Error> {
        Ok(Self {
            status: "success".to_string(),
            message: "Business idea evaluated successfully".to_string(),
            data: EvaluationData {
                analysis: serde_json::to_string(&evaluation.analysis)?,
                business_name: evaluation.business_name,
                industry: evaluation.industry,
                analysis_source: evaluation.source,
                evaluation_id: evaluation.id,
                evaluated_at: evaluation.evaluated_at,
            },
        })
    }
}

/// Response of the root endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use idea_check_domain::entities::business_idea::IdeaAnalysis;
    use serde_json::json;

    #[test]
    fn test_request_uses_camel_case() {
        let request: EvaluateIdeaRequest = serde_json::from_value(json!({
            "businessName": "Acme",
            "description": "Widgets",
            "targetMarket": "Local",
            "revenueModel": "Subscription",
            "costStructure": "Low",
            "distributionChannels": "Online",
            "industry": "SaaS"
        }))
        .unwrap();

        let idea = BusinessIdea::from(request);
        assert_eq!(idea.business_name, "Acme");
        assert_eq!(idea.distribution_channels, "Online");
    }

    #[test]
    fn test_response_encodes_analysis_as_string() {
        let idea = BusinessIdea {
            business_name: "Acme".to_string(),
            description: "d".to_string(),
            target_market: "t".to_string(),
            revenue_model: "r".to_string(),
            cost_structure: "c".to_string(),
            distribution_channels: "o".to_string(),
            industry: "SaaS".to_string(),
        };
        let analysis = IdeaAnalysis {
            viability_score: 42,
            ..Default::default()
        };
        let evaluation = Evaluation::new(&idea, analysis.clone(), AnalysisSource::Ai);

        let response = EvaluateIdeaResponse::try_from(evaluation).unwrap();
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["businessName"], "Acme");
        assert_eq!(body["data"]["analysisSource"], "ai");

        let decoded: IdeaAnalysis = serde_json::from_str(body["data"]["analysis"].as_str().unwrap()).unwrap();
        assert_eq!(decoded, analysis);
    }
}
