use axum::{extract::State, Json};
use tracing::{error, info, instrument, warn};

use idea_check_domain::entities::business_idea::BusinessIdea;
use idea_check_domain::services::{EvaluationServiceError, SharedEvaluationService};

use crate::entities::common::{ApiJson, ErrorResponse};
use crate::entities::evaluation::{EvaluateIdeaRequest, EvaluateIdeaResponse};

/// Evaluate a business idea
///
/// Tries the AI provider first and falls back to rule-based analysis when it
/// is unavailable, slow or returns something unusable.
#[utoipa::path(
    post,
    path = "/api/evaluateIdea",
    request_body = EvaluateIdeaRequest,
    responses(
        (status = 200, description = "Business idea evaluated", body = EvaluateIdeaResponse),
        (status = 415, description = "Request body is not JSON", body = ErrorResponse),
        (status = 422, description = "Request body is invalid or incomplete", body = ErrorResponse),
        (status = 500, description = "Evaluation failed", body = ErrorResponse)
    ),
    tag = "evaluation"
)]
#[instrument(skip_all)]
pub async fn evaluate_idea(
    State(service): State<SharedEvaluationService>,
    ApiJson(request): ApiJson<EvaluateIdeaRequest>,
) -> Result<Json<EvaluateIdeaResponse>, ErrorResponse> {
    info!(business = %request.business_name, "Evaluating business idea");

    let idea = BusinessIdea::from(request);

    let evaluation = service.evaluate(idea).await.map_err(|err| match err {
        EvaluationServiceError::ValidationError(msg) => {
            warn!("Rejected business idea: {}", msg);
            ErrorResponse::validation_error(&msg, None)
        }
        EvaluationServiceError::Internal(msg) => {
            error!("Error in evaluate_idea: {}", msg);
            ErrorResponse::internal_error(&format!("Error evaluating business idea: {}", msg))
        }
    })?;

    info!(source = %evaluation.source, score = evaluation.analysis.viability_score, "Business idea evaluated");

    let response = EvaluateIdeaResponse::try_from(evaluation).map_err(|err| {
        error!("Failed to encode analysis: {}", err);
        ErrorResponse::internal_error(&format!("Error evaluating business idea: {}", err))
    })?;

    Ok(Json(response))
}
