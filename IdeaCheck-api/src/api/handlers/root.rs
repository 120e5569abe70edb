use axum::Json;

use crate::entities::evaluation::RootResponse;

/// Greeting endpoint confirming the API is reachable
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = RootResponse)
    ),
    tag = "health"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello from IdeaCheck API!".to_string(),
    })
}
