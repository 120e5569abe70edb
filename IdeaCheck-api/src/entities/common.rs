use axum::{
    extract::rejection::JsonRejection,
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response format for API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a not found error response
    pub fn not_found(resource: &str) -> Self {
        Self {
            error: "not_found".to_string(),
            message: format!("The requested {} could not be found", resource),
            details: None,
        }
    }

    /// Create a validation error response
    pub fn validation_error(message: &str, details: Option<serde_json::Value>) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: message.to_string(),
            details,
        }
    }

    /// Create an error response for a body that could not be read as the expected JSON
    pub fn unprocessable_entity(message: &str) -> Self {
        Self {
            error: "unprocessable_entity".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Create an error response for a request without a JSON content type
    pub fn unsupported_media_type(message: &str) -> Self {
        Self {
            error: "unsupported_media_type".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Create an internal error response
    pub fn internal_error(message: &str) -> Self {
        Self {
            error: "internal_error".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// HTTP status for this error code
    pub fn status_code(&self) -> StatusCode {
        match self.error.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" | "unprocessable_entity" => StatusCode::UNPROCESSABLE_ENTITY,
            "unsupported_media_type" => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

impl From<JsonRejection> for ErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(err) => Self::unsupported_media_type(&err.body_text()),
            other => Self::unprocessable_entity(&other.body_text()),
        }
    }
}

/// JSON body extractor whose rejections use [`ErrorResponse`]
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ErrorResponse))]
pub struct ApiJson<T>(pub T);
