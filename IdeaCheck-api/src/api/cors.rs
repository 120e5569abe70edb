//! Cross-origin and response header configuration
//!
//! The web client runs on a different origin during local development, so
//! every route of the API is wrapped in a CORS layer.

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::debug;

use crate::config::{AllowedOrigins, ConfigError, CorsConfig};

/// Build the CORS layer for the given configuration
///
/// A wildcard configuration mirrors the caller's origin, method and headers
/// instead of answering `*`, because browsers refuse `*` on credentialed
/// requests.
pub fn build_cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    let layer = match &config.allowed_origins {
        AllowedOrigins::Any => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request()),
        AllowedOrigins::List(origins) => {
            let origins = origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                        name: "CORS_ALLOWED_ORIGINS",
                        value: origin.clone(),
                        reason: e.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        }
    };

    debug!(origins = ?config.allowed_origins, "CORS layer configured");

    Ok(layer.allow_credentials(true).max_age(config.max_age))
}

/// Apply CORS and basic security headers to the whole application
pub fn configure_cors(app: Router, config: &CorsConfig) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(config)?;

    let security_headers = tower::ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    Ok(app.layer(security_headers).layer(cors))
}
