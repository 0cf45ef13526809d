//! Router assembly with the middleware stack.

use std::time::Duration;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, ValidationError};

use super::wizard::{wizard_router, WizardAppState};

/// Builds the wizard API with tracing, timeout and CORS layers applied.
pub fn build_app(state: WizardAppState, server: &ServerConfig) -> Result<Router, ValidationError> {
    let origins = server
        .cors_origins_list()
        .into_iter()
        .map(|origin| match origin.parse::<HeaderValue>() {
            // wildcard is not a list entry
            Ok(value) if origin != "*" => Ok(value),
            _ => Err(ValidationError::InvalidCorsOrigin(origin)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::PUT, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(wizard_router()
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
