//! Middleware for the Farmwatch server
//!
//! This module provides middleware for:
//! - CORS (Cross-Origin Resource Sharing)
//! - Request logging with tracing

use axum::http::{header, HeaderValue, Method};
use std::time::Duration;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{config::CorsConfig, features::users::routes::TOTAL_COUNT_HEADER};

/// Whether the configuration asks for any origin to be accepted
fn allows_any_origin(config: &CorsConfig) -> bool {
    config.allowed_origins.is_empty() || config.allowed_origins.iter().any(|o| o == "*")
}

/// Create CORS layer from configuration
///
/// Credentials are only enabled for an explicit origin list; browsers refuse
/// credentialed responses for a wildcard origin.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_LANGUAGE,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
        .expose_headers([TOTAL_COUNT_HEADER])
        .max_age(Duration::from_secs(3600));

    if allows_any_origin(config) {
        if config.allow_credentials {
            tracing::warn!("CORS credentials disabled because all origins are allowed");
        }
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();
    cors = cors.allow_origin(AllowOrigin::list(origins));

    if config.allow_credentials {
        cors = cors.allow_credentials(true);
    }

    cors
}

/// Create tracing/logging layer
pub fn tracing_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(tower_http::LatencyUnit::Micros),
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use tower::Layer;

    use super::*;

    fn cors(origins: &[&str], allow_credentials: bool) -> CorsConfig {
        CorsConfig {
            allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
            allow_credentials,
        }
    }

    #[test]
    fn test_allows_any_origin() {
        assert!(allows_any_origin(&cors(&[], true)));
        assert!(allows_any_origin(&cors(&["https://a.example", "*"], false)));
        assert!(!allows_any_origin(&cors(&["http://localhost:3000"], true)));
    }

    #[test]
    fn test_cors_layer_with_specific_origins() {
        let _layer = cors_layer(&cors(&["http://localhost:3000", "https://example.com"], true));
    }

    #[test]
    fn test_cors_layer_with_wildcard_and_credentials() {
        // tower-http panics when a credentialed layer with Any is applied
        let _service = cors_layer(&cors(&["*"], true)).layer(axum::Router::<()>::new());
    }

    #[test]
    fn test_cors_layer_with_empty_origins() {
        let _layer = cors_layer(&cors(&[], false));
    }
}
