//! HTTP application assembly and serving

pub mod extract;
pub mod response;

use std::{future::IntoFuture, sync::Arc, time::Duration};

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router, ServiceExt,
};
use serde_json::json;
use sqlx::PgPool;
use tokio::{signal, sync::Notify};
use tower::Layer;
use tower_http::{
    compression::CompressionLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
};
use tracing::info;

use crate::{
    config::{Config, CorsConfig},
    db, features, middleware,
};
use response::ErrorResponse;

/// Build the router with all routes and middleware
pub fn router(pool: PgPool, cors: &CorsConfig) -> Router {
    let feature_routes = features::router(features::FeatureState { db: pool });

    Router::new()
        .route("/", get(root))
        .nest("/api", feature_routes)
        .fallback(not_found)
        // Apply layers from innermost to outermost
        .layer(map_response(method_not_allowed))
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(cors))
}

/// The router wrapped so `/api/farms/` and `/api/farms` reach the same route
pub fn app(pool: PgPool, cors: &CorsConfig) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(pool, cors))
}

/// Connect to the database, apply migrations and serve until shut down
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let pool = db::create_pool(&config.database).await?;

    if config.database.run_migrations {
        db::run_migrations(&pool).await?;
    } else {
        info!("Skipping database migrations (DATABASE_RUN_MIGRATIONS=false)");
    }

    let app = app(pool, &config.cors);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let signalled = Arc::new(Notify::new());
    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown({
            let signalled = Arc::clone(&signalled);
            async move {
                shutdown_signal().await;
                signalled.notify_one();
            }
        })
        .into_future();

    let timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    tokio::select! {
        result = server => result?,
        _ = async {
            signalled.notified().await;
            tokio::time::sleep(timeout).await;
        } => {
            tracing::warn!(
                "Connections still open after {} seconds, shutting down anyway",
                timeout.as_secs()
            );
        },
    }

    info!("Server shut down gracefully");

    Ok(())
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Farmwatch Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn not_found() -> Response {
    ErrorResponse::new("NOT_FOUND", "Not Found").into_response_with(StatusCode::NOT_FOUND)
}

/// Give axum's bodiless 405 the usual error body, keeping its `Allow` header
async fn method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let mut error = ErrorResponse::new("METHOD_NOT_ALLOWED", "Method Not Allowed")
        .into_response_with(StatusCode::METHOD_NOT_ALLOWED);
    if let Some(allow) = response.headers().get(header::ALLOW) {
        error.headers_mut().insert(header::ALLOW, allow.clone());
    }
    error
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
