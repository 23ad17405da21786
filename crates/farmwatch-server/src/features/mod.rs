//! Feature modules implementing the Farmwatch API
//!
//! Each feature is a vertical slice with its own commands, queries and
//! routes. The four farm-domain entities share the generic [`crud`] slice and
//! only add what is specific to them.
//!
//! # Features
//!
//! - **farms**: Farm management
//! - **crops**: Crop management and crop/disease links
//! - **diseases**: Disease management and the crops each disease affects
//! - **images**: Image records attached to farms, crops and diseases
//! - **users**: Read-only, paginated user listing
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations
//! - `queries/` - Read operations
//! - `routes.rs` - HTTP route definitions

pub mod crops;
pub mod crud;
pub mod diseases;
pub mod farms;
pub mod images;
pub mod shared;
pub mod users;

use axum::Router;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// PostgreSQL connection pool for database operations
    pub db: sqlx::PgPool,
}

/// Creates the API router with all feature routes mounted
///
/// Each feature is mounted under its own path prefix:
/// - `/farms`
/// - `/crops`
/// - `/diseases`
/// - `/images`
/// - `/users`
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/farms", farms::farms_routes().with_state(state.db.clone()))
        .nest("/crops", crops::crops_routes().with_state(state.db.clone()))
        .nest("/diseases", diseases::diseases_routes().with_state(state.db.clone()))
        .nest("/images", images::images_routes().with_state(state.db.clone()))
        .nest("/users", users::users_routes().with_state(state.db))
}
