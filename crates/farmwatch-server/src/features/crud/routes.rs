//! CRUD routes shared by every entity
//!
//! # Route Structure
//!
//! - `GET /` - List records, optionally filtered by query parameters
//! - `POST /` - Create a record
//! - `GET /:id` - Get a single record
//! - `PUT /:id` - Update the provided fields of a record
//! - `DELETE /:id` - Delete a record
//!
//! # Examples
//!
//! ```rust,ignore
//! use farmwatch_server::{features::crud::crud_routes, models::Farm};
//!
//! let app = Router::new()
//!     .nest("/api/farms", crud_routes::<Farm>())
//!     .with_state(pool);
//! ```

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::{
    commands::{self, CreateCommand, DeleteCommand, UpdateCommand},
    queries::{self, GetQuery, ListQuery},
    CrudError,
};
use crate::{
    api::extract::{AppJson, AppPath, AppQuery},
    models::{Entity, EntityId},
};

pub fn crud_routes<E: Entity>() -> Router<PgPool> {
    Router::new()
        .route("/", get(list::<E>).post(create::<E>))
        .route("/:id", get(fetch::<E>).put(update::<E>).delete(remove::<E>))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// # Response
///
/// - `200 OK` - The created record
/// - `422 Unprocessable Entity` - Invalid body or unknown referenced id
async fn create<E: Entity>(
    State(pool): State<PgPool>,
    AppJson(input): AppJson<E::Create>,
) -> Result<Json<E::Response>, CrudError> {
    let response = commands::create::handle(pool, CreateCommand::<E>::new(input)).await?;
    Ok(Json(response))
}

/// # Response
///
/// - `200 OK` - The updated record
/// - `404 Not Found` - No record with this id
/// - `422 Unprocessable Entity` - Invalid body or unknown referenced id
async fn update<E: Entity>(
    State(pool): State<PgPool>,
    AppPath(id): AppPath<EntityId>,
    AppJson(changes): AppJson<E::Update>,
) -> Result<Json<E::Response>, CrudError> {
    let response = commands::update::handle(pool, UpdateCommand::<E>::new(id, changes)).await?;
    Ok(Json(response))
}

/// # Response
///
/// - `204 No Content` - Deleted
/// - `404 Not Found` - No record with this id
/// - `409 Conflict` - Other records still reference this one
async fn remove<E: Entity>(
    State(pool): State<PgPool>,
    AppPath(id): AppPath<EntityId>,
) -> Result<Response, CrudError> {
    commands::delete::handle(pool, DeleteCommand::<E>::new(id)).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

async fn fetch<E: Entity>(
    State(pool): State<PgPool>,
    AppPath(id): AppPath<EntityId>,
) -> Result<Json<E::Response>, CrudError> {
    let response = queries::get::handle(pool, GetQuery::<E>::new(id)).await?;
    Ok(Json(response))
}

async fn list<E: Entity>(
    State(pool): State<PgPool>,
    AppQuery(params): AppQuery<E::Params>,
) -> Result<Json<Vec<E::Response>>, CrudError> {
    let response = queries::list::handle(pool, ListQuery::<E>::from_params(params)).await?;
    Ok(Json(response))
}
