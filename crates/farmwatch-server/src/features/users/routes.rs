//! User API routes
//!
//! - `GET /api/users?limit=&offset=` - Page through users ordered by email.
//!   The `X-Total-Count` header carries the total number of users.

use axum::{
    extract::State,
    http::HeaderName,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::queries::{self, ListUsersQuery};
use crate::{api::extract::AppQuery, error::AppError};

pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

pub fn users_routes() -> Router<PgPool> {
    Router::new().route("/", get(list_users))
}

#[tracing::instrument(skip(pool))]
async fn list_users(
    State(pool): State<PgPool>,
    AppQuery(query): AppQuery<ListUsersQuery>,
) -> Result<Response, AppError> {
    let response = queries::list::handle(pool, query).await?;

    Ok((
        [(TOTAL_COUNT_HEADER, response.total.to_string())],
        Json(response.users),
    )
        .into_response())
}
