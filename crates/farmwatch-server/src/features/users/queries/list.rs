use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres};

use crate::{
    error::AppError,
    features::shared::validation::{validate_non_negative, validate_range, ValidationError},
    models::{User, UserResponse},
};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// One page of users ordered by email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

impl Default for ListUsersQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ListUsersQuery {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_range("limit", self.limit, 1, MAX_LIMIT)?;
        validate_non_negative("offset", self.offset)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserResponse>,
    /// Number of users in the table, regardless of paging
    pub total: i64,
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: ListUsersQuery) -> Result<ListUsersResponse, AppError> {
    query.validate()?;

    let count =
        sqlx::query_scalar::<Postgres, i64>("SELECT COUNT(*) FROM users").fetch_one(&pool);
    let page = sqlx::query_as::<Postgres, User>(
        r#"
        SELECT id, email, hashed_password, is_active, is_verified, is_superuser
        FROM users
        ORDER BY email
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(query.limit)
    .bind(query.offset)
    .fetch_all(&pool);

    let (total, users) = tokio::try_join!(count, page)?;

    Ok(ListUsersResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
        total,
    })
}
