//! Disease API routes
//!
//! - `GET /api/diseases?name=` - List diseases
//! - `POST /api/diseases` - Create a disease
//! - `GET /api/diseases/:id` - Get a disease
//! - `PUT /api/diseases/:id` - Update a disease
//! - `DELETE /api/diseases/:id` - Delete a disease and its crop links
//! - `GET /api/diseases/:id/crops` - Crops the disease affects

use axum::{extract::State, routing::get, Json, Router};
use sqlx::PgPool;

use super::queries::{self, ListAffectedCropsQuery};
use crate::{
    api::extract::AppPath,
    features::crud::{crud_routes, CrudError},
    models::{CropResponse, Disease, EntityId},
};

pub fn diseases_routes() -> Router<PgPool> {
    crud_routes::<Disease>().route("/:id/crops", get(list_affected_crops))
}

#[tracing::instrument(skip(pool))]
async fn list_affected_crops(
    State(pool): State<PgPool>,
    AppPath(disease_id): AppPath<EntityId>,
) -> Result<Json<Vec<CropResponse>>, CrudError> {
    let crops = queries::list_crops::handle(pool, ListAffectedCropsQuery { disease_id }).await?;
    Ok(Json(crops))
}
