//! Crop API routes
//!
//! # Route Structure
//!
//! - `GET /api/crops?farm_id=&name=` - List crops
//! - `POST /api/crops` - Create a crop on an existing farm
//! - `GET /api/crops/:id` - Get a crop
//! - `PUT /api/crops/:id` - Update a crop
//! - `DELETE /api/crops/:id` - Delete a crop and its disease links
//! - `GET /api/crops/:id/diseases` - Diseases affecting the crop
//! - `PUT /api/crops/:id/diseases/:disease_id` - Link a disease
//! - `DELETE /api/crops/:id/diseases/:disease_id` - Unlink a disease

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use sqlx::PgPool;

use super::{
    commands::{self, LinkDiseaseCommand, UnlinkDiseaseCommand},
    queries::{self, ListCropDiseasesQuery},
};
use crate::{
    api::extract::AppPath,
    features::crud::{crud_routes, CrudError},
    models::{Crop, DiseaseResponse, EntityId},
};

pub fn crops_routes() -> Router<PgPool> {
    crud_routes::<Crop>()
        .route("/:id/diseases", get(list_crop_diseases))
        .route(
            "/:id/diseases/:disease_id",
            put(link_disease).delete(unlink_disease),
        )
}

/// # Response
///
/// - `204 No Content` - Linked, or already linked
/// - `404 Not Found` - Crop or disease does not exist
#[tracing::instrument(skip(pool))]
async fn link_disease(
    State(pool): State<PgPool>,
    AppPath((crop_id, disease_id)): AppPath<(EntityId, EntityId)>,
) -> Result<StatusCode, CrudError> {
    commands::link_disease::handle(
        pool,
        LinkDiseaseCommand {
            crop_id,
            disease_id,
        },
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// # Response
///
/// - `204 No Content` - Link removed
/// - `404 Not Found` - The disease was not linked to the crop
#[tracing::instrument(skip(pool))]
async fn unlink_disease(
    State(pool): State<PgPool>,
    AppPath((crop_id, disease_id)): AppPath<(EntityId, EntityId)>,
) -> Result<StatusCode, CrudError> {
    commands::unlink_disease::handle(
        pool,
        UnlinkDiseaseCommand {
            crop_id,
            disease_id,
        },
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(skip(pool))]
async fn list_crop_diseases(
    State(pool): State<PgPool>,
    AppPath(crop_id): AppPath<EntityId>,
) -> Result<Json<Vec<DiseaseResponse>>, CrudError> {
    let diseases =
        queries::list_diseases::handle(pool, ListCropDiseasesQuery { crop_id }).await?;
    Ok(Json(diseases))
}
