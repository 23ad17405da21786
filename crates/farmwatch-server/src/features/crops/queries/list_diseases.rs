use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    db::{CropDiseaseLinks, CropRepository},
    features::crud::CrudError,
    models::{Crop, DiseaseResponse, Entity, EntityId},
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListCropDiseasesQuery {
    pub crop_id: EntityId,
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: ListCropDiseasesQuery,
) -> Result<Vec<DiseaseResponse>, CrudError> {
    if !CropRepository::new(pool.clone()).exists(query.crop_id).await? {
        return Err(CrudError::NotFound(Crop::NAME));
    }

    let diseases = CropDiseaseLinks::new(pool).diseases_of(query.crop_id).await?;

    Ok(diseases.into_iter().map(DiseaseResponse::from).collect())
}
