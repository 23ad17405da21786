use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    db::{CropDiseaseLinks, DiseaseRepository},
    features::crud::CrudError,
    models::{CropResponse, Disease, Entity, EntityId},
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListAffectedCropsQuery {
    pub disease_id: EntityId,
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: ListAffectedCropsQuery,
) -> Result<Vec<CropResponse>, CrudError> {
    if !DiseaseRepository::new(pool.clone())
        .exists(query.disease_id)
        .await?
    {
        return Err(CrudError::NotFound(Disease::NAME));
    }

    let crops = CropDiseaseLinks::new(pool)
        .crops_affected_by(query.disease_id)
        .await?;

    Ok(crops.into_iter().map(CropResponse::from).collect())
}
