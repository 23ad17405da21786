use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    db::{CropDiseaseLinks, CropRepository, DiseaseRepository},
    features::crud::CrudError,
    models::{Crop, Disease, Entity, EntityId},
};

/// Record that a disease affects a crop. Linking twice is a no-op.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinkDiseaseCommand {
    pub crop_id: EntityId,
    pub disease_id: EntityId,
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, command: LinkDiseaseCommand) -> Result<(), CrudError> {
    if !CropRepository::new(pool.clone()).exists(command.crop_id).await? {
        return Err(CrudError::NotFound(Crop::NAME));
    }
    if !DiseaseRepository::new(pool.clone()).exists(command.disease_id).await? {
        return Err(CrudError::NotFound(Disease::NAME));
    }

    let created = CropDiseaseLinks::new(pool)
        .link(command.crop_id, command.disease_id)
        .await
        .map_err(|e| CrudError::from_write(Crop::NAME, e))?;

    tracing::info!(
        crop_id = command.crop_id,
        disease_id = command.disease_id,
        created,
        "Disease linked to crop"
    );

    Ok(())
}
