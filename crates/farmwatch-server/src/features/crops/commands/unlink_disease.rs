use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{db::CropDiseaseLinks, features::crud::CrudError, models::EntityId};

/// Name reported when the link to remove does not exist
pub const LINK_NAME: &str = "Crop disease link";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnlinkDiseaseCommand {
    pub crop_id: EntityId,
    pub disease_id: EntityId,
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, command: UnlinkDiseaseCommand) -> Result<(), CrudError> {
    let removed = CropDiseaseLinks::new(pool)
        .unlink(command.crop_id, command.disease_id)
        .await?;

    if !removed {
        return Err(CrudError::NotFound(LINK_NAME));
    }

    tracing::info!(
        crop_id = command.crop_id,
        disease_id = command.disease_id,
        "Disease unlinked from crop"
    );

    Ok(())
}
