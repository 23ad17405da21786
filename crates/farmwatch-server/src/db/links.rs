//! Crop/disease association
//!
//! Links are stored in `disease_crop` and vanish with either side. Both
//! directions read the same rows, so a link made from a crop is visible from
//! the disease and vice versa.

use sqlx::{PgPool, Postgres};

use crate::models::{Crop, Disease, EntityId};

#[derive(Debug, Clone)]
pub struct CropDiseaseLinks {
    pool: PgPool,
}

impl CropDiseaseLinks {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record that `disease_id` affects `crop_id`.
    ///
    /// Returns `false` when the link already existed.
    pub async fn link(
        &self,
        crop_id: EntityId,
        disease_id: EntityId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO disease_crop (disease_id, crop_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(disease_id)
        .bind(crop_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` when there was nothing to remove
    pub async fn unlink(
        &self,
        crop_id: EntityId,
        disease_id: EntityId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM disease_crop WHERE disease_id = $1 AND crop_id = $2")
            .bind(disease_id)
            .bind(crop_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn diseases_of(&self, crop_id: EntityId) -> Result<Vec<Disease>, sqlx::Error> {
        sqlx::query_as::<Postgres, Disease>(
            r#"
            SELECT d.*
            FROM diseases d
            JOIN disease_crop dc ON dc.disease_id = d.id
            WHERE dc.crop_id = $1
            ORDER BY d.id
            "#,
        )
        .bind(crop_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn crops_affected_by(&self, disease_id: EntityId) -> Result<Vec<Crop>, sqlx::Error> {
        sqlx::query_as::<Postgres, Crop>(
            r#"
            SELECT c.*
            FROM crops c
            JOIN disease_crop dc ON dc.crop_id = c.id
            WHERE dc.disease_id = $1
            ORDER BY c.id
            "#,
        )
        .bind(disease_id)
        .fetch_all(&self.pool)
        .await
    }
}
