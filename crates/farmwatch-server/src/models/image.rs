//! Image model
//!
//! An image may be attached to a farm, a crop and a disease at the same time,
//! or to none of them. References are cleared when the target is deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{
    bind_change, bind_nullable_change, nullable, Changes, Entity, EntityId, Filter, Insert,
    ListParams, PgQueryAs,
};
use crate::features::shared::validation::{
    validate_optional_text, validate_text, Validate, ValidationError, MAX_TEXT_LENGTH,
    MAX_URL_LENGTH,
};

#[derive(Debug, Clone, FromRow)]
pub struct Image {
    pub id: EntityId,
    pub image_url: String,
    pub description: Option<String>,
    pub farm_id: Option<EntityId>,
    pub crop_id: Option<EntityId>,
    pub disease_id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateImage {
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub farm_id: Option<EntityId>,
    #[serde(default)]
    pub crop_id: Option<EntityId>,
    #[serde(default)]
    pub disease_id: Option<EntityId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateImage {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub farm_id: Option<Option<EntityId>>,
    #[serde(default, deserialize_with = "nullable")]
    pub crop_id: Option<Option<EntityId>>,
    #[serde(default, deserialize_with = "nullable")]
    pub disease_id: Option<Option<EntityId>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResponse {
    pub id: EntityId,
    pub image_url: String,
    pub description: Option<String>,
    pub farm_id: Option<EntityId>,
    pub crop_id: Option<EntityId>,
    pub disease_id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            image_url: image.image_url,
            description: image.description,
            farm_id: image.farm_id,
            crop_id: image.crop_id,
            disease_id: image.disease_id,
            created_at: image.created_at,
            updated_at: image.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageFilter {
    FarmId(EntityId),
    CropId(EntityId),
    DiseaseId(EntityId),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageListParams {
    pub farm_id: Option<EntityId>,
    pub crop_id: Option<EntityId>,
    pub disease_id: Option<EntityId>,
}

impl Entity for Image {
    const NAME: &'static str = "Image";
    const TABLE: &'static str = "images";
    const COLUMNS: &'static [&'static str] =
        &["image_url", "description", "farm_id", "crop_id", "disease_id"];

    type Create = CreateImage;
    type Update = UpdateImage;
    type Filter = ImageFilter;
    type Params = ImageListParams;
    type Response = ImageResponse;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Insert for CreateImage {
    fn bind_values<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query
            .bind(self.image_url)
            .bind(self.description)
            .bind(self.farm_id)
            .bind(self.crop_id)
            .bind(self.disease_id)
    }
}

impl Changes for UpdateImage {
    fn bind_changes<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        let query = bind_change(query, self.image_url);
        let query = bind_nullable_change(query, self.description);
        let query = bind_nullable_change(query, self.farm_id);
        let query = bind_nullable_change(query, self.crop_id);
        bind_nullable_change(query, self.disease_id)
    }
}

impl Validate for CreateImage {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_text("image_url", &self.image_url, MAX_URL_LENGTH)?;
        validate_optional_text("description", self.description.as_deref(), MAX_TEXT_LENGTH)
    }
}

impl Validate for UpdateImage {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(image_url) = &self.image_url {
            validate_text("image_url", image_url, MAX_URL_LENGTH)?;
        }
        validate_optional_text(
            "description",
            self.description.as_ref().and_then(Option::as_deref),
            MAX_TEXT_LENGTH,
        )
    }
}

impl Filter for ImageFilter {
    fn column(&self) -> &'static str {
        match self {
            Self::FarmId(_) => "farm_id",
            Self::CropId(_) => "crop_id",
            Self::DiseaseId(_) => "disease_id",
        }
    }

    fn bind_value<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        match self {
            Self::FarmId(id) | Self::CropId(id) | Self::DiseaseId(id) => query.bind(id),
        }
    }
}

impl ListParams for ImageListParams {
    type Filter = ImageFilter;

    fn into_filters(self) -> Vec<ImageFilter> {
        [
            self.farm_id.map(ImageFilter::FarmId),
            self.crop_id.map(ImageFilter::CropId),
            self.disease_id.map(ImageFilter::DiseaseId),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_image_only_requires_url() {
        let image: CreateImage =
            serde_json::from_str(r#"{"image_url": "https://cdn.example.com/leaf.jpg"}"#).unwrap();
        assert!(image.validate().is_ok());
        assert_eq!(image.farm_id, None);
        assert_eq!(image.crop_id, None);
        assert_eq!(image.disease_id, None);
    }

    #[test]
    fn test_create_image_rejects_blank_url() {
        let image = CreateImage {
            image_url: " ".to_string(),
            description: None,
            farm_id: None,
            crop_id: None,
            disease_id: None,
        };
        assert_eq!(
            image.validate(),
            Err(ValidationError::Required { field: "image_url" })
        );
    }

    #[test]
    fn test_update_image_detaches_crop() {
        let update: UpdateImage = serde_json::from_str(r#"{"crop_id": null}"#).unwrap();
        assert_eq!(update.crop_id, Some(None));
        assert_eq!(update.farm_id, None);
    }

    #[test]
    fn test_list_params_keep_declaration_order() {
        let params = ImageListParams {
            farm_id: Some(1),
            crop_id: None,
            disease_id: Some(7),
        };
        assert_eq!(
            params.into_filters(),
            vec![ImageFilter::FarmId(1), ImageFilter::DiseaseId(7)]
        );
    }
}
