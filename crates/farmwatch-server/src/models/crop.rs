//! Crop model
//!
//! Every crop is planted on exactly one farm. Diseases are linked through the
//! `disease_crop` association table, see [`crate::db::links`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{
    bind_change, bind_nullable_change, nullable, Changes, Entity, EntityId, Filter, Insert,
    ListParams, PgQueryAs,
};
use crate::features::shared::validation::{
    validate_date_order, validate_optional_text, validate_text, Validate, ValidationError,
    MAX_NAME_LENGTH,
};

#[derive(Debug, Clone, FromRow)]
pub struct Crop {
    pub id: EntityId,
    pub name: String,
    pub variety: Option<String>,
    pub planting_date: Option<NaiveDate>,
    pub harvest_date: Option<NaiveDate>,
    pub farm_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCrop {
    pub name: String,
    #[serde(default)]
    pub variety: Option<String>,
    #[serde(default)]
    pub planting_date: Option<NaiveDate>,
    #[serde(default)]
    pub harvest_date: Option<NaiveDate>,
    pub farm_id: EntityId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCrop {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub variety: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub planting_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "nullable")]
    pub harvest_date: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub farm_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropResponse {
    pub id: EntityId,
    pub name: String,
    pub variety: Option<String>,
    pub planting_date: Option<NaiveDate>,
    pub harvest_date: Option<NaiveDate>,
    pub farm_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Crop> for CropResponse {
    fn from(crop: Crop) -> Self {
        Self {
            id: crop.id,
            name: crop.name,
            variety: crop.variety,
            planting_date: crop.planting_date,
            harvest_date: crop.harvest_date,
            farm_id: crop.farm_id,
            created_at: crop.created_at,
            updated_at: crop.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropFilter {
    Name(String),
    FarmId(EntityId),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CropListParams {
    pub farm_id: Option<EntityId>,
    pub name: Option<String>,
}

impl Entity for Crop {
    const NAME: &'static str = "Crop";
    const TABLE: &'static str = "crops";
    const COLUMNS: &'static [&'static str] =
        &["name", "variety", "planting_date", "harvest_date", "farm_id"];

    type Create = CreateCrop;
    type Update = UpdateCrop;
    type Filter = CropFilter;
    type Params = CropListParams;
    type Response = CropResponse;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Insert for CreateCrop {
    fn bind_values<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query
            .bind(self.name)
            .bind(self.variety)
            .bind(self.planting_date)
            .bind(self.harvest_date)
            .bind(self.farm_id)
    }
}

impl Changes for UpdateCrop {
    fn bind_changes<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        let query = bind_change(query, self.name);
        let query = bind_nullable_change(query, self.variety);
        let query = bind_nullable_change(query, self.planting_date);
        let query = bind_nullable_change(query, self.harvest_date);
        bind_change(query, self.farm_id)
    }
}

impl Validate for CreateCrop {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_text("name", &self.name, MAX_NAME_LENGTH)?;
        validate_optional_text("variety", self.variety.as_deref(), MAX_NAME_LENGTH)?;
        validate_date_order(self.planting_date, self.harvest_date)
    }
}

impl Validate for UpdateCrop {
    // Date order against the stored row is enforced by the
    // crops_harvest_after_planting constraint.
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_text("name", name, MAX_NAME_LENGTH)?;
        }
        validate_optional_text(
            "variety",
            self.variety.as_ref().and_then(Option::as_deref),
            MAX_NAME_LENGTH,
        )?;
        validate_date_order(self.planting_date.flatten(), self.harvest_date.flatten())
    }
}

impl Filter for CropFilter {
    fn column(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::FarmId(_) => "farm_id",
        }
    }

    fn bind_value<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        match self {
            Self::Name(name) => query.bind(name),
            Self::FarmId(farm_id) => query.bind(farm_id),
        }
    }
}

impl ListParams for CropListParams {
    type Filter = CropFilter;

    fn into_filters(self) -> Vec<CropFilter> {
        let mut filters = Vec::new();
        if let Some(farm_id) = self.farm_id {
            filters.push(CropFilter::FarmId(farm_id));
        }
        if let Some(name) = self.name {
            filters.push(CropFilter::Name(name));
        }
        filters
    }
}
