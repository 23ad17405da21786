//! Farm model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{
    bind_change, bind_nullable_change, nullable, Changes, Entity, EntityId, Filter, Insert,
    ListParams, PgQueryAs,
};
use crate::features::shared::validation::{
    validate_optional_text, validate_text, Validate, ValidationError, MAX_NAME_LENGTH,
    MAX_TEXT_LENGTH,
};

/// A farm row
#[derive(Debug, Clone, FromRow)]
pub struct Farm {
    pub id: EntityId,
    pub name: String,
    pub location: String,
    pub weather: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFarm {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub weather: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFarm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub weather: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmResponse {
    pub id: EntityId,
    pub name: String,
    pub location: String,
    pub weather: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Farm> for FarmResponse {
    fn from(farm: Farm) -> Self {
        Self {
            id: farm.id,
            name: farm.name,
            location: farm.location,
            weather: farm.weather,
            created_at: farm.created_at,
            updated_at: farm.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FarmFilter {
    Name(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FarmListParams {
    pub name: Option<String>,
}

impl Entity for Farm {
    const NAME: &'static str = "Farm";
    const TABLE: &'static str = "farms";
    const COLUMNS: &'static [&'static str] = &["name", "location", "weather"];

    type Create = CreateFarm;
    type Update = UpdateFarm;
    type Filter = FarmFilter;
    type Params = FarmListParams;
    type Response = FarmResponse;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Insert for CreateFarm {
    fn bind_values<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query.bind(self.name).bind(self.location).bind(self.weather)
    }
}

impl Changes for UpdateFarm {
    fn bind_changes<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        let query = bind_change(query, self.name);
        let query = bind_change(query, self.location);
        bind_nullable_change(query, self.weather)
    }
}

impl Validate for CreateFarm {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_text("name", &self.name, MAX_NAME_LENGTH)?;
        validate_text("location", &self.location, MAX_NAME_LENGTH)?;
        validate_optional_text("weather", self.weather.as_deref(), MAX_TEXT_LENGTH)
    }
}

impl Validate for UpdateFarm {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_text("name", name, MAX_NAME_LENGTH)?;
        }
        if let Some(location) = &self.location {
            validate_text("location", location, MAX_NAME_LENGTH)?;
        }
        validate_optional_text(
            "weather",
            self.weather.as_ref().and_then(Option::as_deref),
            MAX_TEXT_LENGTH,
        )
    }
}

impl Filter for FarmFilter {
    fn column(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
        }
    }

    fn bind_value<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        match self {
            Self::Name(name) => query.bind(name),
        }
    }
}

impl ListParams for FarmListParams {
    type Filter = FarmFilter;

    fn into_filters(self) -> Vec<FarmFilter> {
        self.name.map(FarmFilter::Name).into_iter().collect()
    }
}
