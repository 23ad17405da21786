//! Disease model

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

#[derive(Debug, Clone, FromRow)]
pub struct Disease {
    pub id: EntityId,
    pub name: String,
    pub symptoms: Option<String>,
    pub treatment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDisease {
    pub name: String,
    #[serde(default)]
    pub symptoms: Option<String>,
    #[serde(default)]
    pub treatment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDisease {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub symptoms: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub treatment: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseResponse {
    pub id: EntityId,
    pub name: String,
    pub symptoms: Option<String>,
    pub treatment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Disease> for DiseaseResponse {
    fn from(disease: Disease) -> Self {
        Self {
            id: disease.id,
            name: disease.name,
            symptoms: disease.symptoms,
            treatment: disease.treatment,
            created_at: disease.created_at,
            updated_at: disease.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiseaseFilter {
    Name(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiseaseListParams {
    pub name: Option<String>,
}

impl Entity for Disease {
    const NAME: &'static str = "Disease";
    const TABLE: &'static str = "diseases";
    const COLUMNS: &'static [&'static str] = &["name", "symptoms", "treatment"];

    type Create = CreateDisease;
    type Update = UpdateDisease;
    type Filter = DiseaseFilter;
    type Params = DiseaseListParams;
    type Response = DiseaseResponse;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Insert for CreateDisease {
    fn bind_values<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query
            .bind(self.name)
            .bind(self.symptoms)
            .bind(self.treatment)
    }
}

impl Changes for UpdateDisease {
    fn bind_changes<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        let query = bind_change(query, self.name);
        let query = bind_nullable_change(query, self.symptoms);
        bind_nullable_change(query, self.treatment)
    }
}

impl Validate for CreateDisease {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_text("name", &self.name, MAX_NAME_LENGTH)?;
        validate_optional_text("symptoms", self.symptoms.as_deref(), MAX_TEXT_LENGTH)?;
        validate_optional_text("treatment", self.treatment.as_deref(), MAX_TEXT_LENGTH)
    }
}

impl Validate for UpdateDisease {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_text("name", name, MAX_NAME_LENGTH)?;
        }
        validate_optional_text(
            "symptoms",
            self.symptoms.as_ref().and_then(Option::as_deref),
            MAX_TEXT_LENGTH,
        )?;
        validate_optional_text(
            "treatment",
            self.treatment.as_ref().and_then(Option::as_deref),
            MAX_TEXT_LENGTH,
        )
    }
}

impl Filter for DiseaseFilter {
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

impl ListParams for DiseaseListParams {
    type Filter = DiseaseFilter;

    fn into_filters(self) -> Vec<DiseaseFilter> {
        self.name.map(DiseaseFilter::Name).into_iter().collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_disease_validation() {
        let blight = CreateDisease {
            name: "Blight".to_string(),
            symptoms: Some("Brown spots on leaves".to_string()),
            treatment: None,
        };
        assert!(blight.validate().is_ok());

        let unnamed = CreateDisease {
            name: String::new(),
            ..blight
        };
        assert_eq!(
            unnamed.validate(),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[test]
    fn test_update_disease_rejects_oversized_symptoms() {
        let update = UpdateDisease {
            symptoms: Some(Some("x".repeat(MAX_TEXT_LENGTH + 1))),
            ..Default::default()
        };
        assert_eq!(
            update.validate(),
            Err(ValidationError::TooLong {
                field: "symptoms",
                max_length: MAX_TEXT_LENGTH
            })
        );
    }
}
