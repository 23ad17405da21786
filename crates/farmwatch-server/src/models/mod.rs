//! Database models
//!
//! Each table is described by a row struct implementing [`Entity`]. The trait
//! ties a row to its table, the payloads accepted on create and update, the
//! filters it can be listed by and the shape returned to clients, which lets
//! a single generic repository and a single set of CRUD handlers serve every
//! entity.

pub mod crop;
pub mod disease;
pub mod farm;
pub mod image;
pub mod user;

pub use crop::{Crop, CropFilter, CropListParams, CropResponse, CreateCrop, UpdateCrop};
pub use disease::{
    CreateDisease, Disease, DiseaseFilter, DiseaseListParams, DiseaseResponse, UpdateDisease,
};
pub use farm::{CreateFarm, Farm, FarmFilter, FarmListParams, FarmResponse, UpdateFarm};
pub use image::{CreateImage, Image, ImageFilter, ImageListParams, ImageResponse, UpdateImage};
pub use user::{User, UserResponse};

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use sqlx::{
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    Encode, FromRow, Postgres, Type,
};

use crate::features::shared::validation::Validate;

/// Primary key type shared by all farm-domain tables
pub type EntityId = i32;

/// A typed Postgres query whose rows decode into `O`
pub type PgQueryAs<'q, O> = QueryAs<'q, Postgres, O, PgArguments>;

/// A persisted record type with an integer primary key
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    /// Human readable name used in error messages, e.g. `"Farm"`
    const NAME: &'static str;

    /// Backing table
    const TABLE: &'static str;

    /// Writable columns, in the order [`Insert`] and [`Changes`] bind them
    const COLUMNS: &'static [&'static str];

    type Create: Insert + Validate + DeserializeOwned + Send + 'static;
    type Update: Changes + Validate + DeserializeOwned + Send + 'static;
    type Filter: Filter;
    type Params: ListParams<Filter = Self::Filter>;
    type Response: From<Self> + Serialize + Send + 'static;

    fn id(&self) -> EntityId;
}

/// A full set of column values for a new row
pub trait Insert {
    /// Bind one value per entry of [`Entity::COLUMNS`]
    fn bind_values<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O>;
}

/// A partial set of column values for an existing row
pub trait Changes {
    /// Bind a `(provided, value)` pair per entry of [`Entity::COLUMNS`]
    fn bind_changes<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O>;
}

/// A single `column = value` equality condition
pub trait Filter: Send + 'static {
    fn column(&self) -> &'static str;

    fn bind_value<'q, O>(self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O>;
}

/// Query string parameters accepted by a list endpoint
pub trait ListParams: DeserializeOwned + Send + 'static {
    type Filter: Filter;

    fn into_filters(self) -> Vec<Self::Filter>;
}

/// Bind a change for a NOT NULL column.
///
/// `None` means "leave the column untouched".
pub fn bind_change<'q, O, T>(query: PgQueryAs<'q, O>, change: Option<T>) -> PgQueryAs<'q, O>
where
    T: 'q + Encode<'q, Postgres> + Type<Postgres> + Send,
{
    query.bind(change.is_some()).bind(change)
}

/// Bind a change for a nullable column.
///
/// `None` leaves the column untouched, `Some(None)` sets it to NULL.
pub fn bind_nullable_change<'q, O, T>(
    query: PgQueryAs<'q, O>,
    change: Option<Option<T>>,
) -> PgQueryAs<'q, O>
where
    T: 'q + Encode<'q, Postgres> + Type<Postgres> + Send,
{
    query.bind(change.is_some()).bind(change.flatten())
}

/// Deserialize a field where an explicit `null` differs from an absent key.
///
/// Combine with `#[serde(default)]`: a missing key yields `None`, `null`
/// yields `Some(None)` and a value yields `Some(Some(value))`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        note: Option<Option<String>>,
    }

    #[test]
    fn test_nullable_distinguishes_missing_and_null() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.note, None);

        let cleared: Patch = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(cleared.note, Some(None));

        let set: Patch = serde_json::from_str(r#"{"note": "dry"}"#).unwrap();
        assert_eq!(set.note, Some(Some("dry".to_string())));
    }
}
