//! Generic repository
//!
//! One implementation serves every table described by an [`Entity`]. Lookups
//! by id return `Option`, so callers decide what a missing row means.

use std::marker::PhantomData;

use sqlx::{PgPool, Postgres};

use super::sql;
use crate::models::{Changes, Crop, Disease, Entity, EntityId, Farm, Filter, Image, Insert};

pub type FarmRepository = Repository<Farm>;
pub type CropRepository = Repository<Crop>;
pub type DiseaseRepository = Repository<Disease>;
pub type ImageRepository = Repository<Image>;

/// CRUD access to the table backing `E`
pub struct Repository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<E> std::fmt::Debug for Repository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("entity", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E> Repository<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    pub async fn get_by_id(&self, id: EntityId) -> Result<Option<E>, sqlx::Error> {
        let sql = sql::select_by_id(E::TABLE);
        sqlx::query_as::<Postgres, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn exists(&self, id: EntityId) -> Result<bool, sqlx::Error> {
        let sql = sql::exists(E::TABLE);
        sqlx::query_scalar::<Postgres, bool>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    /// All rows, ordered by id
    pub async fn get_all(&self) -> Result<Vec<E>, sqlx::Error> {
        self.find_by(Vec::new()).await
    }

    /// Rows matching every filter, ordered by id
    pub async fn find_by(&self, filters: Vec<E::Filter>) -> Result<Vec<E>, sqlx::Error> {
        let columns: Vec<&'static str> = filters.iter().map(Filter::column).collect();
        let sql = sql::select_where(E::TABLE, &columns, None);

        let mut query = sqlx::query_as::<Postgres, E>(&sql);
        for filter in filters {
            query = filter.bind_value(query);
        }

        query.fetch_all(&self.pool).await
    }

    /// First row (lowest id) matching the filter
    pub async fn find_one_by(&self, filter: E::Filter) -> Result<Option<E>, sqlx::Error> {
        let sql = sql::select_where(E::TABLE, &[filter.column()], Some(1));
        filter
            .bind_value(sqlx::query_as::<Postgres, E>(&sql))
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a row and return it as stored
    pub async fn add(&self, input: E::Create) -> Result<E, sqlx::Error> {
        let sql = sql::insert(E::TABLE, E::COLUMNS);
        input
            .bind_values(sqlx::query_as::<Postgres, E>(&sql))
            .fetch_one(&self.pool)
            .await
    }

    /// Apply the provided changes; `None` when no row has this id
    pub async fn update(
        &self,
        id: EntityId,
        changes: E::Update,
    ) -> Result<Option<E>, sqlx::Error> {
        let sql = sql::update(E::TABLE, E::COLUMNS);
        changes
            .bind_changes(sqlx::query_as::<Postgres, E>(&sql))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// `false` when no row has this id
    pub async fn delete(&self, id: EntityId) -> Result<bool, sqlx::Error> {
        let sql = sql::delete(E::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
