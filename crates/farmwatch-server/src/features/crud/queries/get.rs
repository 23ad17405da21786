use std::marker::PhantomData;

use sqlx::PgPool;

use crate::{
    db::Repository,
    features::crud::CrudError,
    models::{Entity, EntityId},
};

pub struct GetQuery<E> {
    pub id: EntityId,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> GetQuery<E> {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            _entity: PhantomData,
        }
    }
}

#[tracing::instrument(skip_all, fields(entity = E::NAME, id = query.id))]
pub async fn handle<E: Entity>(pool: PgPool, query: GetQuery<E>) -> Result<E::Response, CrudError> {
    Repository::<E>::new(pool)
        .get_by_id(query.id)
        .await?
        .map(E::Response::from)
        .ok_or(CrudError::NotFound(E::NAME))
}
