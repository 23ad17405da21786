use std::marker::PhantomData;

use sqlx::PgPool;

use crate::{
    db::Repository,
    features::crud::CrudError,
    models::{Entity, EntityId},
};

pub struct DeleteCommand<E> {
    pub id: EntityId,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> DeleteCommand<E> {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            _entity: PhantomData,
        }
    }
}

/// Fails with [`CrudError::HasDependencies`] when a RESTRICT foreign key
/// still points at the row.
#[tracing::instrument(skip_all, fields(entity = E::NAME, id = command.id))]
pub async fn handle<E: Entity>(pool: PgPool, command: DeleteCommand<E>) -> Result<(), CrudError> {
    let deleted = Repository::<E>::new(pool)
        .delete(command.id)
        .await
        .map_err(|e| CrudError::from_delete(E::NAME, e))?;

    if !deleted {
        return Err(CrudError::NotFound(E::NAME));
    }

    tracing::info!(id = command.id, "{} deleted", E::NAME);

    Ok(())
}
