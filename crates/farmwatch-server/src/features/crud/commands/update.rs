use sqlx::PgPool;

use crate::{
    db::Repository,
    features::{crud::CrudError, shared::Validate},
    models::{Entity, EntityId},
};

/// Apply only the fields present in `changes`
pub struct UpdateCommand<E: Entity> {
    pub id: EntityId,
    pub changes: E::Update,
}

impl<E: Entity> UpdateCommand<E> {
    pub fn new(id: EntityId, changes: E::Update) -> Self {
        Self { id, changes }
    }
}

#[tracing::instrument(skip_all, fields(entity = E::NAME, id = command.id))]
pub async fn handle<E: Entity>(
    pool: PgPool,
    command: UpdateCommand<E>,
) -> Result<E::Response, CrudError> {
    command.changes.validate()?;

    let record = Repository::<E>::new(pool)
        .update(command.id, command.changes)
        .await
        .map_err(|e| CrudError::from_write(E::NAME, e))?
        .ok_or(CrudError::NotFound(E::NAME))?;

    tracing::info!(id = record.id(), "{} updated", E::NAME);

    Ok(E::Response::from(record))
}
