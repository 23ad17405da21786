use sqlx::PgPool;

use crate::{
    db::Repository,
    features::{crud::CrudError, shared::Validate},
    models::Entity,
};

pub struct CreateCommand<E: Entity> {
    pub input: E::Create,
}

impl<E: Entity> CreateCommand<E> {
    pub fn new(input: E::Create) -> Self {
        Self { input }
    }
}

#[tracing::instrument(skip_all, fields(entity = E::NAME))]
pub async fn handle<E: Entity>(
    pool: PgPool,
    command: CreateCommand<E>,
) -> Result<E::Response, CrudError> {
    command.input.validate()?;

    let record = Repository::<E>::new(pool)
        .add(command.input)
        .await
        .map_err(|e| CrudError::from_write(E::NAME, e))?;

    tracing::info!(id = record.id(), "{} created", E::NAME);

    Ok(E::Response::from(record))
}
