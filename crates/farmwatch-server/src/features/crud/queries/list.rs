use sqlx::PgPool;

use crate::{
    db::Repository,
    features::crud::CrudError,
    models::{Entity, ListParams},
};

/// Every row matching all filters, ordered by id. No filters lists the table.
pub struct ListQuery<E: Entity> {
    pub filters: Vec<E::Filter>,
}

impl<E: Entity> ListQuery<E> {
    pub fn from_params(params: E::Params) -> Self {
        Self {
            filters: params.into_filters(),
        }
    }
}

#[tracing::instrument(skip_all, fields(entity = E::NAME, filters = query.filters.len()))]
pub async fn handle<E: Entity>(
    pool: PgPool,
    query: ListQuery<E>,
) -> Result<Vec<E::Response>, CrudError> {
    let repository = Repository::<E>::new(pool);
    let records = if query.filters.is_empty() {
        repository.get_all().await?
    } else {
        repository.find_by(query.filters).await?
    };

    Ok(records.into_iter().map(E::Response::from).collect())
}
