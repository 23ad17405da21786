pub mod queries;
pub mod routes;

pub use queries::ListAffectedCropsQuery;
pub use routes::diseases_routes;
