//! Generic CRUD slice
//!
//! Commands and queries shared by every [`crate::models::Entity`]. Entity
//! features mount [`crud_routes`] and add their own routes on top.

pub mod commands;
pub mod error;
pub mod queries;
pub mod routes;

pub use commands::{CreateCommand, DeleteCommand, UpdateCommand};
pub use error::CrudError;
pub use queries::{GetQuery, ListQuery};
pub use routes::crud_routes;
