//! Read-only user listing
//!
//! Registration, login and password handling belong to the identity provider
//! that owns the `users` table.

pub mod queries;
pub mod routes;

pub use queries::{ListUsersQuery, ListUsersResponse};
pub use routes::users_routes;
