//! Farm management
//!
//! Farms only need the generic CRUD slice; see [`crate::features::crud`].

pub mod routes;

pub use routes::farms_routes;
