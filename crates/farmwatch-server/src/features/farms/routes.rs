//! Farm API routes
//!
//! - `GET /api/farms?name=` - List farms, optionally by exact name
//! - `POST /api/farms` - Create a farm
//! - `GET /api/farms/:id` - Get a farm
//! - `PUT /api/farms/:id` - Update a farm
//! - `DELETE /api/farms/:id` - Delete a farm (409 while crops remain)

use axum::Router;
use sqlx::PgPool;

use crate::{features::crud::crud_routes, models::Farm};

pub fn farms_routes() -> Router<PgPool> {
    crud_routes::<Farm>()
}
