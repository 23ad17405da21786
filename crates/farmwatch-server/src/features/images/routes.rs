//! Image API routes
//!
//! - `GET /api/images?farm_id=&crop_id=&disease_id=` - List images
//! - `POST /api/images` - Register an image
//! - `GET /api/images/:id` - Get an image
//! - `PUT /api/images/:id` - Update an image; `null` detaches a reference
//! - `DELETE /api/images/:id` - Delete an image

use axum::Router;
use sqlx::PgPool;

use crate::{features::crud::crud_routes, models::Image};

pub fn images_routes() -> Router<PgPool> {
    crud_routes::<Image>()
}
