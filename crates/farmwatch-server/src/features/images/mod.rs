pub mod routes;

pub use routes::images_routes;
