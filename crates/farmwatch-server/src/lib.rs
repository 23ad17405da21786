//! Farmwatch Server Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! HTTP server for farm monitoring records: farms, the crops planted on them,
//! the diseases affecting those crops and images documenting all three.
//!
//! # Architecture
//!
//! The server follows a **CQRS (Command Query Responsibility Segregation)** layout:
//!
//! - **Commands** (Write Operations): create, update, delete, link and unlink
//! - **Queries** (Read Operations): get and list
//!
//! Farms, crops, diseases and images are all [`models::Entity`]
//! implementations. A single generic [`db::Repository`] and a single set of
//! CRUD handlers in [`features::crud`] serve all four; entity features only
//! add what is specific to them.
//!
//! ## Framework Stack
//!
//! - **Axum**: Web framework
//! - **SQLx**: PostgreSQL access and embedded migrations
//! - **Tower**: Middleware and service abstractions
//!
//! # Example
//!
//! ```no_run
//! use farmwatch_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;

pub use config::Config;
pub use error::AppError;
