//! Crop management
//!
//! The generic CRUD slice plus the crop side of the crop/disease association.

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{LinkDiseaseCommand, UnlinkDiseaseCommand};
pub use queries::ListCropDiseasesQuery;
pub use routes::crops_routes;
