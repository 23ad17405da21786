pub mod list_crops;

pub use list_crops::ListAffectedCropsQuery;
