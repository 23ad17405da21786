pub mod list_diseases;

pub use list_diseases::ListCropDiseasesQuery;
