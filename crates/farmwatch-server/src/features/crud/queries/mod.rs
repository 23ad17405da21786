pub mod get;
pub mod list;

pub use get::GetQuery;
pub use list::ListQuery;
