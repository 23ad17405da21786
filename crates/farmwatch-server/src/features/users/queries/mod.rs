pub mod list;

pub use list::{ListUsersQuery, ListUsersResponse};
