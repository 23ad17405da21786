pub mod create;
pub mod delete;
pub mod update;

pub use create::CreateCommand;
pub use delete::DeleteCommand;
pub use update::UpdateCommand;
