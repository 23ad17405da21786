pub mod link_disease;
pub mod unlink_disease;

pub use link_disease::LinkDiseaseCommand;
pub use unlink_disease::UnlinkDiseaseCommand;
