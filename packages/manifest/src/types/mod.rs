pub mod floor;
pub mod policy;
pub mod sections;

pub use floor::VersionFloor;
pub use policy::{Policy, TemplatePolicy};
pub use sections::*;
