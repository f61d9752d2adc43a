pub mod adapters;

pub use adapters::locator::PathLocator;
pub use adapters::process::SystemRunner;
