pub mod locator;
pub mod process;
