pub mod diagnostic;
pub mod progress;
pub mod theme;

pub use progress::CliObserver;
pub use theme::{Icon, Theme};
