//! Terminal front end: the `env-bootstrap` and `env-bootstrap-doctor` binaries.

pub mod commands;
pub mod core;
pub mod ui;
