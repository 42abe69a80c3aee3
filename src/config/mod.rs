//! Configuration for the RBAC console

pub mod settings;

pub use settings::Settings;
