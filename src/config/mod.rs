/// Database configuration and connection management
pub mod database;

/// Service settings from config.toml and environment variables
pub mod settings;

pub use settings::{Settings, load_app_settings};
