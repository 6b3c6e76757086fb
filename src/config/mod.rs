/// Application settings loaded from config.toml and the environment
pub mod app;

/// Database connection and patch execution
pub mod database;
