//! Repository layer for database operations.
//!
//! Services depend on the [`SettingsRepository`] port; the MongoDB adapter is
//! wired in at startup.

pub mod settings_repository;

pub use settings_repository::{MongoSettingsRepository, SettingsRepository};
