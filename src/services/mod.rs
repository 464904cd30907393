//! Services organized by domain concern.

pub mod notification_client;
pub mod preferences_service;
pub mod rbac_client;
pub mod settings_template;

#[cfg(test)]
pub mod fakes;

pub use notification_client::{NotificationSystem, RestNotificationSystem};
pub use preferences_service::PreferencesService;
pub use rbac_client::{RbacServer, RestRbacServer};
pub use settings_template::SettingsTemplate;
