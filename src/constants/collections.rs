//! MongoDB collection names.

pub const COLLECTION_SETTINGS_VALUES: &str = "settings_values";
