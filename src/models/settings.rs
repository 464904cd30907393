use serde::{Deserialize, Serialize};

/// Email settings document stored in MongoDB, keyed by user name
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SettingsValues {
    #[serde(rename = "_id")]
    pub user_id: String,
    pub account_id: String,
    #[serde(default)]
    pub immediate_email: bool,
    #[serde(default)]
    pub daily_email: bool,
}
