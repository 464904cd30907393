//! Settings-related response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::SettingsValues;

/// Stored email settings of one user, as listed by the paged endpoint
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsValuesResponse {
    /// User the settings belong to
    #[schema(example = "jdoe")]
    pub user_id: String,
    /// Account the user belongs to
    #[schema(example = "000001")]
    pub account_id: String,
    /// Whether instant emails are enabled
    pub immediate_email: bool,
    /// Whether the daily digest is enabled
    pub daily_email: bool,
}

impl From<SettingsValues> for SettingsValuesResponse {
    fn from(values: SettingsValues) -> Self {
        Self {
            user_id: values.user_id,
            account_id: values.account_id,
            immediate_email: values.immediate_email,
            daily_email: values.daily_email,
        }
    }
}
