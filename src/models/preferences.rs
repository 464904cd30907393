//! Notification preferences as reported by the notification service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Email preferences of a user for one bundle/application pair.
///
/// A `None` flag means the value is unknown, which is not the same as `false`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[schema(example = true)]
    pub instant_email: Option<bool>,
    #[schema(example = false)]
    pub daily_email: Option<bool>,
}

impl UserPreferences {
    /// Preferences that could not be determined.
    pub fn unknown() -> Self {
        Self::default()
    }
}
