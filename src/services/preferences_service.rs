//! Preferences service for rendering settings and reading notification preferences.

use log::{debug, warn};
use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::{Page, Pager, SettingsValuesResponse, UserPreferences};
use crate::repositories::SettingsRepository;
use crate::services::{NotificationSystem, SettingsTemplate};
use crate::utils::mask_identifier;

pub struct PreferencesService {
    repository: Arc<dyn SettingsRepository>,
    notifications: Arc<dyn NotificationSystem>,
    template: SettingsTemplate,
}

impl PreferencesService {
    pub fn new(
        repository: Arc<dyn SettingsRepository>,
        notifications: Arc<dyn NotificationSystem>,
        template: SettingsTemplate,
    ) -> Self {
        Self {
            repository,
            notifications,
            template,
        }
    }

    /// Render the settings form with the stored flags of `user_id`.
    ///
    /// Users without stored settings get both flags off.
    pub async fn render_settings(&self, user_id: &str) -> Result<String, ApiError> {
        let (immediate_email, daily_email) = match self.repository.find_by_user(user_id).await? {
            Some(values) => (values.immediate_email, values.daily_email),
            None => {
                debug!(
                    "No stored settings for user {}, using defaults",
                    mask_identifier(user_id)
                );
                (false, false)
            }
        };

        Ok(self.template.render(immediate_email, daily_email))
    }

    /// List the stored settings of an account, one page at a time.
    pub async fn list_account_settings(
        &self,
        account_id: &str,
        pager: &Pager,
    ) -> Result<Page<SettingsValuesResponse>, ApiError> {
        let page = self.repository.find_by_account(account_id, pager).await?;
        Ok(page.map(SettingsValuesResponse::from))
    }

    /// Ask the notification service for the preferences of the caller.
    ///
    /// Failures are logged and reported as unknown preferences.
    pub async fn notification_preferences(
        &self,
        bundle_name: &str,
        application_name: &str,
        rh_identity: &str,
    ) -> UserPreferences {
        match self
            .notifications
            .get_user_preferences(bundle_name, application_name, rh_identity)
            .await
        {
            Ok(preferences) => preferences,
            Err(e) => {
                warn!(
                    "Fetching notification preferences for {}/{} failed: {}",
                    bundle_name, application_name, e
                );
                UserPreferences::unknown()
            }
        }
    }
}
