//! REST client for the notification service.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::constants::{ERR_NOTIFICATIONS_UNAVAILABLE, HEADER_RH_IDENTITY};
use crate::errors::ApiError;
use crate::models::UserPreferences;

/// Email preferences kept by the notification service.
#[async_trait]
pub trait NotificationSystem: Send + Sync {
    /// Fetch the preferences of the user identified by `rh_identity`.
    ///
    /// Any failure means the preferences are unknown, never that they are off.
    async fn get_user_preferences(
        &self,
        bundle_name: &str,
        application_name: &str,
        rh_identity: &str,
    ) -> Result<UserPreferences, ApiError>;
}

pub struct RestNotificationSystem {
    client: Client,
    base_url: Url,
}

impl RestNotificationSystem {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InternalServerError(format!("{}: {}", base_url, e)))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn preferences_url(&self, bundle_name: &str, application_name: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InternalServerError(ERR_NOTIFICATIONS_UNAVAILABLE.to_string()))?
            .pop_if_empty()
            .extend([
                "api",
                "notifications",
                "v1.0",
                "user-config",
                "notification-preference",
                bundle_name,
                application_name,
            ]);
        Ok(url)
    }
}

#[async_trait]
impl NotificationSystem for RestNotificationSystem {
    async fn get_user_preferences(
        &self,
        bundle_name: &str,
        application_name: &str,
        rh_identity: &str,
    ) -> Result<UserPreferences, ApiError> {
        let url = self.preferences_url(bundle_name, application_name)?;
        debug!("Fetching notification preferences from {}", url);

        let response = self
            .client
            .get(url)
            .header(HEADER_RH_IDENTITY, rh_identity)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<UserPreferences>().await?)
    }
}
