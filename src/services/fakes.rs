//! In-memory implementations of the service ports for tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::errors::ApiError;
use crate::models::{Access, Page, Pager, RbacRaw, SettingsValues, UserPreferences};
use crate::repositories::SettingsRepository;
use crate::services::{NotificationSystem, RbacServer};

#[derive(Default)]
pub struct FakeSettingsRepo {
    pub values: Mutex<Vec<SettingsValues>>,
    pub failure: Option<String>,
    pub lookups: AtomicUsize,
}

impl FakeSettingsRepo {
    pub fn with_values(values: Vec<SettingsValues>) -> Self {
        Self {
            values: Mutex::new(values),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ApiError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(ApiError::InternalServerError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SettingsRepository for FakeSettingsRepo {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<SettingsValues>, ApiError> {
        self.check()?;
        Ok(self
            .values
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.user_id == user_id)
            .cloned())
    }

    async fn find_by_account(
        &self,
        account_id: &str,
        pager: &Pager,
    ) -> Result<Page<SettingsValues>, ApiError> {
        self.check()?;
        let mut matching: Vec<SettingsValues> = self
            .values
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.account_id == account_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.user_id.cmp(&b.user_id));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(pager.offset() as usize)
            .take(pager.limit() as usize)
            .collect();
        Ok(Page::new(items, total))
    }
}

pub fn settings(user_id: &str, account_id: &str, immediate: bool, daily: bool) -> SettingsValues {
    SettingsValues {
        user_id: user_id.to_string(),
        account_id: account_id.to_string(),
        immediate_email: immediate,
        daily_email: daily,
    }
}

pub struct FakeNotifications {
    pub result: Result<UserPreferences, String>,
    pub last_identity: Mutex<Option<String>>,
}

impl FakeNotifications {
    pub fn returning(prefs: UserPreferences) -> Self {
        Self {
            result: Ok(prefs),
            last_identity: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            last_identity: Mutex::new(None),
        }
    }
}

#[async_trait]
impl NotificationSystem for FakeNotifications {
    async fn get_user_preferences(
        &self,
        _bundle_name: &str,
        _application_name: &str,
        rh_identity: &str,
    ) -> Result<UserPreferences, ApiError> {
        *self.last_identity.lock().unwrap() = Some(rh_identity.to_string());
        self.result
            .clone()
            .map_err(ApiError::ServiceUnavailable)
    }
}

pub struct FakeRbac {
    pub permissions: Option<Vec<String>>,
}

impl FakeRbac {
    pub fn granting(permissions: &[&str]) -> Self {
        Self {
            permissions: Some(permissions.iter().map(|p| p.to_string()).collect()),
        }
    }

    pub fn failing() -> Self {
        Self { permissions: None }
    }
}

#[async_trait]
impl RbacServer for FakeRbac {
    async fn get_rbac_info(&self, _rh_identity: &str) -> Result<RbacRaw, ApiError> {
        match &self.permissions {
            Some(permissions) => Ok(RbacRaw {
                data: permissions
                    .iter()
                    .map(|p| Access {
                        permission: p.clone(),
                    })
                    .collect(),
            }),
            None => Err(ApiError::ServiceUnavailable("rbac down".to_string())),
        }
    }
}
