//! Settings form template with the two email flags filled in.

use crate::constants::ERR_TEMPLATE_PLACEHOLDER;
use crate::errors::ApiError;

/// Settings form shipped with the service.
pub const SETTINGS_TEMPLATE: &str = include_str!("../../resources/settings.json");

/// Placeholder for the instant email flag.
pub const IMMEDIATE_EMAIL_PLACEHOLDER: &str = "%1";

/// Placeholder for the daily digest flag.
pub const DAILY_EMAIL_PLACEHOLDER: &str = "%2";

/// Template text holding each placeholder exactly once.
#[derive(Debug, Clone)]
pub struct SettingsTemplate {
    text: String,
}

impl SettingsTemplate {
    pub fn parse(text: &str) -> Result<Self, ApiError> {
        for placeholder in [IMMEDIATE_EMAIL_PLACEHOLDER, DAILY_EMAIL_PLACEHOLDER] {
            if text.matches(placeholder).count() != 1 {
                return Err(ApiError::InternalServerError(format!(
                    "{}: {}",
                    ERR_TEMPLATE_PLACEHOLDER, placeholder
                )));
            }
        }

        Ok(Self {
            text: text.to_string(),
        })
    }

    pub fn bundled() -> Result<Self, ApiError> {
        Self::parse(SETTINGS_TEMPLATE)
    }

    /// Substitute `%1` with the instant email flag, then `%2` with the daily flag.
    pub fn render(&self, immediate_email: bool, daily_email: bool) -> String {
        self.text
            .replacen(IMMEDIATE_EMAIL_PLACEHOLDER, flag(immediate_email), 1)
            .replacen(DAILY_EMAIL_PLACEHOLDER, flag(daily_email), 1)
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
