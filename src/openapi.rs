use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{HealthResponse, Msg, SettingsValuesResponse, UserPreferences};

/// OpenAPI documentation for the Preferences API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Policies Preferences API",
        version = "1.0.0",
        description = "Email notification preferences of the policies service.",
        license(name = "Apache-2.0", url = "https://www.apache.org/licenses/LICENSE-2.0")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Preferences", description = "Email notification preferences")
    ),
    paths(
        crate::handlers::get_settings_schema,
        crate::handlers::list_settings,
        crate::handlers::get_notification_preferences,
        crate::routes::health_check
    ),
    components(
        schemas(
            Msg,
            HealthResponse,
            SettingsValuesResponse,
            UserPreferences
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for the gateway identity header
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "rh_identity",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "x-rh-identity",
                    "Base64 encoded identity forwarded by the gateway",
                ))),
            );
        }
    }
}
