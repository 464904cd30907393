//! Preferences handlers for the settings form, settings listing, and notification preferences.

use actix_web::http::header::{ContentType, ETag};
use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, warn};

use crate::constants::ERR_NO_PERMISSION_READ_SETTINGS;
use crate::errors::ApiError;
use crate::middleware::{require_principal, require_read_policies};
use crate::services::PreferencesService;
use crate::utils::{entity_tag, extract_pager, mask_identifier, response_builder};

/// Get the settings form filled with the caller's email settings
#[utoipa::path(
    get,
    path = "/api/policies/v1.0/preferences/preferences",
    tag = "Preferences",
    responses(
        (status = 200, description = "Settings form with current values", body = String, content_type = "application/json"),
        (status = 401, description = "Missing or invalid identity", body = crate::models::Msg),
        (status = 403, description = "No permission to read settings", body = String, content_type = "text/plain"),
        (status = 500, description = "Settings could not be retrieved", body = crate::models::Msg)
    ),
    security(
        ("rh_identity" = [])
    )
)]
pub async fn get_settings_schema(
    preferences_service: web::Data<PreferencesService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let principal = require_principal(&req)?;
    require_read_policies(&principal, ERR_NO_PERMISSION_READ_SETTINGS)?;

    let rendered = preferences_service
        .render_settings(&principal.name)
        .await
        .map_err(|e| {
            warn!("Retrieving settings failed: {}", e.message());
            ApiError::InternalServerError(e.message().to_string())
        })?;

    debug!(
        "Rendered settings for user {}",
        mask_identifier(&principal.name)
    );
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .insert_header(ETag(entity_tag(&rendered)))
        .body(rendered))
}

/// List the stored email settings of the caller's account
#[utoipa::path(
    get,
    path = "/api/policies/v1.0/preferences/settings",
    tag = "Preferences",
    params(
        ("page" = Option<i32>, Query, description = "Zero-based page index (default: 0)"),
        ("pageSize" = Option<i32>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "One page of settings, with ETag and TotalCount headers", body = Vec<crate::models::SettingsValuesResponse>),
        (status = 204, description = "The requested page is empty"),
        (status = 400, description = "Malformed paging parameter", body = crate::models::Msg),
        (status = 401, description = "Missing or invalid identity", body = crate::models::Msg),
        (status = 403, description = "No permission to read settings", body = String, content_type = "text/plain"),
        (status = 500, description = "Settings could not be retrieved", body = crate::models::Msg)
    ),
    security(
        ("rh_identity" = [])
    )
)]
pub async fn list_settings(
    preferences_service: web::Data<PreferencesService>,
    query: web::Query<Vec<(String, String)>>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let pager = extract_pager(&query)?;
    let principal = require_principal(&req)?;
    require_read_policies(&principal, ERR_NO_PERMISSION_READ_SETTINGS)?;

    let page = preferences_service
        .list_account_settings(&principal.account, &pager)
        .await
        .map_err(|e| {
            warn!("Listing settings failed: {}", e.message());
            ApiError::InternalServerError(e.message().to_string())
        })?;

    debug!(
        "Listed {} of {} settings for page {}",
        page.len(),
        page.total_count,
        pager.page
    );
    Ok(response_builder(&page))
}

/// Get the caller's preferences from the notification service
///
/// When the notification service cannot be reached both flags are `null`.
#[utoipa::path(
    get,
    path = "/api/policies/v1.0/preferences/notification-preference/{bundleName}/{applicationName}",
    tag = "Preferences",
    params(
        ("bundleName" = String, Path, description = "Bundle name"),
        ("applicationName" = String, Path, description = "Application name")
    ),
    responses(
        (status = 200, description = "Preferences, null when unknown", body = crate::models::UserPreferences),
        (status = 401, description = "Missing or invalid identity", body = crate::models::Msg),
        (status = 403, description = "No permission to read settings", body = String, content_type = "text/plain")
    ),
    security(
        ("rh_identity" = [])
    )
)]
pub async fn get_notification_preferences(
    preferences_service: web::Data<PreferencesService>,
    path: web::Path<(String, String)>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let (bundle_name, application_name) = path.into_inner();
    let principal = require_principal(&req)?;
    require_read_policies(&principal, ERR_NO_PERMISSION_READ_SETTINGS)?;

    let preferences = preferences_service
        .notification_preferences(&bundle_name, &application_name, principal.raw_identity())
        .await;

    Ok(HttpResponse::Ok().json(preferences))
}
