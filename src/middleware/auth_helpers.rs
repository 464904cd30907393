//! Authorization helper functions.
//!
//! These helpers keep the identity and permission checks at the top of each
//! handler, before any data access happens.

use actix_web::HttpRequest;
use log::warn;

use crate::constants::ERR_AUTH_REQUIRED;
use crate::errors::ApiError;
use crate::models::RhIdPrincipal;
use crate::utils::mask_identifier;

use super::RequestExt;

/// Extract the principal from the request or return an Unauthorized error.
///
/// # Example
/// ```ignore
/// let principal = require_principal(&req)?;
/// ```
pub fn require_principal(req: &HttpRequest) -> Result<RhIdPrincipal, ApiError> {
    req.get_principal().ok_or_else(|| {
        warn!("Failed to get principal from request");
        ApiError::Unauthorized(ERR_AUTH_REQUIRED.to_string())
    })
}

/// Require the policies read permission or return a Forbidden error.
///
/// # Example
/// ```ignore
/// let principal = require_principal(&req)?;
/// require_read_policies(&principal, ERR_NO_PERMISSION_READ_SETTINGS)?;
/// ```
pub fn require_read_policies(principal: &RhIdPrincipal, denial_msg: &str) -> Result<(), ApiError> {
    if !principal.can_read_policies() {
        warn!(
            "User {} without read permission was denied",
            mask_identifier(&principal.name)
        );
        return Err(ApiError::Forbidden(denial_msg.to_string()));
    }
    Ok(())
}
