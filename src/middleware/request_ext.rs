//! Request extension trait for extracting the principal from HTTP requests.

use actix_web::HttpMessage;

use crate::models::RhIdPrincipal;

/// Extension trait for reading the caller's identity from HTTP requests.
///
/// The principal is added to the request extensions by the IdentityMiddleware.
pub trait RequestExt {
    /// Get the principal from the request extensions.
    ///
    /// Returns `None` when the request did not pass through the middleware.
    fn get_principal(&self) -> Option<RhIdPrincipal>;
}

impl RequestExt for actix_web::HttpRequest {
    fn get_principal(&self) -> Option<RhIdPrincipal> {
        self.extensions().get::<RhIdPrincipal>().cloned()
    }
}
