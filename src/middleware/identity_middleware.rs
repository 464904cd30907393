//! Identity middleware for protected routes.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use log::{debug, warn};
use std::rc::Rc;
use std::sync::Arc;

use crate::constants::{ERR_MISSING_IDENTITY, HEADER_RH_IDENTITY};
use crate::errors::ApiError;
use crate::models::RhIdPrincipal;
use crate::services::RbacServer;
use crate::utils::mask_identifier;

/// Identity middleware.
///
/// This middleware decodes the `x-rh-identity` header forwarded by the
/// gateway, asks RBAC for the caller's permissions and adds the resulting
/// principal to the request extensions.
pub struct IdentityMiddleware {
    rbac: Arc<dyn RbacServer>,
}

impl IdentityMiddleware {
    pub fn new(rbac: Arc<dyn RbacServer>) -> Self {
        Self { rbac }
    }
}

impl<S, B> Transform<S, ServiceRequest> for IdentityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = IdentityMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(IdentityMiddlewareService {
            service: Rc::new(service),
            rbac: Arc::clone(&self.rbac),
        })
    }
}

pub struct IdentityMiddlewareService<S> {
    service: Rc<S>,
    rbac: Arc<dyn RbacServer>,
}

impl<S, B> Service<ServiceRequest> for IdentityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let rbac = Arc::clone(&self.rbac);

        Box::pin(async move {
            let header = req
                .headers()
                .get(HEADER_RH_IDENTITY)
                .and_then(|h| h.to_str().ok())
                .map(str::to_string);

            let header = match header {
                Some(header) => header,
                None => {
                    return Err(ApiError::Unauthorized(ERR_MISSING_IDENTITY.to_string()).into());
                }
            };

            let principal = RhIdPrincipal::from_identity_header(&header)?;

            // Without an access list the caller keeps no permissions and is denied later
            let principal = match rbac.get_rbac_info(&header).await {
                Ok(access) => principal.with_rbac(&access),
                Err(e) => {
                    warn!(
                        "RBAC lookup failed for user {}: {}",
                        mask_identifier(&principal.name),
                        e
                    );
                    principal
                }
            };
            debug!(
                "Request by user {} of account {}",
                mask_identifier(&principal.name),
                mask_identifier(&principal.account)
            );

            req.extensions_mut().insert(principal);

            let res = service.call(req).await?;
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::RequestExt;
    use crate::models::principal::encode_identity;
    use crate::services::fakes::FakeRbac;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpRequest, HttpResponse};

    async fn whoami(req: HttpRequest) -> HttpResponse {
        match req.get_principal() {
            Some(p) => HttpResponse::Ok().body(format!("{}:{}", p.name, p.can_read_policies())),
            None => HttpResponse::InternalServerError().finish(),
        }
    }

    macro_rules! app {
        ($rbac:expr) => {
            test::init_service(
                App::new().service(
                    web::scope("")
                        .wrap(IdentityMiddleware::new(Arc::new($rbac)))
                        .route("/whoami", web::get().to(whoami)),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_principal_with_permissions() {
        let app = app!(FakeRbac::granting(&["policies:*:read"]));
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((HEADER_RH_IDENTITY, encode_identity("1", "jdoe")))
            .to_request();

        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(&body[..], b"jdoe:true");
    }

    #[actix_web::test]
    async fn test_rbac_failure_keeps_principal_without_permissions() {
        let app = app!(FakeRbac::failing());
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((HEADER_RH_IDENTITY, encode_identity("1", "jdoe")))
            .to_request();

        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(&body[..], b"jdoe:false");
    }

    #[actix_web::test]
    async fn test_missing_identity_is_unauthorized() {
        let app = app!(FakeRbac::granting(&["policies:*:*"]));
        let req = test::TestRequest::get().uri("/whoami").to_request();

        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_invalid_identity_is_unauthorized() {
        let app = app!(FakeRbac::granting(&["policies:*:*"]));
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((HEADER_RH_IDENTITY, "garbage"))
            .to_request();

        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
    }
}
