use actix_web::web;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::constants::{MSG_SERVER_RUNNING, MSG_STATUS_OK};
use crate::handlers;
use crate::middleware::IdentityMiddleware;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::services::RbacServer;

pub fn configure_routes(cfg: &mut web::ServiceConfig, rbac: Arc<dyn RbacServer>) {
    cfg.service(
        web::scope("/api/policies/v1.0/preferences")
            // Public routes, registered before the identity scope so they match first
            .route("/health", web::get().to(health_check))
            .route("/openapi.json", web::get().to(openapi_json))
            // Identity-protected routes
            .service(
                web::scope("")
                    .wrap(IdentityMiddleware::new(rbac))
                    // Settings form with the caller's current values
                    .route("/preferences", web::get().to(handlers::get_settings_schema))
                    // Paged listing of the account's stored settings
                    .route("/settings", web::get().to(handlers::list_settings))
                    // Preferences held by the notification service
                    .route(
                        "/notification-preference/{bundleName}/{applicationName}",
                        web::get().to(handlers::get_notification_preferences),
                    ),
            ),
    );
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/policies/v1.0/preferences/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(HealthResponse {
        status: MSG_STATUS_OK.to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::FakeRbac;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_public_routes_need_no_identity() {
        let rbac: Arc<dyn RbacServer> = Arc::new(FakeRbac::failing());
        let app = test::init_service(
            App::new().configure(|cfg| configure_routes(cfg, rbac)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/policies/v1.0/preferences/health")
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["status"], "OK");

        let req = test::TestRequest::get()
            .uri("/api/policies/v1.0/preferences/openapi.json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert!(json["paths"]["/api/policies/v1.0/preferences/preferences"].is_object());
    }

    #[actix_web::test]
    async fn test_protected_routes_need_identity() {
        let rbac: Arc<dyn RbacServer> = Arc::new(FakeRbac::failing());
        let app = test::init_service(
            App::new().configure(|cfg| configure_routes(cfg, rbac)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/policies/v1.0/preferences/preferences")
            .to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
    }
}
