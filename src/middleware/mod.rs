//! Request middleware and helpers for identity handling.

pub mod auth_helpers;
pub mod identity_middleware;
pub mod request_ext;

pub use auth_helpers::*;
pub use identity_middleware::IdentityMiddleware;
pub use request_ext::RequestExt;
