use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::models::Msg;

#[derive(Debug)]
pub enum ApiError {
    InvalidArgument(String),
    Unauthorized(String),
    Forbidden(String),
    InternalServerError(String),
    ServiceUnavailable(String),
}

impl ApiError {
    /// The bare message carried by the error, without the status prefix.
    pub fn message(&self) -> &str {
        match self {
            ApiError::InvalidArgument(message)
            | ApiError::Unauthorized(message)
            | ApiError::Forbidden(message)
            | ApiError::InternalServerError(message)
            | ApiError::ServiceUnavailable(message) => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::ServiceUnavailable(msg) => write!(f, "Service Unavailable: {}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InvalidArgument(message) => {
                HttpResponse::BadRequest().json(Msg::new(message))
            }
            ApiError::Unauthorized(message) => HttpResponse::Unauthorized().json(Msg::new(message)),
            // Denials carry a fixed plain-text explanation and nothing else
            ApiError::Forbidden(message) => HttpResponse::Forbidden()
                .content_type(ContentType::plaintext())
                .body(message.clone()),
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(Msg::new(message))
            }
            ApiError::ServiceUnavailable(message) => {
                HttpResponse::ServiceUnavailable().json(Msg::new(message))
            }
        }
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::ServiceUnavailable(err.to_string())
    }
}
