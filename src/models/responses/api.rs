//! Generic API response models.

use serde::Serialize;
use utoipa::ToSchema;

/// Message body returned for errors
#[derive(Debug, Serialize, ToSchema)]
pub struct Msg {
    /// Human readable detail
    #[schema(example = "page expects an int but found [abc]")]
    pub message: String,
}

impl Msg {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}
