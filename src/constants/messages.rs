//! Success message constants used throughout the application.

pub const MSG_SERVER_RUNNING: &str = "Server is running";
pub const MSG_STATUS_OK: &str = "OK";
