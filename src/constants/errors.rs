//! Error message constants used throughout the application.

// Identity errors
pub const ERR_MISSING_IDENTITY: &str = "Missing x-rh-identity header";
pub const ERR_INVALID_IDENTITY: &str = "Invalid x-rh-identity header";
pub const ERR_AUTH_REQUIRED: &str = "Authentication required";

// Authorization errors
pub const ERR_NO_PERMISSION_READ_SETTINGS: &str = "You don't have permission to read settings";

// Template errors
pub const ERR_TEMPLATE_PLACEHOLDER: &str = "Settings template must contain each placeholder exactly once";

// Outbound service errors
pub const ERR_NOTIFICATIONS_UNAVAILABLE: &str = "Notification service unavailable";
pub const ERR_RBAC_UNAVAILABLE: &str = "RBAC service unavailable";
