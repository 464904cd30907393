//! HTTP header names shared by handlers and outbound clients.

/// Identity header forwarded by the gateway (base64 encoded JSON).
pub const HEADER_RH_IDENTITY: &str = "x-rh-identity";

/// Total number of items across all pages of a listing.
pub const HEADER_TOTAL_COUNT: &str = "TotalCount";
