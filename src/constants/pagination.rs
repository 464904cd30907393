//! Pagination constants for list endpoints.

/// Query parameter holding the zero-based page index.
pub const QUERY_PAGE: &str = "page";

/// Query parameter holding the number of items per page.
pub const QUERY_PAGE_SIZE: &str = "pageSize";

/// Default starting page number.
pub const DEFAULT_PAGE: i32 = 0;

/// Default number of items per page when not specified in the request.
pub const DEFAULT_ITEMS_PER_PAGE: i32 = 10;
