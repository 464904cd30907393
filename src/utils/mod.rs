//! Small helpers shared by handlers and services.

pub mod etag;
pub mod log_sanitizer;
pub mod paging;

pub use etag::*;
pub use log_sanitizer::*;
pub use paging::*;
