//! Application constants module.
//!
//! This module centralizes constant strings used throughout the application,
//! including error messages, header names, pagination defaults, and collection names.

pub mod collections;
pub mod errors;
pub mod headers;
pub mod messages;
pub mod pagination;

pub use collections::*;
pub use errors::*;
pub use headers::*;
pub use messages::*;
pub use pagination::*;
