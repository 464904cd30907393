//! HTTP request handlers organized by domain.

pub mod preferences_handler;

pub use preferences_handler::*;
