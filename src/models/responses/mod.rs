//! Response models for API endpoints.

pub mod api;
pub mod settings_values;

pub use api::*;
pub use settings_values::*;
