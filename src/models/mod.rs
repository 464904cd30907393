//! Data models organized by type.

pub mod pager;
pub mod preferences;
pub mod principal;
pub mod rbac;
pub mod responses;
pub mod settings;

pub use pager::*;
pub use preferences::*;
pub use principal::*;
pub use rbac::*;
pub use responses::*;
pub use settings::*;
