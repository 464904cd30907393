//! Content fingerprints for `ETag` headers.

use actix_web::http::header::EntityTag;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Structural hash of a value.
///
/// `DefaultHasher::new()` uses fixed keys, so equal values hash the same way
/// across requests and process restarts of the same build.
pub fn content_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Strong entity tag holding the decimal content hash.
pub fn entity_tag<T: Hash + ?Sized>(value: &T) -> EntityTag {
    EntityTag::new_strong(content_hash(value).to_string())
}
