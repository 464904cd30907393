//! Log sanitization utilities for masking identity data.
//!
//! User names and account numbers come from the identity header and are
//! masked before logging to avoid leaking them into operator logs.

/// Mask a value for safe logging.
///
/// Shows only the first 3 characters followed by asterisks.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_identifier("johndoe"), "joh***");
/// assert_eq!(mask_identifier("ab"), "ab***");
/// ```
pub fn mask_identifier(value: &str) -> String {
    let visible: String = value.chars().take(3).collect();
    format!("{}***", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_identifier() {
        assert_eq!(mask_identifier("johndoe"), "joh***");
        assert_eq!(mask_identifier("ab"), "ab***");
        assert_eq!(mask_identifier("a"), "a***");
        assert_eq!(mask_identifier(""), "***");
    }

    #[test]
    fn test_mask_identifier_multibyte() {
        assert_eq!(mask_identifier("jürgen"), "jür***");
    }
}
