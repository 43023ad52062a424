//! Canonical repository identifier parsing.

use uuid::{Uuid, Variant};

/// Length of the hyphenated `8-4-4-4-12` form.
const HYPHENATED_LEN: usize = 36;

/// Parse a path parameter in canonical UUID form.
///
/// Accepts the hyphenated form only (either case), of version 1 to 5 with
/// the RFC 4122 variant, plus the nil UUID. Simple, braced and URN forms
/// are rejected even though [`Uuid::parse_str`] understands them.
pub fn parse_canonical(raw: &str) -> Option<Uuid> {
    if raw.len() != HYPHENATED_LEN {
        return None;
    }

    let id = Uuid::parse_str(raw).ok()?;
    if id.is_nil() {
        return Some(id);
    }

    let version_ok = (1..=5).contains(&id.get_version_num());
    let variant_ok = id.get_variant() == Variant::RFC4122;

    (version_ok && variant_ok).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_generated_ids() {
        let id = Uuid::new_v4();
        assert_eq!(parse_canonical(&id.to_string()), Some(id));
    }

    #[test]
    fn test_accepts_uppercase() {
        let raw = "550E8400-E29B-41D4-A716-446655440000";
        assert!(parse_canonical(raw).is_some());
    }

    #[test]
    fn test_accepts_nil() {
        assert_eq!(
            parse_canonical("00000000-0000-0000-0000-000000000000"),
            Some(Uuid::nil())
        );
    }

    #[test]
    fn test_rejects_other_textual_forms() {
        assert!(parse_canonical("550e8400e29b41d4a716446655440000").is_none());
        assert!(parse_canonical("{550e8400-e29b-41d4-a716-446655440000}").is_none());
        assert!(parse_canonical("urn:uuid:550e8400-e29b-41d4-a716-446655440000").is_none());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_canonical("").is_none());
        assert!(parse_canonical("123").is_none());
        assert!(parse_canonical("550e8400-e29b-41d4-a716-44665544000g").is_none());
    }

    #[test]
    fn test_rejects_unknown_version_and_variant() {
        // version nibble 0
        assert!(parse_canonical("550e8400-e29b-01d4-a716-446655440000").is_none());
        // Microsoft variant
        assert!(parse_canonical("550e8400-e29b-41d4-c716-446655440000").is_none());
    }
}
