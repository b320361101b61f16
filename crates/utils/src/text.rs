//! Text normalization shared by the page persistence layer.

/// Trims and lowercases a slug. Idempotent.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}

/// Trims an optional free-text field, mapping blank values to `None`.
///
/// Used on every optional page field before it reaches storage, so blank
/// submissions are stored as NULL instead of empty strings.
pub fn sanitize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_slug_trims_and_lowercases() {
        assert_eq!(normalize_slug(" Foo-Bar "), "foo-bar");
    }

    #[test]
    fn normalize_slug_is_idempotent() {
        let once = normalize_slug("  Mixed-CASE-42 ");
        assert_eq!(normalize_slug(&once), once);
    }

    #[test]
    fn sanitize_optional_trims_values() {
        assert_eq!(sanitize_optional(Some(" x ")), Some("x".to_string()));
    }

    #[test]
    fn sanitize_optional_drops_blank_values() {
        assert_eq!(sanitize_optional(Some("")), None);
        assert_eq!(sanitize_optional(Some("   ")), None);
        assert_eq!(sanitize_optional(None), None);
    }
}
