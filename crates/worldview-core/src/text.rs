// crates/worldview-core/src/text.rs
use std::cmp::Ordering;

/// Convert a string into a folded key suitable for ordering and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// Ordering by this key gives the catalog's "base sensitivity" alphabetical
/// order: case and diacritics do not separate entries.
///
/// # Examples
///
/// ```rust
/// use worldview_core::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
///
/// ```rust
/// use worldview_core::equals_folded;
///
/// assert!(equals_folded("Réunion", "reunion"));
/// assert!(!equals_folded("Niger", "Nigeria"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Total order on folded keys.
pub fn cmp_folded(a: &str, b: &str) -> Ordering {
    fold_key(a).cmp(&fold_key(b))
}

/// Plain case-insensitive substring test (no accent folding).
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_sorts_with_uppercase() {
        assert_eq!(cmp_folded("albania", "Belgium"), Ordering::Less);
        assert_eq!(cmp_folded("Åland Islands", "Albania"), Ordering::Less);
        assert_eq!(cmp_folded("Zambia", "zambia"), Ordering::Equal);
    }

    #[test]
    fn substring_ignores_case_only() {
        assert!(contains_ignore_case("France", "FRA"));
        assert!(!contains_ignore_case("Réunion", "reu"));
    }
}
