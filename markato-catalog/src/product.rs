use chrono::Utc;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

/// Fresh opaque identifier for a catalog entry
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current timestamp in RFC 3339, the format every `last_updated` carries
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Aggressive normalization for deduplication: trim, lowercase, strip
/// diacritics via canonical decomposition, then keep ASCII alphanumerics
/// only. "Café-Olé " and "cafe ole" collapse to the same string.
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Composite key that decides whether two entries are "the same product".
/// Name and brand are normalized independently so the separator keeps
/// ("ab", "c") distinct from ("a", "bc").
pub fn dedup_key(name: &str, brand: &str) -> String {
    format!("{}|{}", normalize(name), normalize(brand))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_accents_and_punctuation() {
        assert_eq!(normalize("  Café Olé! "), "cafeole");
        assert_eq!(normalize("COCA-COLA 1.5L"), "cocacola15l");
        assert_eq!(normalize("Señor  Ñoño"), "senornono");
    }

    #[test]
    fn test_normalize_drops_non_latin_entirely() {
        assert_eq!(normalize("可乐"), "");
    }

    #[test]
    fn test_dedup_key_is_case_and_accent_insensitive() {
        assert_eq!(dedup_key("CaFé", "OLÉ"), dedup_key("cafe", "ole"));
        assert_ne!(dedup_key("ab", "c"), dedup_key("a", "bc"));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn test_now_timestamp_orders_lexicographically() {
        let a = now_timestamp();
        let b = now_timestamp();
        assert!(a <= b);
    }
}
