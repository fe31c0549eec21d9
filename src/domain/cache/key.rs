//! Cache key derivation for per-language listings

use crate::domain::language::LanguageCode;

/// Derives the cache key for a per-language listing snapshot
///
/// Keys are a fixed namespace joined to the normalized language code, so the
/// same requested language always maps to the same key.
#[derive(Debug, Clone)]
pub struct ListingKeyBuilder {
    namespace: String,
}

impl ListingKeyBuilder {
    /// Creates a builder with the given namespace prefix
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Returns the namespace prefix
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Builds the key for a language
    pub fn key_for(&self, language: &LanguageCode) -> String {
        format!("{}:{}", self.namespace, language.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_shape() {
        let keys = ListingKeyBuilder::new("faqs");
        assert_eq!(keys.key_for(&LanguageCode::new("en")), "faqs:en");
        assert_eq!(keys.key_for(&LanguageCode::new("hi")), "faqs:hi");
    }

    #[test]
    fn test_keys_are_deterministic() {
        let keys = ListingKeyBuilder::new("faqs");
        let language = LanguageCode::new("de");

        assert_eq!(keys.key_for(&language), keys.key_for(&language));
    }

    #[test]
    fn test_normalized_codes_share_a_key() {
        let keys = ListingKeyBuilder::new("faqs");

        assert_eq!(
            keys.key_for(&LanguageCode::new("FR")),
            keys.key_for(&LanguageCode::new(" fr "))
        );
    }

    #[test]
    fn test_distinct_languages_get_distinct_keys() {
        let keys = ListingKeyBuilder::new("faqs");

        assert_ne!(
            keys.key_for(&LanguageCode::new("en")),
            keys.key_for(&LanguageCode::new("es"))
        );
    }
}
