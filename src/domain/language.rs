//! Language code handling for translation lookups

use serde::{Deserialize, Serialize};

/// Default language for canonical question/answer text
pub const DEFAULT_LANGUAGE: &str = "en";

/// Normalized language code used for translation lookups and cache keys
///
/// Construction never fails: codes are trimmed and lowercased, and anything
/// left over is a valid code that simply has no translations stored for it.
/// Unknown or malformed codes therefore fall back to default-language text
/// instead of raising a validation error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a normalized language code; empty input yields the default
    pub fn new(code: impl AsRef<str>) -> Self {
        let normalized = code.as_ref().trim().to_ascii_lowercase();

        if normalized.is_empty() {
            Self::default()
        } else {
            Self(normalized)
        }
    }

    /// Resolve an optional request parameter to a code, defaulting to `en`
    pub fn from_optional(code: Option<&str>) -> Self {
        match code {
            Some(value) => Self::new(value),
            None => Self::default(),
        }
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the default language
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_LANGUAGE
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }
}

impl From<String> for LanguageCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(LanguageCode::new("EN").as_str(), "en");
        assert_eq!(LanguageCode::new("  Hi ").as_str(), "hi");
        assert_eq!(LanguageCode::new("pt-BR").as_str(), "pt-br");
    }

    #[test]
    fn test_empty_falls_back_to_default() {
        assert_eq!(LanguageCode::new("").as_str(), DEFAULT_LANGUAGE);
        assert_eq!(LanguageCode::new("   ").as_str(), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_from_optional() {
        assert_eq!(LanguageCode::from_optional(None).as_str(), "en");
        assert_eq!(LanguageCode::from_optional(Some("de")).as_str(), "de");
    }

    #[test]
    fn test_malformed_codes_are_not_errors() {
        // Garbage input is a valid code with no translations, not a failure
        let code = LanguageCode::new("not-a-language!");
        assert_eq!(code.as_str(), "not-a-language!");
        assert!(!code.is_default());
    }

    #[test]
    fn test_is_default() {
        assert!(LanguageCode::default().is_default());
        assert!(LanguageCode::new("En").is_default());
        assert!(!LanguageCode::new("fr").is_default());
    }
}
