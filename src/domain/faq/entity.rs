//! FAQ entry entity and related types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::language::LanguageCode;

/// Error raised when an FAQ id fails validation
#[derive(Debug, Error)]
pub enum FaqIdError {
    #[error("invalid FAQ id '{0}': expected a UUID")]
    Invalid(String),
}

/// FAQ entry identifier - a UUID carried as a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FaqId(String);

impl FaqId {
    /// Create a new FaqId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, FaqIdError> {
        let id = id.into();

        if Uuid::parse_str(&id).is_err() {
            return Err(FaqIdError::Invalid(id));
        }

        Ok(Self(id))
    }

    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FaqId {
    type Error = FaqIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FaqId> for String {
    fn from(id: FaqId) -> Self {
        id.0
    }
}

impl std::fmt::Display for FaqId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-language overrides for an FAQ entry
///
/// Either field may be absent; fallback to the default-language text is
/// applied per field at read time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqTranslation {
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    answer: Option<String>,
}

impl FaqTranslation {
    /// Create an empty translation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// A translation carrying neither field overrides nothing
    pub fn is_empty(&self) -> bool {
        self.question.is_none() && self.answer.is_none()
    }
}

/// Localized projection of an FAQ entry, as served by the listing endpoint
///
/// This is the payload stored in the listing cache, so field order and
/// serialization must stay deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedFaq {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// FAQ entry with default-language text and optional translations
///
/// Invariant: `question` and `answer` always hold the default-language
/// canonical text. Translations are optional per language code and are keyed
/// by the normalized form of the code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Unique identifier
    id: FaqId,
    /// Default-language question text
    question: String,
    /// Default-language answer text
    answer: String,
    /// Per-language overrides, keyed by normalized language code
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    translations: BTreeMap<String, FaqTranslation>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl FaqEntry {
    /// Create a new entry with default-language text
    pub fn new(id: FaqId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            translations: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reassemble an entry from persisted fields
    pub fn restore(
        id: FaqId,
        question: String,
        answer: String,
        translations: BTreeMap<String, FaqTranslation>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            question,
            answer,
            translations,
            created_at,
            updated_at,
        }
    }

    pub fn with_translation(mut self, language: &LanguageCode, translation: FaqTranslation) -> Self {
        self.translations
            .insert(language.as_str().to_string(), translation);
        self
    }

    // Getters

    pub fn id(&self) -> &FaqId {
        &self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn translations(&self) -> &BTreeMap<String, FaqTranslation> {
        &self.translations
    }

    pub fn translation(&self, language: &LanguageCode) -> Option<&FaqTranslation> {
        self.translations.get(language.as_str())
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Question text for the requested language, falling back to the
    /// default-language text when no translation is stored
    pub fn translated_question(&self, language: &LanguageCode) -> &str {
        self.translation(language)
            .and_then(FaqTranslation::question)
            .unwrap_or(&self.question)
    }

    /// Answer text for the requested language, with the same fallback
    pub fn translated_answer(&self, language: &LanguageCode) -> &str {
        self.translation(language)
            .and_then(FaqTranslation::answer)
            .unwrap_or(&self.answer)
    }

    /// Project the entry into the requested language
    pub fn localize(&self, language: &LanguageCode) -> LocalizedFaq {
        LocalizedFaq {
            id: self.id.as_str().to_string(),
            question: self.translated_question(language).to_string(),
            answer: self.translated_answer(language).to_string(),
        }
    }

    // Mutators

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
        self.touch();
    }

    pub fn set_answer(&mut self, answer: impl Into<String>) {
        self.answer = answer.into();
        self.touch();
    }

    /// Insert or replace the translation for a language
    pub fn set_translation(&mut self, language: &LanguageCode, translation: FaqTranslation) {
        self.translations
            .insert(language.as_str().to_string(), translation);
        self.touch();
    }

    /// Replace the whole translations map
    pub fn set_translations(&mut self, translations: BTreeMap<String, FaqTranslation>) {
        self.translations = translations;
        self.touch();
    }

    pub fn remove_translation(&mut self, language: &LanguageCode) -> bool {
        if self.translations.remove(language.as_str()).is_some() {
            self.touch();
            true
        } else {
            false
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
