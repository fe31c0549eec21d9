//! FAQ service - CRUD operations and localized listing

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::{
    DomainError, FaqEntry, FaqId, FaqRepository, FaqTranslation, LanguageCode, LocalizedFaq,
};

/// Request to create a new FAQ entry
#[derive(Debug, Clone)]
pub struct CreateFaqRequest {
    pub question: String,
    pub answer: String,
    pub translations: BTreeMap<String, FaqTranslation>,
}

/// Request to update an existing FAQ entry
///
/// `translations`, when present, replaces the whole map.
#[derive(Debug, Clone, Default)]
pub struct UpdateFaqRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub translations: Option<BTreeMap<String, FaqTranslation>>,
}

/// FAQ service for CRUD and localized listing operations
///
/// Writes do not touch the listing cache; a cached listing may lag a write by
/// at most one TTL window.
#[derive(Debug)]
pub struct FaqService<R: FaqRepository> {
    repository: Arc<R>,
}

impl<R: FaqRepository> FaqService<R> {
    /// Create a new FaqService with the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Get an entry by ID
    pub async fn get(&self, id: &str) -> Result<Option<FaqEntry>, DomainError> {
        let faq_id = self.parse_faq_id(id)?;
        self.repository.get(&faq_id).await
    }

    /// Get an entry by ID, returning an error if not found
    pub async fn get_required(&self, id: &str) -> Result<FaqEntry, DomainError> {
        self.get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("FAQ '{}' not found", id)))
    }

    /// List all entries in stable order (creation time, then id)
    pub async fn list(&self) -> Result<Vec<FaqEntry>, DomainError> {
        let mut entries = self.repository.list().await?;
        entries.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(entries)
    }

    /// List all entries projected into the requested language
    pub async fn list_localized(
        &self,
        language: &LanguageCode,
    ) -> Result<Vec<LocalizedFaq>, DomainError> {
        let entries = self.list().await?;
        Ok(entries.iter().map(|entry| entry.localize(language)).collect())
    }

    /// Create a new entry
    pub async fn create(&self, request: CreateFaqRequest) -> Result<FaqEntry, DomainError> {
        Self::validate_text("question", &request.question)?;
        Self::validate_text("answer", &request.answer)?;
        let translations = Self::normalize_translations(request.translations)?;

        let mut entry = FaqEntry::new(FaqId::generate(), request.question, request.answer);
        entry.set_translations(translations);

        self.repository.create(entry).await
    }

    /// Update an existing entry
    pub async fn update(&self, id: &str, request: UpdateFaqRequest) -> Result<FaqEntry, DomainError> {
        let faq_id = self.parse_faq_id(id)?;

        let mut entry = self
            .repository
            .get(&faq_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("FAQ '{}' not found", id)))?;

        if let Some(question) = request.question {
            Self::validate_text("question", &question)?;
            entry.set_question(question);
        }

        if let Some(answer) = request.answer {
            Self::validate_text("answer", &answer)?;
            entry.set_answer(answer);
        }

        if let Some(translations) = request.translations {
            entry.set_translations(Self::normalize_translations(translations)?);
        }

        self.repository.update(entry).await
    }

    /// Delete an entry by ID
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let faq_id = self.parse_faq_id(id)?;
        self.repository.delete(&faq_id).await
    }

    fn parse_faq_id(&self, id: &str) -> Result<FaqId, DomainError> {
        FaqId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))
    }

    fn validate_text(field: &str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "Field '{}' must not be empty",
                field
            )));
        }
        Ok(())
    }

    /// Normalize translation language keys and reject empty translations
    fn normalize_translations(
        translations: BTreeMap<String, FaqTranslation>,
    ) -> Result<BTreeMap<String, FaqTranslation>, DomainError> {
        let mut normalized = BTreeMap::new();

        for (language, translation) in translations {
            if translation.is_empty() {
                return Err(DomainError::validation(format!(
                    "Translation for '{}' must provide a question or an answer",
                    language
                )));
            }

            let code = LanguageCode::new(&language);
            normalized.insert(code.as_str().to_string(), translation);
        }

        Ok(normalized)
    }
}
