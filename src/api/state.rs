//! Application state for shared services

use std::sync::Arc;

use crate::domain::faq::FaqRepository;
use crate::domain::{Cache, DomainError, FaqEntry, LanguageCode, LocalizedFaq};
use crate::infrastructure::services::{
    CreateFaqRequest, FaqCacheService, FaqService, UpdateFaqRequest,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub faq_service: Arc<dyn FaqServiceTrait>,
    pub listing_cache: Arc<FaqCacheService>,
    pub cache: Arc<dyn Cache>,
}

/// Trait for FAQ service operations
#[async_trait::async_trait]
pub trait FaqServiceTrait: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<FaqEntry>, DomainError>;
    async fn list(&self) -> Result<Vec<FaqEntry>, DomainError>;
    async fn list_localized(
        &self,
        language: &LanguageCode,
    ) -> Result<Vec<LocalizedFaq>, DomainError>;
    async fn create(&self, request: CreateFaqRequest) -> Result<FaqEntry, DomainError>;
    async fn update(&self, id: &str, request: UpdateFaqRequest) -> Result<FaqEntry, DomainError>;
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}

#[async_trait::async_trait]
impl<R: FaqRepository + 'static> FaqServiceTrait for FaqService<R> {
    async fn get(&self, id: &str) -> Result<Option<FaqEntry>, DomainError> {
        FaqService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<FaqEntry>, DomainError> {
        FaqService::list(self).await
    }

    async fn list_localized(
        &self,
        language: &LanguageCode,
    ) -> Result<Vec<LocalizedFaq>, DomainError> {
        FaqService::list_localized(self, language).await
    }

    async fn create(&self, request: CreateFaqRequest) -> Result<FaqEntry, DomainError> {
        FaqService::create(self, request).await
    }

    async fn update(&self, id: &str, request: UpdateFaqRequest) -> Result<FaqEntry, DomainError> {
        FaqService::update(self, id, request).await
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        FaqService::delete(self, id).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        faq_service: Arc<dyn FaqServiceTrait>,
        listing_cache: Arc<FaqCacheService>,
        cache: Arc<dyn Cache>,
    ) -> Self {
        Self {
            faq_service,
            listing_cache,
            cache,
        }
    }
}
