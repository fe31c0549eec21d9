//! Domain layer - Core business logic and entities

pub mod cache;
pub mod error;
pub mod faq;
pub mod language;

pub use cache::{Cache, CacheExt, ListingKeyBuilder};
pub use error::DomainError;
pub use faq::{
    FaqEntry, FaqId, FaqIdError, FaqRepository, FaqTranslation, InMemoryFaqRepository,
    LocalizedFaq,
};
pub use language::{LanguageCode, DEFAULT_LANGUAGE};
