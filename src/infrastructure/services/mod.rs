//! Application services built on the domain layer

mod faq_cache_service;
mod faq_service;

pub use faq_cache_service::{FaqCacheConfig, FaqCacheService};
pub use faq_service::{CreateFaqRequest, FaqService, UpdateFaqRequest};
