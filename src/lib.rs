//! FAQ Service API
//!
//! A small HTTP service for multilingual FAQ entries:
//! - FAQ entries with optional per-language translations and graceful
//!   fallback to default-language text
//! - a REST resource for listing and managing entries
//! - a read-through, per-language listing cache with a fixed TTL

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::{AppState, FaqServiceTrait};
use domain::{FaqEntry, FaqId, FaqTranslation, InMemoryFaqRepository, LanguageCode};
use infrastructure::cache::{CacheConfig, CacheFactory, CacheType};
use infrastructure::faq::PostgresFaqRepository;
use infrastructure::services::{FaqCacheConfig, FaqCacheService, FaqService};
use tracing::info;

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    // Listing cache backend
    let cache_type = config.cache.backend.parse::<CacheType>()?;
    let ttl = Duration::from_secs(config.cache.ttl_secs);

    info!("Cache backend: {}", cache_type);

    let cache_config = CacheConfig {
        cache_type,
        redis_url: config.cache.redis_url.clone(),
        key_prefix: config.cache.key_prefix.clone(),
        default_ttl: ttl,
        ..Default::default()
    };

    let cache = CacheFactory::new().create(&cache_config).await?;
    let listing_cache = Arc::new(FaqCacheService::with_config(
        cache.clone(),
        FaqCacheConfig::default().with_ttl(ttl),
    ));

    // Persistence backend
    let faq_service: Arc<dyn FaqServiceTrait> = match config.storage.backend.as_str() {
        "postgres" => {
            let database_url = std::env::var("DATABASE_URL").map_err(|_| {
                anyhow::anyhow!(
                    "DATABASE_URL environment variable is required for the postgres backend"
                )
            })?;

            info!("Connecting to PostgreSQL...");
            let pool = sqlx::PgPool::connect(&database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;

            let repository = PostgresFaqRepository::new(pool);
            repository.ensure_schema().await?;
            info!("PostgreSQL connection established");

            Arc::new(FaqService::new(Arc::new(repository)))
        }
        _ => {
            info!("Using in-memory storage for FAQ entries");
            Arc::new(FaqService::new(Arc::new(
                InMemoryFaqRepository::new().with_entries(default_faqs()),
            )))
        }
    };

    Ok(AppState::new(faq_service, listing_cache, cache))
}

// ============================================================================
// Default Entities
// ============================================================================

fn default_faqs() -> Vec<FaqEntry> {
    let spanish = LanguageCode::new("es");
    let german = LanguageCode::new("de");

    vec![
        FaqEntry::new(
            FaqId::generate(),
            "What is this service?",
            "A small API for managing frequently asked questions.",
        )
        .with_translation(
            &spanish,
            FaqTranslation::new()
                .with_question("¿Qué es este servicio?")
                .with_answer("Una pequeña API para gestionar preguntas frecuentes."),
        ),
        FaqEntry::new(
            FaqId::generate(),
            "How do I request another language?",
            "Pass a lang query parameter; unknown languages fall back to English.",
        )
        .with_translation(
            &german,
            FaqTranslation::new().with_question("Wie fordere ich eine andere Sprache an?"),
        ),
        FaqEntry::new(
            FaqId::generate(),
            "How fresh is the listing?",
            "Listings are cached per language for fifteen minutes.",
        ),
    ]
}
