//! Read-through caching for per-language FAQ listings

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::cache::{Cache, CacheExt, ListingKeyBuilder};
use crate::domain::{DomainError, LanguageCode, LocalizedFaq};

/// Configuration for the listing cache
#[derive(Debug, Clone)]
pub struct FaqCacheConfig {
    /// Namespace prefix for cache keys
    pub namespace: String,
    /// TTL for cached listings
    pub ttl: Duration,
    /// Whether caching is enabled
    pub enabled: bool,
}

impl Default for FaqCacheConfig {
    fn default() -> Self {
        Self {
            namespace: "faqs".to_string(),
            ttl: Duration::from_secs(60 * 15), // 15 minutes
            enabled: true,
        }
    }
}

impl FaqCacheConfig {
    /// Creates a new config with the given namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Disables caching
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Read-through cache in front of the localized FAQ listing
///
/// Per-language snapshots are stored under `namespace:language` with a fixed
/// TTL. A hit is returned unchanged; a miss computes, stores, and returns.
/// There is no single-flight coordination: concurrent misses may each compute
/// and store, and the last write wins.
///
/// The cache store is never load-bearing: read or write failures are logged
/// and the listing is served from the computed payload instead.
#[derive(Debug)]
pub struct FaqCacheService {
    cache: Arc<dyn Cache>,
    config: FaqCacheConfig,
    keys: ListingKeyBuilder,
}

impl FaqCacheService {
    /// Creates a new listing cache service with default configuration
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self::with_config(cache, FaqCacheConfig::default())
    }

    /// Creates a new listing cache service with custom config
    pub fn with_config(cache: Arc<dyn Cache>, config: FaqCacheConfig) -> Self {
        let keys = ListingKeyBuilder::new(config.namespace.clone());
        Self { cache, config, keys }
    }

    /// Returns the cache key used for a language
    pub fn cache_key(&self, language: &LanguageCode) -> String {
        self.keys.key_for(language)
    }

    /// Returns the configured TTL
    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }

    /// Serves the listing for a language, computing it on a cache miss
    pub async fn list_with_cache<F, Fut>(
        &self,
        language: &LanguageCode,
        compute: F,
    ) -> Result<Vec<LocalizedFaq>, DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<LocalizedFaq>, DomainError>>,
    {
        if !self.config.enabled {
            return compute().await;
        }

        let key = self.cache_key(language);

        match self.cache.get::<Vec<LocalizedFaq>>(&key).await {
            Ok(Some(cached)) => {
                debug!(key = %key, "Serving FAQ listing from cache");
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(key = %key, error = %e, "Cache read failed; computing listing directly");
            }
        }

        let computed = compute().await?;

        if let Err(e) = self.cache.set(&key, &computed, self.config.ttl).await {
            warn!(key = %key, error = %e, "Cache write failed; serving uncached listing");
        }

        Ok(computed)
    }
}
