//! Cache domain - key/value caching abstraction with TTL

mod key;
mod repository;

pub use key::ListingKeyBuilder;
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
