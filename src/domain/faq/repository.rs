//! FAQ repository trait

use async_trait::async_trait;

use super::{FaqEntry, FaqId};
use crate::domain::DomainError;

/// Repository trait for FAQ entry persistence
#[async_trait]
pub trait FaqRepository: Send + Sync + std::fmt::Debug {
    /// Get an entry by ID
    async fn get(&self, id: &FaqId) -> Result<Option<FaqEntry>, DomainError>;

    /// Get all entries
    async fn list(&self) -> Result<Vec<FaqEntry>, DomainError>;

    /// Create a new entry
    async fn create(&self, entry: FaqEntry) -> Result<FaqEntry, DomainError>;

    /// Update an existing entry
    async fn update(&self, entry: FaqEntry) -> Result<FaqEntry, DomainError>;

    /// Delete an entry by ID
    async fn delete(&self, id: &FaqId) -> Result<bool, DomainError>;

    /// Check if an entry exists
    async fn exists(&self, id: &FaqId) -> Result<bool, DomainError>;
}

/// In-memory implementation of FaqRepository
pub mod in_memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory implementation of FaqRepository for development and tests
    #[derive(Debug, Default)]
    pub struct InMemoryFaqRepository {
        entries: Mutex<HashMap<String, FaqEntry>>,
    }

    impl InMemoryFaqRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entry(self, entry: FaqEntry) -> Self {
            self.entries
                .lock()
                .unwrap()
                .insert(entry.id().to_string(), entry);
            self
        }

        pub fn with_entries(self, entries: Vec<FaqEntry>) -> Self {
            let mut map = self.entries.lock().unwrap();

            for entry in entries {
                map.insert(entry.id().to_string(), entry);
            }
            drop(map);
            self
        }
    }

    #[async_trait]
    impl FaqRepository for InMemoryFaqRepository {
        async fn get(&self, id: &FaqId) -> Result<Option<FaqEntry>, DomainError> {
            Ok(self.entries.lock().unwrap().get(id.as_str()).cloned())
        }

        async fn list(&self) -> Result<Vec<FaqEntry>, DomainError> {
            Ok(self.entries.lock().unwrap().values().cloned().collect())
        }

        async fn create(&self, entry: FaqEntry) -> Result<FaqEntry, DomainError> {
            let id = entry.id().to_string();

            if self.entries.lock().unwrap().contains_key(&id) {
                return Err(DomainError::conflict(format!(
                    "FAQ with ID '{}' already exists",
                    id
                )));
            }

            self.entries.lock().unwrap().insert(id, entry.clone());
            Ok(entry)
        }

        async fn update(&self, entry: FaqEntry) -> Result<FaqEntry, DomainError> {
            let id = entry.id().to_string();

            if !self.entries.lock().unwrap().contains_key(&id) {
                return Err(DomainError::not_found(format!("FAQ '{}' not found", id)));
            }

            self.entries.lock().unwrap().insert(id, entry.clone());
            Ok(entry)
        }

        async fn delete(&self, id: &FaqId) -> Result<bool, DomainError> {
            Ok(self.entries.lock().unwrap().remove(id.as_str()).is_some())
        }

        async fn exists(&self, id: &FaqId) -> Result<bool, DomainError> {
            Ok(self.entries.lock().unwrap().contains_key(id.as_str()))
        }
    }
}
