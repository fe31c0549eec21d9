//! PostgreSQL implementation of the FAQ repository

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use sqlx::Row;

use crate::domain::faq::{FaqEntry, FaqId, FaqRepository, FaqTranslation};
use crate::domain::DomainError;

/// PostgreSQL-backed FAQ repository
///
/// Entries live in the `faqs` table; translations live in `faq_translations`
/// keyed by `(faq_id, language)` and are removed with their entry.
#[derive(Debug, Clone)]
pub struct PostgresFaqRepository {
    pool: PgPool,
}

impl PostgresFaqRepository {
    /// Creates a repository over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ensures the repository tables exist
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS faqs (
                id VARCHAR(36) PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create faqs table: {}", e)))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS faq_translations (
                faq_id VARCHAR(36) NOT NULL REFERENCES faqs(id) ON DELETE CASCADE,
                language VARCHAR(16) NOT NULL,
                question TEXT,
                answer TEXT,
                PRIMARY KEY (faq_id, language)
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::storage(format!("Failed to create faq_translations table: {}", e))
        })?;

        Ok(())
    }

    fn entry_from_row(
        row: &sqlx::postgres::PgRow,
        translations: BTreeMap<String, FaqTranslation>,
    ) -> Result<FaqEntry, DomainError> {
        let id: String = row.get("id");
        let question: String = row.get("question");
        let answer: String = row.get("answer");
        let created_at: DateTime<Utc> = row.get("created_at");
        let updated_at: DateTime<Utc> = row.get("updated_at");

        let id = FaqId::new(id)
            .map_err(|e| DomainError::storage(format!("Corrupt FAQ id in storage: {}", e)))?;

        Ok(FaqEntry::restore(
            id,
            question,
            answer,
            translations,
            created_at,
            updated_at,
        ))
    }

    fn translation_from_row(row: &sqlx::postgres::PgRow) -> (String, FaqTranslation) {
        let language: String = row.get("language");
        let question: Option<String> = row.get("question");
        let answer: Option<String> = row.get("answer");

        let mut translation = FaqTranslation::new();

        if let Some(question) = question {
            translation = translation.with_question(question);
        }

        if let Some(answer) = answer {
            translation = translation.with_answer(answer);
        }

        (language, translation)
    }

    async fn translations_for(
        &self,
        id: &FaqId,
    ) -> Result<BTreeMap<String, FaqTranslation>, DomainError> {
        let rows = sqlx::query(
            "SELECT language, question, answer FROM faq_translations WHERE faq_id = $1",
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to load translations: {}", e)))?;

        Ok(rows.iter().map(Self::translation_from_row).collect())
    }

    async fn insert_translations(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        entry: &FaqEntry,
    ) -> Result<(), DomainError> {
        for (language, translation) in entry.translations() {
            sqlx::query(
                "INSERT INTO faq_translations (faq_id, language, question, answer) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(entry.id().as_str())
            .bind(language)
            .bind(translation.question())
            .bind(translation.answer())
            .execute(&mut **tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to insert translation: {}", e)))?;
        }

        Ok(())
    }
}

#[async_trait]
impl FaqRepository for PostgresFaqRepository {
    async fn get(&self, id: &FaqId) -> Result<Option<FaqEntry>, DomainError> {
        let row = sqlx::query(
            "SELECT id, question, answer, created_at, updated_at FROM faqs WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get FAQ: {}", e)))?;

        match row {
            Some(row) => {
                let translations = self.translations_for(id).await?;
                Ok(Some(Self::entry_from_row(&row, translations)?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<FaqEntry>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, question, answer, created_at, updated_at FROM faqs \
             ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list FAQs: {}", e)))?;

        let translation_rows = sqlx::query(
            "SELECT faq_id, language, question, answer FROM faq_translations",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to load translations: {}", e)))?;

        let mut grouped: HashMap<String, BTreeMap<String, FaqTranslation>> = HashMap::new();

        for row in &translation_rows {
            let faq_id: String = row.get("faq_id");
            let (language, translation) = Self::translation_from_row(row);
            grouped.entry(faq_id).or_default().insert(language, translation);
        }

        rows.iter()
            .map(|row| {
                let id: String = row.get("id");
                let translations = grouped.remove(&id).unwrap_or_default();
                Self::entry_from_row(row, translations)
            })
            .collect()
    }

    async fn create(&self, entry: FaqEntry) -> Result<FaqEntry, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let inserted = sqlx::query(
            "INSERT INTO faqs (id, question, answer, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5) ON CONFLICT (id) DO NOTHING",
        )
        .bind(entry.id().as_str())
        .bind(entry.question())
        .bind(entry.answer())
        .bind(entry.created_at())
        .bind(entry.updated_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert FAQ: {}", e)))?;

        if inserted.rows_affected() == 0 {
            return Err(DomainError::conflict(format!(
                "FAQ with ID '{}' already exists",
                entry.id()
            )));
        }

        Self::insert_translations(&mut tx, &entry).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit transaction: {}", e)))?;

        Ok(entry)
    }

    async fn update(&self, entry: FaqEntry) -> Result<FaqEntry, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let updated = sqlx::query(
            "UPDATE faqs SET question = $2, answer = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(entry.id().as_str())
        .bind(entry.question())
        .bind(entry.answer())
        .bind(entry.updated_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update FAQ: {}", e)))?;

        if updated.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "FAQ '{}' not found",
                entry.id()
            )));
        }

        sqlx::query("DELETE FROM faq_translations WHERE faq_id = $1")
            .bind(entry.id().as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to clear translations: {}", e)))?;

        Self::insert_translations(&mut tx, &entry).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit transaction: {}", e)))?;

        Ok(entry)
    }

    async fn delete(&self, id: &FaqId) -> Result<bool, DomainError> {
        let deleted = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete FAQ: {}", e)))?;

        Ok(deleted.rows_affected() > 0)
    }

    async fn exists(&self, id: &FaqId) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM faqs WHERE id = $1) AS found")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check FAQ existence: {}", e)))?;

        Ok(row.get("found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::LanguageCode;

    // Note: These tests require a running PostgreSQL instance; set DATABASE_URL

    async fn get_test_repository() -> PostgresFaqRepository {
        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/faq_service_test".to_string());
        let pool = PgPool::connect(&url).await.unwrap();
        let repo = PostgresFaqRepository::new(pool);
        repo.ensure_schema().await.unwrap();
        repo
    }

    #[tokio::test]
    #[ignore = "Requires running PostgreSQL instance"]
    async fn test_postgres_round_trip() {
        let repo = get_test_repository().await;

        let spanish = LanguageCode::new("es");
        let entry = FaqEntry::new(FaqId::generate(), "What is this?", "A service.")
            .with_translation(
                &spanish,
                FaqTranslation::new().with_question("¿Qué es esto?"),
            );
        let id = entry.id().clone();

        repo.create(entry).await.unwrap();

        let fetched = repo.get(&id).await.unwrap().unwrap();
        assert_eq!(fetched.question(), "What is this?");
        assert_eq!(fetched.translated_question(&spanish), "¿Qué es esto?");
        assert_eq!(fetched.translated_answer(&spanish), "A service.");

        // Cleanup
        let deleted = repo.delete(&id).await.unwrap();
        assert!(deleted);
    }

    #[tokio::test]
    #[ignore = "Requires running PostgreSQL instance"]
    async fn test_postgres_update_replaces_translations() {
        let repo = get_test_repository().await;

        let german = LanguageCode::new("de");
        let entry = FaqEntry::new(FaqId::generate(), "Q", "A")
            .with_translation(&german, FaqTranslation::new().with_question("F"));
        let id = entry.id().clone();

        repo.create(entry).await.unwrap();

        let mut updated = repo.get(&id).await.unwrap().unwrap();
        updated.set_translations(BTreeMap::new());
        repo.update(updated).await.unwrap();

        let fetched = repo.get(&id).await.unwrap().unwrap();
        assert!(fetched.translations().is_empty());

        // Cleanup
        repo.delete(&id).await.unwrap();
    }
}
