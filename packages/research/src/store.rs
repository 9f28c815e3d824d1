//! SQLite-backed report persistence.

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;

use crate::error::StorageError;
use crate::types::{Report, Source};

/// SQLite report store.
///
/// Reports are immutable: the store exposes create and read only. Ids are
/// assigned by SQLite and monotonically increasing.
pub struct ReportStore {
    pool: SqlitePool,
}

impl ReportStore {
    /// Connect to the database and run the idempotent schema migration.
    ///
    /// # Example URLs
    /// - `sqlite:reports.db?mode=rwc` - file-based, created if missing
    /// - `sqlite::memory:` - ephemeral
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    ///
    /// SQLite in-memory databases are per-connection, so the pool must not
    /// grow past a single connection.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    async fn run_migrations(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reports (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                query TEXT NOT NULL,
                sources TEXT NOT NULL,
                summary TEXT NOT NULL,
                key_points TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Persist a new report and return it with its assigned id.
    pub async fn save(
        &self,
        query: &str,
        sources: &[Source],
        summary: &str,
        key_points: &[String],
    ) -> Result<Report, StorageError> {
        let row = sqlx::query_as::<_, ReportRow>(
            "INSERT INTO reports (query, sources, summary, key_points, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING *",
        )
        .bind(query)
        .bind(serde_json::to_string(sources)?)
        .bind(summary)
        .bind(serde_json::to_string(key_points)?)
        .bind(Utc::now().to_rfc3339())
        .fetch_one(&self.pool)
        .await?;

        row.into_report()
    }

    /// Fetch one report by id.
    pub async fn get(&self, id: i64) -> Result<Option<Report>, StorageError> {
        let row = sqlx::query_as::<_, ReportRow>("SELECT * FROM reports WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(ReportRow::into_report).transpose()
    }

    /// All reports, newest first.
    pub async fn list(&self) -> Result<Vec<Report>, StorageError> {
        let rows = sqlx::query_as::<_, ReportRow>(
            "SELECT * FROM reports ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ReportRow::into_report).collect()
    }
}

#[derive(Debug, FromRow)]
struct ReportRow {
    id: i64,
    query: String,
    sources: String,
    summary: String,
    key_points: String,
    created_at: String,
}

impl ReportRow {
    fn into_report(self) -> Result<Report, StorageError> {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)?.with_timezone(&Utc);

        Ok(Report {
            id: self.id,
            query: self.query,
            sources: serde_json::from_str(&self.sources)?,
            summary: self.summary,
            key_points: serde_json::from_str(&self.key_points)?,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sources() -> Vec<Source> {
        vec![
            Source::new("One", "https://one.example", "s1").with_content("body one"),
            Source::new("Two", "https://two.example", "s2")
                .with_content("Content extraction failed"),
        ]
    }

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let store = ReportStore::in_memory().await.unwrap();

        let first = store.save("q1", &sample_sources(), "sum", &[]).await.unwrap();
        let second = store.save("q2", &sample_sources(), "sum", &[]).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_get_round_trips_json_columns() {
        let store = ReportStore::in_memory().await.unwrap();
        let key_points = vec!["A".to_string(), "B".to_string()];

        let saved = store
            .save("the query", &sample_sources(), "the summary", &key_points)
            .await
            .unwrap();
        let loaded = store.get(saved.id).await.unwrap().unwrap();

        assert_eq!(loaded, saved);
        assert_eq!(loaded.sources, sample_sources());
        assert_eq!(loaded.key_points, key_points);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = ReportStore::in_memory().await.unwrap();
        assert!(store.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = ReportStore::in_memory().await.unwrap();

        store.save("older", &sample_sources(), "s", &[]).await.unwrap();
        store.save("newer", &sample_sources(), "s", &[]).await.unwrap();

        let reports = store.list().await.unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].query, "newer");
        assert_eq!(reports[1].query, "older");
    }
}
