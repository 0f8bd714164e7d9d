use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::warn;

use greensteps_domain::habit::DailyRecord;
use greensteps_domain::record_store::RecordStore;
use greensteps_domain::shared::DomainError;

/// Durable record store backed by a single SQLite table.
///
/// Records are kept as JSON payloads keyed by their day key, one row
/// per calendar day. Writes upsert the row for the day.
pub struct SqliteRecordStore {
    pool: Arc<SqlitePool>,
}

impl SqliteRecordStore {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub async fn try_get(&self, key: &str) -> Result<Option<DailyRecord>, DomainError> {
        let payload: Option<String> =
            sqlx::query_scalar("SELECT payload FROM habit_records WHERE record_key = ?1")
                .bind(key)
                .fetch_optional(self.pool.as_ref())
                .await
                .map_err(|e| DomainError::Storage(format!("Load record {}: {}", key, e)))?;

        payload
            .map(|json| {
                serde_json::from_str(&json).map_err(|e| {
                    DomainError::Serialization(format!("Decode record {}: {}", key, e))
                })
            })
            .transpose()
    }

    pub async fn try_set(&self, key: &str, record: &DailyRecord) -> Result<(), DomainError> {
        let payload = serde_json::to_string(record)
            .map_err(|e| DomainError::Serialization(format!("Encode record {}: {}", key, e)))?;

        sqlx::query(
            r#"
            INSERT INTO habit_records (record_key, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(record_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(&payload)
        .bind(Utc::now().to_rfc3339())
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| DomainError::Storage(format!("Save record {}: {}", key, e)))?;

        Ok(())
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn get(&self, key: &str) -> DailyRecord {
        match self.try_get(key).await {
            Ok(Some(record)) => record,
            Ok(None) => DailyRecord::new(),
            Err(e) => {
                warn!("[store] read failed key={} err={}", key, e);
                DailyRecord::new()
            }
        }
    }

    async fn set(&self, key: &str, record: &DailyRecord) -> bool {
        match self.try_set(key, record).await {
            Ok(()) => true,
            Err(e) => {
                warn!("[store] write failed key={} err={}", key, e);
                false
            }
        }
    }
}
