use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use greensteps_domain::habit::DailyRecord;
use greensteps_domain::record_store::RecordStore;

use super::{MemoryRecordStore, SqliteRecordStore};

/// Durable store with a session-scoped memory net underneath.
///
/// Reads prefer the durable backend and fall through to the session
/// store, so a write the backend rejected earlier stays readable.
/// Writes go durable first; a rejected write lands in the session
/// store and the call reports false.
pub struct FallbackRecordStore {
    durable: SqliteRecordStore,
    session: Arc<MemoryRecordStore>,
}

impl FallbackRecordStore {
    pub fn new(durable: SqliteRecordStore, session: Arc<MemoryRecordStore>) -> Self {
        Self { durable, session }
    }
}

#[async_trait]
impl RecordStore for FallbackRecordStore {
    async fn get(&self, key: &str) -> DailyRecord {
        match self.durable.try_get(key).await {
            Ok(Some(record)) => record,
            Ok(None) => self.session.get(key).await,
            Err(e) => {
                warn!(
                    "[store] durable read failed key={} err={}, serving session data",
                    key, e
                );
                self.session.get(key).await
            }
        }
    }

    async fn set(&self, key: &str, record: &DailyRecord) -> bool {
        match self.durable.try_set(key, record).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    "[store] durable write failed key={} err={}, keeping record in session store",
                    key, e
                );
                self.session.set(key, record).await;
                false
            }
        }
    }
}
