use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use tokio::sync::RwLock;

use greensteps_domain::habit::DailyRecord;
use greensteps_domain::record_store::RecordStore;

static PROCESS_STORE: Lazy<Arc<MemoryRecordStore>> =
    Lazy::new(|| Arc::new(MemoryRecordStore::new()));

/// In-process record store.
///
/// Holds writes the durable backend rejected; lives for the process
/// lifetime, cleared only by a restart.
pub struct MemoryRecordStore {
    records: RwLock<HashMap<String, DailyRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// One shared session store per process
    pub fn process_shared() -> Arc<MemoryRecordStore> {
        PROCESS_STORE.clone()
    }

    pub(crate) async fn get_opt(&self, key: &str) -> Option<DailyRecord> {
        self.records.read().await.get(key).cloned()
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get(&self, key: &str) -> DailyRecord {
        self.get_opt(key).await.unwrap_or_default()
    }

    /// Accepts every write; durability signaling is the concern of the
    /// composing fallback store.
    async fn set(&self, key: &str, record: &DailyRecord) -> bool {
        self.records
            .write()
            .await
            .insert(key.to_string(), record.clone());
        true
    }
}
