use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use greensteps_domain::habit::{DailyRecord, HabitCatalog, HabitId};
use greensteps_domain::record_store::{record_key, RecordStore};

/// In-memory record store for query tests
pub(crate) struct FakeRecordStore {
    records: RwLock<HashMap<String, DailyRecord>>,
}

impl FakeRecordStore {
    pub(crate) fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) async fn put(&self, key: &str, record: DailyRecord) {
        self.records.write().await.insert(key.to_string(), record);
    }
}

#[async_trait]
impl RecordStore for FakeRecordStore {
    async fn get(&self, key: &str) -> DailyRecord {
        self.records
            .read()
            .await
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    async fn set(&self, key: &str, record: &DailyRecord) -> bool {
        self.records
            .write()
            .await
            .insert(key.to_string(), record.clone());
        true
    }
}

/// Record with every catalog habit checked off
pub(crate) fn full_record(catalog: &HabitCatalog) -> DailyRecord {
    DailyRecord::from_entries(catalog.iter().map(|habit| (habit.id, true)))
}

/// Record with exactly the given habits checked off
pub(crate) fn record_of(ids: &[HabitId]) -> DailyRecord {
    DailyRecord::from_entries(ids.iter().map(|id| (*id, true)))
}

/// Seed `days` consecutive fully completed days ending today
pub(crate) async fn seed_full_days(store: &FakeRecordStore, catalog: &HabitCatalog, days: u32) {
    let today = chrono::Local::now().date_naive();
    for offset in 0..days {
        let date = today - chrono::Duration::days(offset as i64);
        store.put(&record_key(date), full_record(catalog)).await;
    }
}
