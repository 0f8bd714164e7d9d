mod fallback_record_store;
mod memory_record_store;
mod sqlite_record_store;

pub use fallback_record_store::FallbackRecordStore;
pub use memory_record_store::MemoryRecordStore;
pub use sqlite_record_store::SqliteRecordStore;
