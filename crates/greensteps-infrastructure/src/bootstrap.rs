use std::sync::Arc;

use tracing::info;

use greensteps_domain::catalog;
use greensteps_domain::habit::HabitCatalog;
use greensteps_domain::location::{LocationCatalog, ZoneCatalog};
use greensteps_domain::record_store::RecordStore;
use greensteps_domain::shared::DomainError;

use crate::config::StorageConfig;
use crate::logging::init_logging;
use crate::persistence::stores::{FallbackRecordStore, MemoryRecordStore, SqliteRecordStore};
use crate::persistence::Database;

/// Everything the presentation shell needs to run the engine
pub struct AppContext {
    pub database: Database,
    pub store: Arc<dyn RecordStore>,
    pub habits: Arc<HabitCatalog>,
    pub locations: Arc<LocationCatalog>,
    pub zones: Arc<ZoneCatalog>,
}

/// Stand up logging, the database and the record store, and hand back
/// the wired context.
pub async fn build_app_context(config: &StorageConfig) -> Result<AppContext, DomainError> {
    init_logging(config.log_dir())
        .map_err(|e| DomainError::Infrastructure(format!("Logger init failed: {}", e)))?;

    let db_path = config.db_path();
    let db_path_str = db_path.to_str().ok_or_else(|| {
        DomainError::Infrastructure("Database path is not valid UTF-8".to_string())
    })?;

    info!("Database path: {}", db_path_str);

    let database = Database::new(db_path_str).await?;
    database.run_migrations().await?;

    let pool = Arc::new(database.pool().clone());
    let sqlite = SqliteRecordStore::new(pool);
    let store: Arc<dyn RecordStore> = Arc::new(FallbackRecordStore::new(
        sqlite,
        MemoryRecordStore::process_shared(),
    ));

    let habits = Arc::new(catalog::reference_habits().clone());
    let locations = Arc::new(catalog::reference_locations().clone());
    let zones = Arc::new(catalog::reference_zones().clone());

    info!("Storage ready, record store online");

    Ok(AppContext {
        database,
        store,
        habits,
        locations,
        zones,
    })
}
