// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod benefit;
pub mod catalog;
pub mod habit;
pub mod impact;
pub mod location;
pub mod recommendation;
pub mod record_store;
pub mod scoring;
pub mod shared;
pub mod tier;

// Re-exports for convenience
pub use habit::{DailyRecord, Habit, HabitCatalog, HabitId};
pub use location::{GreenLocation, LocationCatalog, LocationId, LocationType};
pub use record_store::{record_key, RecordStore};
pub use scoring::GreenScore;
pub use shared::DomainError;
pub use tier::StreakTier;
