pub mod habit_stats;
pub mod impact_queries;
pub mod recommendation_queries;
pub mod unlock_queries;
pub mod zone_queries;

pub use habit_stats::HabitStatsQueries;
pub use impact_queries::ImpactQueries;
pub use recommendation_queries::RecommendationQueries;
pub use unlock_queries::UnlockQueries;
pub use zone_queries::ZoneQueries;

#[cfg(test)]
pub(crate) mod test_support;
