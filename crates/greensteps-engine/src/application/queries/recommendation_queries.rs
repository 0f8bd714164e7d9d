use std::sync::Arc;

use chrono::{Local, NaiveDate};
use log::{info, warn};

use crate::application::dtos::{HabitRecommendationDto, RecommendedLocationDto};
use greensteps_domain::habit::{DailyRecord, HabitCatalog, HabitId};
use greensteps_domain::location::{GreenLocation, LocationCatalog, LocationId};
use greensteps_domain::recommendation::{self, LocationRecommender};
use greensteps_domain::record_store::{record_key, RecordStore};

/// Habit-to-location recommendation facade
pub struct RecommendationQueries {
    store: Arc<dyn RecordStore>,
    habits: Arc<HabitCatalog>,
    locations: Arc<LocationCatalog>,
}

impl RecommendationQueries {
    pub fn new(
        store: Arc<dyn RecordStore>,
        habits: Arc<HabitCatalog>,
        locations: Arc<LocationCatalog>,
    ) -> Self {
        Self {
            store,
            habits,
            locations,
        }
    }

    /// Top locations for the habits completed on a day (default today)
    pub async fn get_recommended_locations(
        &self,
        date: Option<NaiveDate>,
    ) -> Vec<RecommendedLocationDto> {
        let record = self.read_record(date).await;
        let recommended =
            LocationRecommender::recommended_locations(&record, &self.habits, &self.locations);
        info!("[reco] locations count={}", recommended.len());
        recommended
            .into_iter()
            .map(RecommendedLocationDto::from)
            .collect()
    }

    /// Habits worth doing at a location; unknown ids yield an empty list
    pub fn get_habits_for_location(&self, location_id: LocationId) -> Vec<HabitRecommendationDto> {
        let Some(location) = self.locations.get(location_id) else {
            warn!("[reco] habits for unknown location id={}", location_id);
            return Vec::new();
        };

        LocationRecommender::habits_for_location(location, &self.habits)
            .into_iter()
            .map(HabitRecommendationDto::from)
            .collect()
    }

    /// Completion-milestone location picks for a day (default today)
    pub async fn get_locations_by_completion(
        &self,
        date: Option<NaiveDate>,
    ) -> Vec<GreenLocation> {
        let record = self.read_record(date).await;
        let picks =
            recommendation::locations_by_completion(&record, &self.habits, &self.locations);
        info!(
            "[reco] completion picks completed={} count={}",
            record.completed_count(),
            picks.len()
        );
        picks
    }

    /// Streak-milestone location picks
    pub fn get_locations_by_streak(&self, streak: u32) -> Vec<GreenLocation> {
        let picks = recommendation::locations_by_streak(streak, &self.locations);
        info!("[reco] streak picks streak={} count={}", streak, picks.len());
        picks
    }

    /// Toast line shown right after a habit is checked off
    pub fn get_completion_message(&self, habit_id: HabitId) -> Option<String> {
        LocationRecommender::completion_message(habit_id).map(str::to_string)
    }

    async fn read_record(&self, date: Option<NaiveDate>) -> DailyRecord {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        self.store.get(&record_key(date)).await
    }
}
