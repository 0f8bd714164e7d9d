use std::sync::Arc;

use chrono::{Local, NaiveDate};
use log::{info, warn};

use crate::application::dtos::{
    CategoryImpactDto, HabitImpactDto, ImpactSummaryDto, LocationImpactDto,
};
use greensteps_domain::habit::{DailyRecord, HabitCatalog};
use greensteps_domain::impact::ImpactCalculator;
use greensteps_domain::location::{LocationCatalog, LocationId};
use greensteps_domain::record_store::{record_key, RecordStore};

/// CO2 impact facade over daily records and the location catalog
pub struct ImpactQueries {
    store: Arc<dyn RecordStore>,
    habits: Arc<HabitCatalog>,
    locations: Arc<LocationCatalog>,
}

impl ImpactQueries {
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

    /// Impact summary for a day (default today), optionally credited with
    /// a visited location's absorption bonus. An unknown location id is
    /// logged and treated as no visit.
    pub async fn get_daily_impact(
        &self,
        date: Option<NaiveDate>,
        location_id: Option<LocationId>,
    ) -> ImpactSummaryDto {
        let record = self.read_record(date).await;

        let location = location_id.and_then(|id| {
            let found = self.locations.get(id);
            if found.is_none() {
                warn!("[impact] unknown location id={}, bonus skipped", id);
            }
            found
        });

        let summary = ImpactCalculator::summarize(&record, &self.habits, location);
        info!(
            "[impact] daily completed={} total={}kg",
            summary.completed_count, summary.total_impact
        );
        ImpactSummaryDto::from(summary)
    }

    /// Summary for a visit to a known location, enriched with the
    /// location's own indicators and benefit line
    pub async fn get_location_impact(
        &self,
        location_id: LocationId,
        date: Option<NaiveDate>,
    ) -> Option<LocationImpactDto> {
        let Some(location) = self.locations.get(location_id) else {
            warn!("[impact] location impact for unknown id={}", location_id);
            return None;
        };

        let record = self.read_record(date).await;
        let summary = ImpactCalculator::summarize(&record, &self.habits, Some(location));
        info!(
            "[impact] location visit id={} bonus={}kg",
            location_id, summary.location_bonus
        );

        Some(LocationImpactDto {
            summary: ImpactSummaryDto::from(summary),
            location_score: location.indicators,
            benefit_message: ImpactCalculator::location_benefit(location).to_string(),
            location_name: location.name.clone(),
        })
    }

    /// Per-category CO2 rollup for a day (default today), all categories
    /// present even at zero
    pub async fn get_category_breakdown(&self, date: Option<NaiveDate>) -> Vec<CategoryImpactDto> {
        let record = self.read_record(date).await;
        ImpactCalculator::category_breakdown(&record)
            .into_iter()
            .map(CategoryImpactDto::from)
            .collect()
    }

    /// Every catalog habit joined with its CO2 credit
    pub fn get_habit_impacts(&self) -> Vec<HabitImpactDto> {
        ImpactCalculator::habit_impacts(&self.habits)
            .into_iter()
            .map(HabitImpactDto::from)
            .collect()
    }

    async fn read_record(&self, date: Option<NaiveDate>) -> DailyRecord {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        self.store.get(&record_key(date)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::queries::test_support::{record_of, FakeRecordStore};
    use greensteps_domain::catalog::{reference_habits, reference_locations};
    use greensteps_domain::impact::HabitCategory;

    fn setup() -> (Arc<FakeRecordStore>, ImpactQueries) {
        let store = Arc::new(FakeRecordStore::new());
        let queries = ImpactQueries::new(
            store.clone(),
            Arc::new(reference_habits().clone()),
            Arc::new(reference_locations().clone()),
        );
        (store, queries)
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[tokio::test]
    async fn daily_impact_reads_the_requested_day() {
        let (store, queries) = setup();
        let day = date(2025, 7, 14);
        store.put(&record_key(day), record_of(&[1, 7])).await;

        let summary = queries.get_daily_impact(Some(day), None).await;

        assert_eq!(summary.completed_count, 2);
        assert_eq!(summary.total_co2, 1.65);
        assert_eq!(summary.location_bonus, 0.0);
        assert!(summary.location_message.is_none());
    }

    #[tokio::test]
    async fn daily_impact_defaults_to_today() {
        let (store, queries) = setup();
        let today = Local::now().date_naive();
        store.put(&record_key(today), record_of(&[2])).await;

        let summary = queries.get_daily_impact(None, None).await;

        assert_eq!(summary.total_co2, 0.8);
    }

    #[tokio::test]
    async fn known_location_adds_its_bonus() {
        let (store, queries) = setup();
        let day = date(2025, 7, 14);
        store.put(&record_key(day), record_of(&[1, 7])).await;

        let summary = queries.get_daily_impact(Some(day), Some(1)).await;

        assert_eq!(summary.location_bonus, 0.002);
        assert_eq!(
            summary.location_message.as_deref(),
            Some("An extra 2.4g saved at this spot!")
        );
    }

    #[tokio::test]
    async fn unknown_location_id_skips_the_bonus() {
        let (store, queries) = setup();
        let day = date(2025, 7, 14);
        store.put(&record_key(day), record_of(&[1])).await;

        let summary = queries.get_daily_impact(Some(day), Some(999)).await;

        assert_eq!(summary.location_bonus, 0.0);
        assert!(summary.location_message.is_none());
    }

    #[tokio::test]
    async fn location_impact_enriches_with_indicators() {
        let (store, queries) = setup();
        let day = date(2025, 7, 14);
        store.put(&record_key(day), record_of(&[1, 7])).await;

        let dto = queries.get_location_impact(1, Some(day)).await.unwrap();

        assert_eq!(dto.location_name, "Gwanggyo Lake Park");
        assert_eq!(dto.location_score.carbon_absorption, 2.4);
        assert_eq!(dto.benefit_message, "Rest in the cool shade and save energy!");
        assert_eq!(dto.summary.location_bonus, 0.002);
    }

    #[tokio::test]
    async fn location_impact_is_none_for_unknown_ids() {
        let (_, queries) = setup();
        assert!(queries.get_location_impact(999, None).await.is_none());
    }

    #[tokio::test]
    async fn category_breakdown_keeps_the_fixed_order() {
        let (store, queries) = setup();
        let day = date(2025, 7, 14);
        store.put(&record_key(day), record_of(&[1, 2, 5, 7])).await;

        let breakdown = queries.get_category_breakdown(Some(day)).await;

        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown[0].category, HabitCategory::Waste);
        assert_eq!(breakdown[0].co2, 0.15);
        assert_eq!(breakdown[1].co2, 0.8);
        assert_eq!(breakdown[2].co2, 0.2);
        assert_eq!(breakdown[3].co2, 1.5);
        assert_eq!(breakdown[3].label, "Food habits");
    }

    #[test]
    fn habit_impacts_join_the_whole_catalog() {
        let (_, queries) = setup();
        let impacts = queries.get_habit_impacts();

        assert_eq!(impacts.len(), 8);
        assert_eq!(impacts[0].habit.id, 1);
        assert_eq!(impacts[0].co2, 0.15);
        assert_eq!(impacts[6].category, Some(HabitCategory::Food));
    }
}
