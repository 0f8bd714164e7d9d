use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::dtos::{HabitStatsDto, MonthDayDto, TodayRecordDto, WeekDayDto};
use greensteps_domain::habit::HabitCatalog;
use greensteps_domain::record_store::RecordStore;

mod series;
mod streak;

#[cfg(test)]
mod tests;

pub struct HabitStatsQueries {
    store: Arc<dyn RecordStore>,
    catalog: Arc<HabitCatalog>,
}

impl HabitStatsQueries {
    pub fn new(store: Arc<dyn RecordStore>, catalog: Arc<HabitCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Consecutive fully completed days ending today
    pub async fn get_current_streak(&self) -> u32 {
        streak::current_streak(self.store.as_ref(), &self.catalog).await
    }

    /// Share of catalog habits completed on a day, 0-100
    pub async fn get_completion_rate(&self, date: NaiveDate) -> u8 {
        streak::completion_rate(self.store.as_ref(), &self.catalog, date).await
    }

    /// The week containing `reference` (default today), Monday first
    pub async fn get_weekly_series(&self, reference: Option<NaiveDate>) -> Vec<WeekDayDto> {
        series::weekly_series(self.store.as_ref(), &self.catalog, reference).await
    }

    /// Rounded mean completion over the same week
    pub async fn get_weekly_average(&self, reference: Option<NaiveDate>) -> u8 {
        series::weekly_average(self.store.as_ref(), &self.catalog, reference).await
    }

    /// One entry per day of the month containing `reference` (default today)
    pub async fn get_monthly_series(&self, reference: Option<NaiveDate>) -> Vec<MonthDayDto> {
        series::monthly_series(self.store.as_ref(), &self.catalog, reference).await
    }

    /// Habits checked off over the trailing window (default 30 days)
    pub async fn get_total_completed(&self, lookback_days: Option<u32>) -> u32 {
        streak::total_completed(self.store.as_ref(), lookback_days).await
    }

    /// Today's record with its completion figures
    pub async fn get_today_record(&self) -> TodayRecordDto {
        streak::today_record(self.store.as_ref(), &self.catalog).await
    }

    /// Everything the stats surface shows, in one call
    pub async fn get_stats_overview(&self) -> HabitStatsDto {
        streak::stats_overview(self.store.as_ref(), &self.catalog).await
    }
}
