use chrono::{Duration, Local, NaiveDate};
use futures::future::join_all;
use log::info;

use crate::application::dtos::{HabitStatsDto, TodayRecordDto};
use greensteps_domain::habit::{DailyRecord, HabitCatalog};
use greensteps_domain::record_store::{record_key, RecordStore};

use super::series;

pub(super) async fn read_record(store: &dyn RecordStore, date: NaiveDate) -> DailyRecord {
    store.get(&record_key(date)).await
}

/// Walk backward day by day from today; every fully completed day extends
/// the streak, the first gap ends it. Today with partial data ends it at 0.
pub(super) async fn current_streak(store: &dyn RecordStore, catalog: &HabitCatalog) -> u32 {
    let today = Local::now().date_naive();
    let mut streak = 0u32;
    let mut cursor = today;

    loop {
        let record = read_record(store, cursor).await;
        if !record.is_full_completion(catalog) {
            break;
        }
        streak += 1;
        cursor -= Duration::days(1);
    }

    info!("[stats] current_streak anchor={} days={}", today, streak);
    streak
}

pub(super) async fn completion_rate(
    store: &dyn RecordStore,
    catalog: &HabitCatalog,
    date: NaiveDate,
) -> u8 {
    let record = read_record(store, date).await;
    record.completion_rate(catalog)
}

/// Sum of checked-off habits over the trailing window ending today
pub(super) async fn total_completed(store: &dyn RecordStore, lookback_days: Option<u32>) -> u32 {
    let days = lookback_days.unwrap_or(30);
    let today = Local::now().date_naive();

    let reads = (0..days).map(|offset| read_record(store, today - Duration::days(offset as i64)));
    let records = join_all(reads).await;
    let total = records
        .iter()
        .map(|record| record.completed_count() as u32)
        .sum();

    info!("[stats] total_completed window={}d total={}", days, total);
    total
}

pub(super) async fn today_record(store: &dyn RecordStore, catalog: &HabitCatalog) -> TodayRecordDto {
    let today = Local::now().date_naive();
    let record = read_record(store, today).await;

    TodayRecordDto {
        date: today.format("%Y-%m-%d").to_string(),
        completed_count: record.completed_count() as u32,
        completion_rate: record.completion_rate(catalog),
        full_completion: record.is_full_completion(catalog),
        record,
    }
}

pub(super) async fn stats_overview(
    store: &dyn RecordStore,
    catalog: &HabitCatalog,
) -> HabitStatsDto {
    let today = Local::now().date_naive();

    let current_streak = current_streak(store, catalog).await;
    let today_record = read_record(store, today).await;
    let weekly_series = series::weekly_series(store, catalog, Some(today)).await;
    let monthly_series = series::monthly_series(store, catalog, Some(today)).await;
    let weekly_average = series::average_completion(&weekly_series);
    let total_completed = total_completed(store, None).await;

    let dto = HabitStatsDto {
        current_streak,
        completed_today: today_record.completed_count() as u32,
        completion_rate: today_record.completion_rate(catalog),
        weekly_average,
        total_completed,
        weekly_series,
        monthly_series,
    };

    info!(
        "[stats] stats_overview streak={} today={} weekly_avg={} total_30d={}",
        dto.current_streak, dto.completed_today, dto.weekly_average, dto.total_completed
    );

    dto
}
