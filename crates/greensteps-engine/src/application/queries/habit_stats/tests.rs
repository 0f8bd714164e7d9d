use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};

use super::HabitStatsQueries;
use crate::application::queries::test_support::{
    full_record, record_of, seed_full_days, FakeRecordStore,
};
use greensteps_domain::catalog::reference_habits;
use greensteps_domain::habit::{DailyRecord, HabitCatalog};
use greensteps_domain::record_store::record_key;

fn setup() -> (Arc<FakeRecordStore>, Arc<HabitCatalog>, HabitStatsQueries) {
    let store = Arc::new(FakeRecordStore::new());
    let catalog = Arc::new(reference_habits().clone());
    let queries = HabitStatsQueries::new(store.clone(), catalog.clone());
    (store, catalog, queries)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[tokio::test]
async fn streak_counts_consecutive_fully_completed_days() {
    let (store, catalog, queries) = setup();
    seed_full_days(&store, &catalog, 5).await;

    assert_eq!(queries.get_current_streak().await, 5);
}

#[tokio::test]
async fn streak_is_zero_when_today_has_no_data() {
    let (store, catalog, queries) = setup();
    let today = Local::now().date_naive();
    for offset in 1..=3 {
        let day = today - Duration::days(offset);
        store.put(&record_key(day), full_record(&catalog)).await;
    }

    assert_eq!(queries.get_current_streak().await, 0);
}

#[tokio::test]
async fn partial_today_breaks_the_streak_immediately() {
    let (store, catalog, queries) = setup();
    let today = Local::now().date_naive();
    store.put(&record_key(today), record_of(&[1, 2, 3])).await;
    store
        .put(&record_key(today - Duration::days(1)), full_record(&catalog))
        .await;

    assert_eq!(queries.get_current_streak().await, 0);
}

#[tokio::test]
async fn missing_middle_day_ends_the_walk() {
    let (store, catalog, queries) = setup();
    let today = Local::now().date_naive();
    store.put(&record_key(today), full_record(&catalog)).await;
    store
        .put(&record_key(today - Duration::days(2)), full_record(&catalog))
        .await;

    assert_eq!(queries.get_current_streak().await, 1);
}

#[tokio::test]
async fn unchecked_entries_do_not_complete_a_day() {
    let (store, catalog, queries) = setup();
    let today = Local::now().date_naive();
    let mut record = full_record(&catalog);
    record.set(6, false);
    store.put(&record_key(today), record).await;

    assert_eq!(queries.get_current_streak().await, 0);
}

#[tokio::test]
async fn completion_rate_reads_a_single_day() {
    let (store, _, queries) = setup();
    let day = date(2025, 3, 5);
    store.put(&record_key(day), record_of(&[1, 2, 3, 4])).await;

    assert_eq!(queries.get_completion_rate(day).await, 50);
    assert_eq!(queries.get_completion_rate(date(2025, 3, 6)).await, 0);
}

#[tokio::test]
async fn weekly_series_runs_monday_through_sunday() {
    let (store, catalog, queries) = setup();
    // 2025-07-14 is a Monday; the reference sits midweek
    let monday = date(2025, 7, 14);
    let wednesday = date(2025, 7, 16);
    store.put(&record_key(monday), full_record(&catalog)).await;
    store
        .put(&record_key(wednesday), record_of(&[1, 2, 3, 4]))
        .await;

    let series = queries.get_weekly_series(Some(wednesday)).await;

    assert_eq!(series.len(), 7);
    assert_eq!(series[0].date, "2025-07-14");
    assert_eq!(series[0].day_label, "Mon");
    assert_eq!(series[0].completion, 100);
    assert_eq!(series[2].completion, 50);
    assert_eq!(series[6].day_label, "Sun");
    assert_eq!(series[6].completion, 0);

    let labels: Vec<&str> = series.iter().map(|day| day.day_label.as_str()).collect();
    assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
}

#[tokio::test]
async fn reference_day_inside_the_week_does_not_shift_it() {
    let (store, catalog, queries) = setup();
    let monday = date(2025, 7, 14);
    store.put(&record_key(monday), full_record(&catalog)).await;

    let from_monday = queries.get_weekly_series(Some(monday)).await;
    let from_sunday = queries.get_weekly_series(Some(date(2025, 7, 20))).await;

    assert_eq!(from_monday[0].date, from_sunday[0].date);
    assert_eq!(from_monday[6].date, from_sunday[6].date);
}

#[tokio::test]
async fn weekly_average_rounds_the_mean() {
    let (store, catalog, queries) = setup();
    let monday = date(2025, 7, 14);
    store.put(&record_key(monday), full_record(&catalog)).await;

    // One full day out of seven: 100 / 7 rounds to 14
    assert_eq!(queries.get_weekly_average(Some(monday)).await, 14);
}

#[tokio::test]
async fn monthly_series_covers_every_calendar_day() {
    let (store, _, queries) = setup();
    store
        .put(&record_key(date(2025, 2, 3)), record_of(&[1, 2, 3, 4]))
        .await;

    let series = queries.get_monthly_series(Some(date(2025, 2, 10))).await;

    assert_eq!(series.len(), 28);
    assert_eq!(series[0].date, "2025-02-01");
    assert_eq!(series[0].day_of_month, 1);
    assert_eq!(series[2].completion, 50);
    assert_eq!(series[27].day_of_month, 28);
}

#[tokio::test]
async fn monthly_series_handles_a_31_day_month() {
    let (_, _, queries) = setup();
    let series = queries.get_monthly_series(Some(date(2025, 7, 16))).await;

    assert_eq!(series.len(), 31);
    assert_eq!(series[30].date, "2025-07-31");
}

#[tokio::test]
async fn total_completed_sums_the_trailing_window() {
    let (store, _, queries) = setup();
    let today = Local::now().date_naive();
    store.put(&record_key(today), record_of(&[1, 2, 3])).await;
    store
        .put(&record_key(today - Duration::days(1)), record_of(&[1, 2]))
        .await;
    store
        .put(&record_key(today - Duration::days(31)), record_of(&[1, 2, 3, 4, 5]))
        .await;

    assert_eq!(queries.get_total_completed(None).await, 5);
    assert_eq!(queries.get_total_completed(Some(1)).await, 3);
}

#[tokio::test]
async fn today_record_bundles_the_completion_figures() {
    let (store, catalog, queries) = setup();
    let today = Local::now().date_naive();
    store.put(&record_key(today), full_record(&catalog)).await;

    let dto = queries.get_today_record().await;

    assert_eq!(dto.date, today.format("%Y-%m-%d").to_string());
    assert_eq!(dto.completed_count, 8);
    assert_eq!(dto.completion_rate, 100);
    assert!(dto.full_completion);
}

#[tokio::test]
async fn today_record_defaults_to_empty_without_data() {
    let (_, _, queries) = setup();
    let dto = queries.get_today_record().await;

    assert_eq!(dto.record, DailyRecord::new());
    assert_eq!(dto.completed_count, 0);
    assert_eq!(dto.completion_rate, 0);
    assert!(!dto.full_completion);
}

#[tokio::test]
async fn stats_overview_composes_the_numbers() {
    let (store, catalog, queries) = setup();
    seed_full_days(&store, &catalog, 2).await;

    let overview = queries.get_stats_overview().await;

    assert_eq!(overview.current_streak, 2);
    assert_eq!(overview.completed_today, 8);
    assert_eq!(overview.completion_rate, 100);
    assert_eq!(overview.total_completed, 16);
    assert_eq!(overview.weekly_series.len(), 7);
    assert!(overview.monthly_series.len() >= 28);
}
