use chrono::{Datelike, Duration, Local, NaiveDate};
use futures::future::join_all;
use log::info;

use crate::application::dtos::{MonthDayDto, WeekDayDto};
use greensteps_domain::habit::HabitCatalog;
use greensteps_domain::record_store::RecordStore;

use super::streak::read_record;

/// Seven entries for the Monday-first week containing `reference`
pub(super) async fn weekly_series(
    store: &dyn RecordStore,
    catalog: &HabitCatalog,
    reference: Option<NaiveDate>,
) -> Vec<WeekDayDto> {
    let reference = reference.unwrap_or_else(|| Local::now().date_naive());
    let monday = reference - Duration::days(reference.weekday().num_days_from_monday() as i64);

    let dates: Vec<NaiveDate> = (0..7).map(|offset| monday + Duration::days(offset)).collect();
    let records = join_all(dates.iter().map(|date| read_record(store, *date))).await;

    let series: Vec<WeekDayDto> = dates
        .iter()
        .zip(records)
        .map(|(date, record)| WeekDayDto {
            date: date.format("%Y-%m-%d").to_string(),
            completion: record.completion_rate(catalog),
            day_label: date.format("%a").to_string(),
        })
        .collect();

    info!("[stats] weekly_series week_start={}", monday);
    series
}

pub(super) async fn weekly_average(
    store: &dyn RecordStore,
    catalog: &HabitCatalog,
    reference: Option<NaiveDate>,
) -> u8 {
    let series = weekly_series(store, catalog, reference).await;
    average_completion(&series)
}

/// Rounded mean of the series completions, 0 for an empty series
pub(super) fn average_completion(series: &[WeekDayDto]) -> u8 {
    if series.is_empty() {
        return 0;
    }
    let sum: u32 = series.iter().map(|day| day.completion as u32).sum();
    (sum as f64 / series.len() as f64).round() as u8
}

/// One entry per calendar day of the month containing `reference`
pub(super) async fn monthly_series(
    store: &dyn RecordStore,
    catalog: &HabitCatalog,
    reference: Option<NaiveDate>,
) -> Vec<MonthDayDto> {
    let reference = reference.unwrap_or_else(|| Local::now().date_naive());
    let (year, month) = (reference.year(), reference.month());

    let dates: Vec<NaiveDate> = (1..=days_in_month(year, month))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect();
    let records = join_all(dates.iter().map(|date| read_record(store, *date))).await;

    let series: Vec<MonthDayDto> = dates
        .iter()
        .zip(records)
        .map(|(date, record)| MonthDayDto {
            date: date.format("%Y-%m-%d").to_string(),
            completion: record.completion_rate(catalog),
            day_of_month: date.day(),
        })
        .collect();

    info!("[stats] monthly_series month={}-{:02} days={}", year, month, series.len());
    series
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}
