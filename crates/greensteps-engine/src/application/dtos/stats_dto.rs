use serde::{Deserialize, Serialize};

use greensteps_domain::habit::DailyRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDayDto {
    pub date: String, // YYYY-MM-DD
    pub completion: u8,
    pub day_label: String, // Mon..Sun
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthDayDto {
    pub date: String, // YYYY-MM-DD
    pub completion: u8,
    pub day_of_month: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayRecordDto {
    pub date: String, // YYYY-MM-DD
    pub record: DailyRecord,
    pub completed_count: u32,
    pub completion_rate: u8,
    pub full_completion: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStatsDto {
    pub current_streak: u32,
    pub completed_today: u32,
    pub completion_rate: u8,
    pub weekly_average: u8,
    pub total_completed: u32,
    pub weekly_series: Vec<WeekDayDto>,
    pub monthly_series: Vec<MonthDayDto>,
}
