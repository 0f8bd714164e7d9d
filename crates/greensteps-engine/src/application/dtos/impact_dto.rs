use serde::{Deserialize, Serialize};

use greensteps_domain::habit::{Habit, HabitId};
use greensteps_domain::impact::{CategoryImpact, HabitCategory, HabitImpact, ImpactRow, ImpactSummary};
use greensteps_domain::scoring::Indicators;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRowDto {
    pub habit_id: HabitId,
    pub habit_text: String,
    pub co2: f64,
    pub note: String,
    pub category: HabitCategory,
}

impl From<ImpactRow> for ImpactRowDto {
    fn from(row: ImpactRow) -> Self {
        Self {
            habit_id: row.habit_id,
            habit_text: row.habit_text,
            co2: row.co2,
            note: row.note.to_string(),
            category: row.category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummaryDto {
    pub completed_count: u32,
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
    pub location_bonus: f64,
    pub total_impact: f64,
    pub tree_equivalent: f64,
    pub car_km_equivalent: f64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_message: Option<String>,
    pub impact_breakdown: Vec<ImpactRowDto>,
}

impl From<ImpactSummary> for ImpactSummaryDto {
    fn from(s: ImpactSummary) -> Self {
        Self {
            completed_count: s.completed_count as u32,
            total_co2: s.total_co2,
            location_bonus: s.location_bonus,
            total_impact: s.total_impact,
            tree_equivalent: s.tree_equivalent,
            car_km_equivalent: s.car_km_equivalent,
            message: s.message,
            location_message: s.location_message,
            impact_breakdown: s.impact_breakdown.into_iter().map(ImpactRowDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryImpactDto {
    pub category: HabitCategory,
    pub label: String,
    pub color: String,
    pub co2: f64,
}

impl From<CategoryImpact> for CategoryImpactDto {
    fn from(c: CategoryImpact) -> Self {
        Self {
            category: c.category,
            label: c.label.to_string(),
            color: c.color.to_string(),
            co2: c.co2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitImpactDto {
    #[serde(flatten)]
    pub habit: Habit,
    pub co2: f64,
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<HabitCategory>,
}

impl From<HabitImpact> for HabitImpactDto {
    fn from(h: HabitImpact) -> Self {
        Self {
            habit: h.habit,
            co2: h.co2,
            note: h.note.to_string(),
            category: h.category,
        }
    }
}

/// Daily summary enriched with the visited location's indicators
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationImpactDto {
    #[serde(flatten)]
    pub summary: ImpactSummaryDto,
    pub location_score: Indicators,
    pub benefit_message: String,
    pub location_name: String,
}
