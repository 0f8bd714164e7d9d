//! CO2 impact accounting
//!
//! Every habit carries a fixed CO2 credit in kilograms. Summaries add the
//! credits of completed habits, optionally blend in a location's carbon
//! absorption, and convert the total into tree-day and car-km figures.

use serde::{Deserialize, Serialize};

use crate::habit::{DailyRecord, Habit, HabitCatalog, HabitId};
use crate::location::GreenLocation;


/// Impact category a habit contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Waste,
    Transport,
    Energy,
    Food,
}

impl HabitCategory {
    /// Fixed presentation order for category rollups
    pub const ALL: [HabitCategory; 4] = [
        HabitCategory::Waste,
        HabitCategory::Transport,
        HabitCategory::Energy,
        HabitCategory::Food,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HabitCategory::Waste => "waste",
            HabitCategory::Transport => "transport",
            HabitCategory::Energy => "energy",
            HabitCategory::Food => "food",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HabitCategory::Waste => "Waste reduction",
            HabitCategory::Transport => "Transport",
            HabitCategory::Energy => "Energy saving",
            HabitCategory::Food => "Food habits",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            HabitCategory::Waste => "#10b981",
            HabitCategory::Transport => "#3b82f6",
            HabitCategory::Energy => "#f59e0b",
            HabitCategory::Food => "#ef4444",
        }
    }
}

/// One row of the credit table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactCredit {
    pub habit_id: HabitId,
    /// Daily CO2 saving in kg
    pub co2_kg: f64,
    pub note: &'static str,
    pub category: HabitCategory,
}

/// Credit table in habit id order
pub const CREDITS: [ImpactCredit; 8] = [
    ImpactCredit {
        habit_id: 1,
        co2_kg: 0.15,
        note: "One disposable cup is about 15g of CO2",
        category: HabitCategory::Waste,
    },
    ImpactCredit {
        habit_id: 2,
        co2_kg: 0.8,
        note: "Public transport over a car saves about 800g of CO2",
        category: HabitCategory::Transport,
    },
    ImpactCredit {
        habit_id: 3,
        co2_kg: 0.1,
        note: "One single-use item is about 100g of CO2",
        category: HabitCategory::Waste,
    },
    ImpactCredit {
        habit_id: 4,
        co2_kg: 0.05,
        note: "One plastic bag is about 50g of CO2",
        category: HabitCategory::Waste,
    },
    ImpactCredit {
        habit_id: 5,
        co2_kg: 0.2,
        note: "Cutting standby power saves about 200g of CO2",
        category: HabitCategory::Energy,
    },
    ImpactCredit {
        habit_id: 6,
        co2_kg: 0.1,
        note: "One elevator ride is about 100g of CO2",
        category: HabitCategory::Energy,
    },
    ImpactCredit {
        habit_id: 7,
        co2_kg: 1.5,
        note: "A plant-based meal over meat saves about 1.5kg of CO2",
        category: HabitCategory::Food,
    },
    ImpactCredit {
        habit_id: 8,
        co2_kg: 0.3,
        note: "Proper recycling saves about 300g of CO2",
        category: HabitCategory::Waste,
    },
];

fn credit_for(habit_id: HabitId) -> Option<&'static ImpactCredit> {
    CREDITS.iter().find(|credit| credit.habit_id == habit_id)
}

/// Per-habit line in a summary breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRow {
    pub habit_id: HabitId,
    pub habit_text: String,
    pub co2: f64,
    pub note: &'static str,
    pub category: HabitCategory,
}

/// Daily impact summary for a record, optionally tied to a visited location
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    pub completed_count: usize,
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
    pub location_bonus: f64,
    pub total_impact: f64,
    pub tree_equivalent: f64,
    pub car_km_equivalent: f64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_message: Option<String>,
    pub impact_breakdown: Vec<ImpactRow>,
}

/// Category rollup row, present even at zero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryImpact {
    pub category: HabitCategory,
    pub label: &'static str,
    pub color: &'static str,
    pub co2: f64,
}

/// Habit joined with its credit, for the habit list surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitImpact {
    #[serde(flatten)]
    pub habit: Habit,
    pub co2: f64,
    pub note: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<HabitCategory>,
}

// One tree absorbs roughly 20kg CO2 a year, 0.055kg a day
const TREE_DAILY_ABSORPTION_KG: f64 = 0.055;
// Driving one km emits roughly 0.12kg CO2
const CAR_KG_PER_KM: f64 = 0.12;
// Visiting a green location credits 0.1% of its yearly absorption
const LOCATION_BONUS_FACTOR: f64 = 0.001;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// CO2 accounting over daily records
/// Pure domain logic without infrastructure dependencies
pub struct ImpactCalculator;

impl ImpactCalculator {
    /// Sums the credits of completed habits. Only ids present in both the
    /// credit table and the catalog contribute; the completed count still
    /// reflects every true entry in the record.
    pub fn summarize(
        record: &DailyRecord,
        catalog: &HabitCatalog,
        location: Option<&GreenLocation>,
    ) -> ImpactSummary {
        let completed_count = record.completed_count();

        let mut total_co2 = 0.0;
        let mut breakdown = Vec::new();
        for habit_id in record.completed_ids() {
            let (Some(credit), Some(habit)) = (credit_for(habit_id), catalog.get(habit_id)) else {
                continue;
            };
            total_co2 += credit.co2_kg;
            breakdown.push(ImpactRow {
                habit_id,
                habit_text: habit.text.clone(),
                co2: credit.co2_kg,
                note: credit.note,
                category: credit.category,
            });
        }

        let location_bonus = location
            .map(|loc| loc.indicators.carbon_absorption * LOCATION_BONUS_FACTOR)
            .unwrap_or(0.0);
        let total_impact = total_co2 + location_bonus;

        let tree_equivalent = round1(total_impact / TREE_DAILY_ABSORPTION_KG);
        let car_km_equivalent = round1(total_impact / CAR_KG_PER_KM);

        let message = match completed_count {
            0 => "Complete your first habit today!".to_string(),
            1..=3 => format!(
                "{} habit(s) done today! You saved {:.2}kg of CO2.",
                completed_count, total_impact
            ),
            4..=6 => format!(
                "Amazing! {} habits saved {:.2}kg of CO2! That is what {} tree(s) absorb in a day.",
                completed_count, total_impact, tree_equivalent
            ),
            _ => format!(
                "Perfect! Every habit together saved {:.2}kg of CO2! Like skipping a {}km drive.",
                total_impact, car_km_equivalent
            ),
        };

        let location_message = location.map(|_| {
            format!(
                "An extra {:.1}g saved at this spot!",
                location_bonus * 1000.0
            )
        });

        ImpactSummary {
            completed_count,
            total_co2: round2(total_co2),
            location_bonus: round3(location_bonus),
            total_impact: round2(total_impact),
            tree_equivalent,
            car_km_equivalent,
            message,
            location_message,
            impact_breakdown: breakdown,
        }
    }

    /// Rollup across the four fixed categories, all present even at zero
    pub fn category_breakdown(record: &DailyRecord) -> Vec<CategoryImpact> {
        let mut totals = [0.0_f64; 4];
        for habit_id in record.completed_ids() {
            if let Some(credit) = credit_for(habit_id) {
                let slot = HabitCategory::ALL
                    .iter()
                    .position(|category| *category == credit.category);
                if let Some(slot) = slot {
                    totals[slot] += credit.co2_kg;
                }
            }
        }

        HabitCategory::ALL
            .iter()
            .zip(totals)
            .map(|(category, co2)| CategoryImpact {
                category: *category,
                label: category.label(),
                color: category.color(),
                co2: round2(co2),
            })
            .collect()
    }

    /// Catalog joined with the credit table, catalog order
    pub fn habit_impacts(catalog: &HabitCatalog) -> Vec<HabitImpact> {
        catalog
            .iter()
            .map(|habit| match credit_for(habit.id) {
                Some(credit) => HabitImpact {
                    habit: habit.clone(),
                    co2: credit.co2_kg,
                    note: credit.note,
                    category: Some(credit.category),
                },
                None => HabitImpact {
                    habit: habit.clone(),
                    co2: 0.0,
                    note: "",
                    category: None,
                },
            })
            .collect()
    }

    /// What a visit to this location is good for, by its strongest indicator
    pub fn location_benefit(location: &GreenLocation) -> &'static str {
        let details = &location.indicators;
        if details.thermal_comfort >= 85.0 {
            "Rest in the cool shade and save energy!"
        } else if details.pm10_reduction >= 80.0 {
            "Enjoy a healthy walk in clean air!"
        } else if details.carbon_absorption >= 2.0 {
            "Feel the carbon soaked up by the rich greenery!"
        } else {
            "Enjoy your time out in nature!"
        }
    }
}
