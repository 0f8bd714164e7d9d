//! Habit to location recommendation
//!
//! Each habit maps to the location types it pairs well with and votes for
//! one sort indicator. A day's completed habits pick the location types to
//! show and the indicator to rank them by. Two simpler pickers for the map
//! view live here too; they rank by different rules and stay independent
//! of the voting engine and of each other.

use serde::Serialize;

use crate::habit::{DailyRecord, Habit, HabitCatalog, HabitId};
use crate::location::{GreenLocation, LocationCatalog, LocationType};


/// Indicator a recommendation list is ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Score,
    GreenCoverage,
    ThermalComfort,
    Pm10Reduction,
    CarbonAbsorption,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Score => "score",
            SortKey::GreenCoverage => "greenCoverage",
            SortKey::ThermalComfort => "thermalComfort",
            SortKey::Pm10Reduction => "pm10Reduction",
            SortKey::CarbonAbsorption => "carbonAbsorption",
        }
    }

    fn value_for(&self, location: &GreenLocation) -> f64 {
        match self {
            SortKey::Score => location.effective_score().value() as f64,
            SortKey::GreenCoverage => location.indicators.green_coverage,
            SortKey::ThermalComfort => location.indicators.thermal_comfort,
            SortKey::Pm10Reduction => location.indicators.pm10_reduction,
            SortKey::CarbonAbsorption => location.indicators.carbon_absorption,
        }
    }
}

/// One row of the affinity table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HabitAffinity {
    pub habit_id: HabitId,
    pub types: &'static [LocationType],
    pub sort_key: SortKey,
    pub reason: &'static str,
}

/// Affinity table in habit id order
pub const AFFINITIES: [HabitAffinity; 8] = [
    HabitAffinity {
        habit_id: 1,
        types: &[LocationType::Park],
        sort_key: SortKey::GreenCoverage,
        reason: "Nice sustainable choice! Rest up in a clean park",
    },
    HabitAffinity {
        habit_id: 2,
        types: &[LocationType::Trail],
        sort_key: SortKey::ThermalComfort,
        reason: "Pair your transit habit with a walk on a trail",
    },
    HabitAffinity {
        habit_id: 3,
        types: &[LocationType::Park, LocationType::Trail],
        sort_key: SortKey::Pm10Reduction,
        reason: "Green spaces with noticeably cleaner air",
    },
    HabitAffinity {
        habit_id: 4,
        types: &[LocationType::Park],
        sort_key: SortKey::GreenCoverage,
        reason: "A green space to match your low-waste habit",
    },
    HabitAffinity {
        habit_id: 5,
        types: &[LocationType::Park, LocationType::Trail],
        sort_key: SortKey::CarbonAbsorption,
        reason: "Energy saved, now visit a spot that soaks up carbon",
    },
    HabitAffinity {
        habit_id: 6,
        types: &[LocationType::Trail],
        sort_key: SortKey::ThermalComfort,
        reason: "You like to move! A trail is a great fit",
    },
    HabitAffinity {
        habit_id: 7,
        types: &[LocationType::Park],
        sort_key: SortKey::GreenCoverage,
        reason: "After a plant-based meal, take a stroll in the park",
    },
    HabitAffinity {
        habit_id: 8,
        types: &[LocationType::Park, LocationType::Trail],
        sort_key: SortKey::Pm10Reduction,
        reason: "Clean-environment effort! Enjoy the fresh-air greenery",
    },
];

fn affinity_for(habit_id: HabitId) -> Option<&'static HabitAffinity> {
    AFFINITIES.iter().find(|row| row.habit_id == habit_id)
}

/// Why a location made the list: the first completed habit that fits it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendReason {
    pub habit_id: HabitId,
    pub habit_text: String,
    pub description: &'static str,
}

/// Location annotated with its reason and the winning sort indicator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedLocation {
    #[serde(flatten)]
    pub location: GreenLocation,
    pub recommend_reason: Option<RecommendReason>,
    pub sorted_by: SortKey,
}

/// Habit annotated with its pitch for a given location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitRecommendation {
    #[serde(flatten)]
    pub habit: Habit,
    pub recommendation: &'static str,
}

/// Voting recommender over the affinity table
/// Pure domain logic without infrastructure dependencies
pub struct LocationRecommender;

impl LocationRecommender {
    /// Top five locations for the day's completed habits.
    ///
    /// Completed habits contribute their location types to a filter set
    /// and one vote each for their sort indicator. The most-voted
    /// indicator ranks the filtered locations; on a tie the indicator
    /// voted first wins. No completed habits means no recommendations.
    pub fn recommended_locations(
        record: &DailyRecord,
        habits: &HabitCatalog,
        locations: &LocationCatalog,
    ) -> Vec<RecommendedLocation> {
        let completed: Vec<HabitId> = record.completed_ids().collect();
        if completed.is_empty() {
            return Vec::new();
        }

        let mut relevant_types: Vec<LocationType> = Vec::new();
        // First-vote order matters for tie breaks, so a Vec, not a map
        let mut votes: Vec<(SortKey, u32)> = Vec::new();
        for habit_id in &completed {
            let Some(affinity) = affinity_for(*habit_id) else {
                continue;
            };
            for location_type in affinity.types {
                if !relevant_types.contains(location_type) {
                    relevant_types.push(*location_type);
                }
            }
            match votes.iter_mut().find(|(key, _)| *key == affinity.sort_key) {
                Some((_, count)) => *count += 1,
                None => votes.push((affinity.sort_key, 1)),
            }
        }

        let mut winner = SortKey::Score;
        let mut max_votes = 0;
        for (key, count) in &votes {
            if *count > max_votes {
                max_votes = *count;
                winner = *key;
            }
        }

        let mut matched: Vec<GreenLocation> = locations
            .iter()
            .filter(|location| relevant_types.contains(&location.location_type))
            .cloned()
            .collect();
        matched.sort_by(|a, b| winner.value_for(b).total_cmp(&winner.value_for(a)));

        matched
            .into_iter()
            .take(5)
            .map(|location| {
                let recommend_reason = Self::first_reason(&completed, &location, habits);
                RecommendedLocation {
                    location,
                    recommend_reason,
                    sorted_by: winner,
                }
            })
            .collect()
    }

    /// Habits worth doing at this location, catalog order
    pub fn habits_for_location(
        location: &GreenLocation,
        habits: &HabitCatalog,
    ) -> Vec<HabitRecommendation> {
        AFFINITIES
            .iter()
            .filter(|affinity| affinity.types.contains(&location.location_type))
            .filter_map(|affinity| {
                let habit = habits.get(affinity.habit_id)?;
                Some(HabitRecommendation {
                    habit: habit.clone(),
                    recommendation: affinity.reason,
                })
            })
            .collect()
    }

    /// Location types a habit pairs with, empty for unmapped ids
    pub fn types_for_habit(habit_id: HabitId) -> &'static [LocationType] {
        affinity_for(habit_id).map(|row| row.types).unwrap_or(&[])
    }

    /// Toast line shown right after a habit is checked off
    pub fn completion_message(habit_id: HabitId) -> Option<&'static str> {
        affinity_for(habit_id).map(|row| row.reason)
    }

    fn first_reason(
        completed: &[HabitId],
        location: &GreenLocation,
        habits: &HabitCatalog,
    ) -> Option<RecommendReason> {
        completed.iter().find_map(|habit_id| {
            let affinity = affinity_for(*habit_id)?;
            if !affinity.types.contains(&location.location_type) {
                return None;
            }
            let habit = habits.get(*habit_id)?;
            Some(RecommendReason {
                habit_id: *habit_id,
                habit_text: habit.text.clone(),
                description: affinity.reason,
            })
        })
    }
}

fn top_locations<K, F>(
    catalog: &LocationCatalog,
    keep: K,
    key: F,
    limit: usize,
) -> Vec<GreenLocation>
where
    K: Fn(&GreenLocation) -> bool,
    F: Fn(&GreenLocation) -> f64,
{
    let mut matched: Vec<GreenLocation> = catalog
        .iter()
        .filter(|location| keep(location))
        .cloned()
        .collect();
    matched.sort_by(|a, b| key(b).total_cmp(&key(a)));
    matched.truncate(limit);
    matched
}

/// Map highlights by completion depth. A full day surfaces the top-scored
/// spots, five habits the strongest carbon sinks, three the most
/// comfortable ones; fewer highlights nothing.
pub fn locations_by_completion(
    record: &DailyRecord,
    habits: &HabitCatalog,
    locations: &LocationCatalog,
) -> Vec<GreenLocation> {
    let all_completed = habits.iter().all(|habit| record.completed(habit.id));
    let completed_count = record.completed_count();

    if all_completed {
        top_locations(
            locations,
            |location| location.effective_score().value() >= 85,
            |location| location.effective_score().value() as f64,
            3,
        )
    } else if completed_count >= 5 {
        top_locations(
            locations,
            |location| location.indicators.carbon_absorption >= 2.0,
            |location| location.indicators.carbon_absorption,
            3,
        )
    } else if completed_count >= 3 {
        top_locations(
            locations,
            |location| location.indicators.thermal_comfort >= 85.0,
            |location| location.indicators.thermal_comfort,
            3,
        )
    } else {
        Vec::new()
    }
}

/// Map highlights by streak length: the single best spot from a week-long
/// streak, the top three from a three-day one. Ranks a copy of the
/// catalog; the catalog itself is never reordered.
pub fn locations_by_streak(streak: u32, locations: &LocationCatalog) -> Vec<GreenLocation> {
    let limit = if streak >= 7 {
        1
    } else if streak >= 3 {
        3
    } else {
        return Vec::new();
    };

    let mut ranked: Vec<GreenLocation> = locations.iter().cloned().collect();
    ranked.sort_by(|a, b| {
        b.effective_score()
            .value()
            .cmp(&a.effective_score().value())
    });
    ranked.truncate(limit);
    ranked
}
