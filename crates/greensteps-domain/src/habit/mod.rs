//! Habit catalog and daily completion records
//!
//! A `DailyRecord` is what the tracker persists per calendar day: a map
//! from habit id to completion flag. An absent record means "no data",
//! which is not the same as an empty or all-false record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::DomainError;


/// Habit ids are small fixed integers defined by the catalog
pub type HabitId = u32;

/// Static catalog entry for a tracked habit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub text: String,
    pub icon: String,
}

impl Habit {
    pub fn new(id: HabitId, text: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            icon: icon.into(),
        }
    }
}

/// Ordered, read-only habit catalog
///
/// All engines size their computations off `len()`; the reference dataset
/// happens to contain 8 entries but nothing may depend on that number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitCatalog {
    habits: Vec<Habit>,
}

impl HabitCatalog {
    pub fn new(habits: Vec<Habit>) -> Result<Self, DomainError> {
        if habits.is_empty() {
            return Err(DomainError::Validation(
                "Habit catalog cannot be empty".to_string(),
            ));
        }
        let mut seen = std::collections::BTreeSet::new();
        for habit in &habits {
            if !seen.insert(habit.id) {
                return Err(DomainError::Validation(format!(
                    "Duplicate habit id in catalog: {}",
                    habit.id
                )));
            }
        }
        Ok(Self { habits })
    }

    /// Rebuild from already-trusted data, skipping validation
    pub fn restore(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Habit> {
        self.habits.iter()
    }

    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn contains(&self, id: HabitId) -> bool {
        self.get(id).is_some()
    }
}

/// One day's habit completion state
///
/// Backed by a `BTreeMap` so iteration is always ascending habit id; the
/// impact breakdown and the recommendation vote order both rely on that.
/// Serializes to the raw map (`{"1":true}`), matching the stored payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyRecord {
    entries: BTreeMap<HabitId, bool>,
}

impl DailyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (HabitId, bool)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Record a toggle; overwrites any earlier value for the habit
    pub fn set(&mut self, id: HabitId, completed: bool) {
        self.entries.insert(id, completed);
    }

    pub fn completed(&self, id: HabitId) -> bool {
        self.entries.get(&id).copied().unwrap_or(false)
    }

    /// True when the record holds no entries at all (no data for the day)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of true entries, regardless of whether the catalog knows them
    pub fn completed_count(&self) -> usize {
        self.entries.values().filter(|done| **done).count()
    }

    /// Completed ids in ascending order
    pub fn completed_ids(&self) -> impl Iterator<Item = HabitId> + '_ {
        self.entries
            .iter()
            .filter(|(_, done)| **done)
            .map(|(id, _)| *id)
    }

    /// A streak day requires every catalog habit to be completed
    pub fn is_full_completion(&self, catalog: &HabitCatalog) -> bool {
        !self.is_empty() && catalog.iter().all(|habit| self.completed(habit.id))
    }

    /// Share of catalog habits completed, rounded to a whole percent.
    /// Empty records score 0, they are not an error.
    pub fn completion_rate(&self, catalog: &HabitCatalog) -> u8 {
        if self.is_empty() || catalog.is_empty() {
            return 0;
        }
        let completed = catalog.iter().filter(|h| self.completed(h.id)).count();
        ((completed as f64 / catalog.len() as f64) * 100.0).round() as u8
    }
}
