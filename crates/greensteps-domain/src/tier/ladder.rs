//! Streak tier ladder
//!
//! Three tiers, unlocked by consecutive full-completion days. The table
//! is data, not branching: threshold edits stay local to `TIERS`.
//! `min_days` is strictly increasing and `min_score` non-decreasing, so
//! tier membership is monotonic in the streak.

use serde::{Deserialize, Serialize};

/// Tier identity, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StreakTier {
    Bronze,
    Silver,
    Gold,
}

impl StreakTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreakTier::Bronze => "BRONZE",
            StreakTier::Silver => "SILVER",
            StreakTier::Gold => "GOLD",
        }
    }

    /// Lowercase variant used as the celebration animation key
    pub fn celebration_kind(&self) -> &'static str {
        match self {
            StreakTier::Bronze => "bronze",
            StreakTier::Silver => "silver",
            StreakTier::Gold => "gold",
        }
    }
}

/// One row of the tier table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierSpec {
    pub tier: StreakTier,
    /// Streak days needed to hold this tier
    pub min_days: u32,
    /// Location score gated behind this tier
    pub min_score: u8,
    pub name: &'static str,
    pub label: &'static str,
    pub message: &'static str,
}

/// Tier table in ascending order
pub const TIERS: [TierSpec; 3] = [
    TierSpec {
        tier: StreakTier::Bronze,
        min_days: 3,
        min_score: 85,
        name: "Bronze",
        label: "Hidden gems",
        message: "3-day streak! Hidden gems are now unlocked",
    },
    TierSpec {
        tier: StreakTier::Silver,
        min_days: 7,
        min_score: 88,
        name: "Silver",
        label: "Premium spots",
        message: "7-day streak! Premium spots are now unlocked",
    },
    TierSpec {
        tier: StreakTier::Gold,
        min_days: 14,
        min_score: 90,
        name: "Gold",
        label: "Legendary spots",
        message: "14-day streak! Legendary spots are now unlocked",
    },
];

/// Highest tier whose `min_days` the streak satisfies, if any
pub fn current_tier(streak: u32) -> Option<&'static TierSpec> {
    TIERS.iter().rev().find(|spec| streak >= spec.min_days)
}

/// The tier a location's own score places it in, best tier first
pub fn tier_for_score(score: u8) -> Option<&'static TierSpec> {
    TIERS.iter().rev().find(|spec| score >= spec.min_score)
}

/// Next tier up with the day gap, None once Gold is held
#[derive(Debug, Clone, PartialEq)]
pub struct NextTier {
    pub spec: &'static TierSpec,
    pub days_remaining: u32,
    pub message: String,
}

pub fn next_tier(streak: u32) -> Option<NextTier> {
    let spec = TIERS.iter().find(|spec| streak < spec.min_days)?;
    let days_remaining = spec.min_days - streak;
    Some(NextTier {
        spec,
        days_remaining,
        message: format!(
            "{} more day(s) to unlock the {}!",
            days_remaining, spec.label
        ),
    })
}
