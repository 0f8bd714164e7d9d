//! Unlock rules over the tier ladder and the location catalog
//!
//! Pure functions of `(streak, catalog)`; no internal state. The engine
//! layer wraps these in DTO facades for the presentation.

use crate::location::{GreenLocation, LocationCatalog, LocationId};
use crate::tier::ladder::{self, NextTier, StreakTier, TierSpec, TIERS};

/// A location visible at the current tier
#[derive(Debug, Clone, PartialEq)]
pub struct UnlockedLocation {
    pub location: GreenLocation,
    /// The tier that made it visible
    pub tier: StreakTier,
}

/// A location still gated behind a higher tier
#[derive(Debug, Clone, PartialEq)]
pub struct LockedLocation {
    pub location: GreenLocation,
    pub required_tier: Option<&'static TierSpec>,
    pub unlock_message: Option<String>,
}

/// Marker info for a tier-gated location the user has already earned
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialLocationInfo {
    pub tier: &'static TierSpec,
    pub bonus_message: String,
}

/// Progress toward the next unlock milestone
#[derive(Debug, Clone, PartialEq)]
pub struct StreakProgress {
    pub streak: u32,
    pub current_tier: Option<&'static TierSpec>,
    pub next_tier: Option<NextTier>,
    pub unlocked_count: usize,
    pub total_special_locations: usize,
    pub percent: u8,
    pub message: String,
}

/// Fired when a streak change reaches a new tier
#[derive(Debug, Clone, PartialEq)]
pub struct TierCelebration {
    pub tier: &'static TierSpec,
    pub message: &'static str,
    pub new_locations_count: usize,
    /// Top three newly visible locations, best score first
    pub new_locations: Vec<UnlockedLocation>,
    pub kind: &'static str,
}

/// Streak-gated unlock rules
/// Pure domain logic without infrastructure dependencies
pub struct UnlockPolicy;

impl UnlockPolicy {
    /// Locations visible at the streak's tier, best score first.
    /// Empty until the first tier is reached.
    pub fn unlocked_locations(streak: u32, catalog: &LocationCatalog) -> Vec<UnlockedLocation> {
        let Some(current) = ladder::current_tier(streak) else {
            return Vec::new();
        };

        let mut unlocked: Vec<UnlockedLocation> = catalog
            .iter()
            .filter(|loc| loc.effective_score().value() >= current.min_score)
            .map(|loc| UnlockedLocation {
                location: loc.clone(),
                tier: current.tier,
            })
            .collect();
        unlocked.sort_by(|a, b| {
            b.location
                .effective_score()
                .value()
                .cmp(&a.location.effective_score().value())
        });
        unlocked
    }

    /// Locations scoring above the current tier's threshold, in catalog
    /// order, each annotated with the tier that would reveal it.
    ///
    /// Below the first tier the threshold resolves to 100, so the list is
    /// empty; the teaser list only exists once something is unlocked.
    pub fn locked_locations(streak: u32, catalog: &LocationCatalog) -> Vec<LockedLocation> {
        let threshold = ladder::current_tier(streak)
            .map(|spec| spec.min_score)
            .unwrap_or(100);

        catalog
            .iter()
            .filter(|loc| loc.effective_score().value() > threshold)
            .map(|loc| {
                let required = ladder::tier_for_score(loc.effective_score().value());
                LockedLocation {
                    location: loc.clone(),
                    required_tier: required,
                    unlock_message: required
                        .map(|spec| format!("Unlocks after a {}-day streak", spec.min_days)),
                }
            })
            .collect()
    }

    /// Two-part gate: the location must place in a tier by its own score,
    /// and that tier's day requirement must already be met by the streak.
    /// Holding no tier at all short-circuits to None.
    pub fn special_location_info(
        location_id: LocationId,
        streak: u32,
        catalog: &LocationCatalog,
    ) -> Option<SpecialLocationInfo> {
        ladder::current_tier(streak)?;
        let location = catalog.get(location_id)?;

        let location_tier = ladder::tier_for_score(location.effective_score().value())?;
        if location_tier.min_days > streak {
            return None;
        }

        Some(SpecialLocationInfo {
            tier: location_tier,
            bonus_message: format!(
                "{} tier special spot! Reward for keeping a {}-day streak",
                location_tier.name, streak
            ),
        })
    }

    /// Piecewise progress: 0-33 toward Bronze, 33-66 toward Silver,
    /// 66-100 toward Gold.
    pub fn streak_progress(streak: u32, catalog: &LocationCatalog) -> StreakProgress {
        let bronze = &TIERS[0];
        let silver = &TIERS[1];
        let gold = &TIERS[2];

        let (percent, message) = if streak >= gold.min_days {
            (
                100.0,
                "Top tier reached! Every special spot is unlocked".to_string(),
            )
        } else if streak >= silver.min_days {
            let span = (gold.min_days - silver.min_days) as f64;
            (
                66.0 + (streak - silver.min_days) as f64 / span * 34.0,
                format!("{} day(s) to Gold tier!", gold.min_days - streak),
            )
        } else if streak >= bronze.min_days {
            let span = (silver.min_days - bronze.min_days) as f64;
            (
                33.0 + (streak - bronze.min_days) as f64 / span * 33.0,
                format!("{} day(s) to Silver tier!", silver.min_days - streak),
            )
        } else {
            (
                streak as f64 / bronze.min_days as f64 * 33.0,
                format!("{} day(s) to your first unlock!", bronze.min_days - streak),
            )
        };

        StreakProgress {
            streak,
            current_tier: ladder::current_tier(streak),
            next_tier: ladder::next_tier(streak),
            unlocked_count: Self::unlocked_locations(streak, catalog).len(),
            total_special_locations: catalog
                .iter()
                .filter(|loc| loc.effective_score().value() >= bronze.min_score)
                .count(),
            percent: percent.min(100.0).round() as u8,
            message,
        }
    }

    /// Fires only when the tier actually went up; same tier, no tier, or
    /// a drop all stay silent.
    pub fn streak_celebration(
        previous_streak: u32,
        current_streak: u32,
        catalog: &LocationCatalog,
    ) -> Option<TierCelebration> {
        let current = ladder::current_tier(current_streak)?;
        if let Some(previous) = ladder::current_tier(previous_streak) {
            if previous.tier >= current.tier {
                return None;
            }
        }

        let unlocked = Self::unlocked_locations(current_streak, catalog);
        let new_locations_count = unlocked.len();
        let new_locations = unlocked.into_iter().take(3).collect();

        Some(TierCelebration {
            tier: current,
            message: current.message,
            new_locations_count,
            new_locations,
            kind: current.tier.celebration_kind(),
        })
    }
}
