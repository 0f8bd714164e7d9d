use std::sync::Arc;

use log::info;

use crate::application::dtos::{
    CelebrationDto, LockedLocationDto, SpecialLocationDto, StreakProgressDto, UnlockedLocationDto,
};
use greensteps_domain::location::{LocationCatalog, LocationId};
use greensteps_domain::tier::UnlockPolicy;

/// Streak-gated unlock facade; the streak itself comes from the stats
/// queries, these methods only apply the tier rules to the catalog.
pub struct UnlockQueries {
    locations: Arc<LocationCatalog>,
}

impl UnlockQueries {
    pub fn new(locations: Arc<LocationCatalog>) -> Self {
        Self { locations }
    }

    /// Locations visible at the streak's tier, best score first
    pub fn get_unlocked_locations(&self, streak: u32) -> Vec<UnlockedLocationDto> {
        let unlocked = UnlockPolicy::unlocked_locations(streak, &self.locations);
        info!("[unlock] unlocked streak={} count={}", streak, unlocked.len());
        unlocked.into_iter().map(UnlockedLocationDto::from).collect()
    }

    /// Locations still gated above the current tier, catalog order
    pub fn get_locked_locations(&self, streak: u32) -> Vec<LockedLocationDto> {
        let locked = UnlockPolicy::locked_locations(streak, &self.locations);
        info!("[unlock] locked streak={} count={}", streak, locked.len());
        locked.into_iter().map(LockedLocationDto::from).collect()
    }

    /// Marker info for an earned tier-gated location, None otherwise
    pub fn get_special_location_info(
        &self,
        location_id: LocationId,
        streak: u32,
    ) -> Option<SpecialLocationDto> {
        UnlockPolicy::special_location_info(location_id, streak, &self.locations)
            .map(SpecialLocationDto::from)
    }

    /// Progress toward the next unlock milestone
    pub fn get_streak_progress(&self, streak: u32) -> StreakProgressDto {
        let progress = UnlockPolicy::streak_progress(streak, &self.locations);
        info!(
            "[unlock] progress streak={} percent={} unlocked={}",
            streak, progress.percent, progress.unlocked_count
        );
        StreakProgressDto::from(progress)
    }

    /// Celebration payload when the streak change reached a new tier
    pub fn get_streak_celebration(
        &self,
        previous_streak: u32,
        current_streak: u32,
    ) -> Option<CelebrationDto> {
        let celebration =
            UnlockPolicy::streak_celebration(previous_streak, current_streak, &self.locations);
        if let Some(ref c) = celebration {
            info!(
                "[unlock] celebration tier={} new_locations={}",
                c.tier.name, c.new_locations_count
            );
        }
        celebration.map(CelebrationDto::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greensteps_domain::catalog::reference_locations;
    use greensteps_domain::tier::StreakTier;

    fn queries() -> UnlockQueries {
        UnlockQueries::new(Arc::new(reference_locations().clone()))
    }

    #[test]
    fn unlocked_locations_arrive_best_first() {
        let unlocked = queries().get_unlocked_locations(3);

        assert_eq!(unlocked.len(), 3);
        assert_eq!(unlocked[0].location.id, 1);
        assert_eq!(unlocked[0].tier, StreakTier::Bronze);
    }

    #[test]
    fn below_bronze_nothing_is_unlocked() {
        assert!(queries().get_unlocked_locations(2).is_empty());
    }

    #[test]
    fn locked_locations_carry_their_unlock_hint() {
        let locked = queries().get_locked_locations(3);

        assert_eq!(locked.len(), 3);
        assert_eq!(locked[0].location.id, 1);
        assert_eq!(
            locked[0].required_tier.as_ref().unwrap().tier,
            StreakTier::Gold
        );
        assert_eq!(
            locked[0].unlock_message.as_deref(),
            Some("Unlocks after a 14-day streak")
        );
    }

    #[test]
    fn special_info_requires_an_earned_tier() {
        let q = queries();

        assert!(q.get_special_location_info(1, 3).is_none());

        let info = q.get_special_location_info(4, 3).unwrap();
        assert_eq!(info.tier.tier, StreakTier::Bronze);
        assert_eq!(
            info.bonus_message,
            "Bronze tier special spot! Reward for keeping a 3-day streak"
        );
    }

    #[test]
    fn progress_carries_counts_and_message() {
        let progress = queries().get_streak_progress(5);

        assert_eq!(progress.streak, 5);
        assert_eq!(progress.percent, 50);
        assert_eq!(progress.unlocked_count, 3);
        assert_eq!(progress.total_special_locations, 3);
        assert_eq!(progress.message, "2 day(s) to Silver tier!");
    }

    #[test]
    fn celebration_fires_only_on_a_tier_change() {
        let q = queries();

        let celebration = q.get_streak_celebration(2, 3).unwrap();
        assert_eq!(celebration.kind, "bronze");
        assert_eq!(celebration.new_locations_count, 3);

        assert!(q.get_streak_celebration(3, 4).is_none());
    }
}
