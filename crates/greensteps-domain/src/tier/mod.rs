mod ladder;
mod unlock;


pub use ladder::{current_tier, next_tier, tier_for_score, NextTier, StreakTier, TierSpec, TIERS};
pub use unlock::{
    LockedLocation, SpecialLocationInfo, StreakProgress, TierCelebration, UnlockPolicy,
    UnlockedLocation,
};
