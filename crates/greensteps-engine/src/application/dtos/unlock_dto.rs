use serde::{Deserialize, Serialize};

use greensteps_domain::location::GreenLocation;
use greensteps_domain::tier::{
    LockedLocation, NextTier, SpecialLocationInfo, StreakProgress, StreakTier, TierCelebration,
    TierSpec, UnlockedLocation,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSpecDto {
    pub tier: StreakTier,
    pub min_days: u32,
    pub min_score: u8,
    pub name: String,
    pub label: String,
    pub message: String,
}

impl From<&TierSpec> for TierSpecDto {
    fn from(spec: &TierSpec) -> Self {
        Self {
            tier: spec.tier,
            min_days: spec.min_days,
            min_score: spec.min_score,
            name: spec.name.to_string(),
            label: spec.label.to_string(),
            message: spec.message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockedLocationDto {
    #[serde(flatten)]
    pub location: GreenLocation,
    pub tier: StreakTier,
}

impl From<UnlockedLocation> for UnlockedLocationDto {
    fn from(u: UnlockedLocation) -> Self {
        Self {
            location: u.location,
            tier: u.tier,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedLocationDto {
    #[serde(flatten)]
    pub location: GreenLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_tier: Option<TierSpecDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_message: Option<String>,
}

impl From<LockedLocation> for LockedLocationDto {
    fn from(l: LockedLocation) -> Self {
        Self {
            location: l.location,
            required_tier: l.required_tier.map(TierSpecDto::from),
            unlock_message: l.unlock_message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialLocationDto {
    pub tier: TierSpecDto,
    pub bonus_message: String,
}

impl From<SpecialLocationInfo> for SpecialLocationDto {
    fn from(info: SpecialLocationInfo) -> Self {
        Self {
            tier: TierSpecDto::from(info.tier),
            bonus_message: info.bonus_message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextTierDto {
    pub tier: TierSpecDto,
    pub days_remaining: u32,
    pub message: String,
}

impl From<NextTier> for NextTierDto {
    fn from(next: NextTier) -> Self {
        Self {
            tier: TierSpecDto::from(next.spec),
            days_remaining: next.days_remaining,
            message: next.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakProgressDto {
    pub streak: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_tier: Option<TierSpecDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_tier: Option<NextTierDto>,
    pub unlocked_count: u32,
    pub total_special_locations: u32,
    pub percent: u8,
    pub message: String,
}

impl From<StreakProgress> for StreakProgressDto {
    fn from(p: StreakProgress) -> Self {
        Self {
            streak: p.streak,
            current_tier: p.current_tier.map(TierSpecDto::from),
            next_tier: p.next_tier.map(NextTierDto::from),
            unlocked_count: p.unlocked_count as u32,
            total_special_locations: p.total_special_locations as u32,
            percent: p.percent,
            message: p.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrationDto {
    pub tier: TierSpecDto,
    pub message: String,
    pub new_locations_count: u32,
    pub new_locations: Vec<UnlockedLocationDto>,
    /// Lowercase tier name used as the animation key
    pub kind: String,
}

impl From<TierCelebration> for CelebrationDto {
    fn from(c: TierCelebration) -> Self {
        Self {
            tier: TierSpecDto::from(c.tier),
            message: c.message.to_string(),
            new_locations_count: c.new_locations_count as u32,
            new_locations: c
                .new_locations
                .into_iter()
                .map(UnlockedLocationDto::from)
                .collect(),
            kind: c.kind.to_string(),
        }
    }
}
