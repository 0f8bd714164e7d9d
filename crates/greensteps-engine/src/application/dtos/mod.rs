mod impact_dto;
mod recommendation_dto;
mod stats_dto;
mod unlock_dto;
mod zone_dto;

pub use impact_dto::{
    CategoryImpactDto, HabitImpactDto, ImpactRowDto, ImpactSummaryDto, LocationImpactDto,
};
pub use recommendation_dto::{
    HabitRecommendationDto, RecommendReasonDto, RecommendedLocationDto,
};
pub use stats_dto::{HabitStatsDto, MonthDayDto, TodayRecordDto, WeekDayDto};
pub use unlock_dto::{
    CelebrationDto, LockedLocationDto, NextTierDto, SpecialLocationDto, StreakProgressDto,
    TierSpecDto, UnlockedLocationDto,
};
pub use zone_dto::{ScoreGradeDto, ZoneScoreDto};
