use serde::{Deserialize, Serialize};

use greensteps_domain::habit::{Habit, HabitId};
use greensteps_domain::location::GreenLocation;
use greensteps_domain::recommendation::{
    HabitRecommendation, RecommendReason, RecommendedLocation,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendReasonDto {
    pub habit_id: HabitId,
    pub habit_text: String,
    pub description: String,
}

impl From<RecommendReason> for RecommendReasonDto {
    fn from(r: RecommendReason) -> Self {
        Self {
            habit_id: r.habit_id,
            habit_text: r.habit_text,
            description: r.description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedLocationDto {
    #[serde(flatten)]
    pub location: GreenLocation,
    /// None serializes as an explicit null, the list shape stays fixed
    pub recommend_reason: Option<RecommendReasonDto>,
    pub sorted_by: String,
}

impl From<RecommendedLocation> for RecommendedLocationDto {
    fn from(rec: RecommendedLocation) -> Self {
        Self {
            location: rec.location,
            recommend_reason: rec.recommend_reason.map(RecommendReasonDto::from),
            sorted_by: rec.sorted_by.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitRecommendationDto {
    #[serde(flatten)]
    pub habit: Habit,
    pub recommendation: String,
}

impl From<HabitRecommendation> for HabitRecommendationDto {
    fn from(h: HabitRecommendation) -> Self {
        Self {
            habit: h.habit,
            recommendation: h.recommendation.to_string(),
        }
    }
}
