use serde::{Deserialize, Serialize};

use greensteps_domain::location::ResidentialZone;
use greensteps_domain::scoring::ScoreGrade;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreGradeDto {
    pub grade: String,
    pub label: String,
}

impl From<ScoreGrade> for ScoreGradeDto {
    fn from(g: ScoreGrade) -> Self {
        Self {
            grade: g.grade.to_string(),
            label: g.label.to_string(),
        }
    }
}

/// Zone joined with its derived score, marker color and grade
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneScoreDto {
    #[serde(flatten)]
    pub zone: ResidentialZone,
    pub score: u8,
    pub color: String,
    pub grade: ScoreGradeDto,
}

impl From<&ResidentialZone> for ZoneScoreDto {
    fn from(zone: &ResidentialZone) -> Self {
        let score = zone.score();
        Self {
            zone: zone.clone(),
            score: score.value(),
            color: score.color().to_string(),
            grade: ScoreGradeDto::from(score.grade()),
        }
    }
}
