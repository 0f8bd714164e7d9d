//! Green score computation
//!
//! Folds the four environmental indicators of a location or zone into a
//! single 0-100 score. Carbon absorption is an open-ended tons/year
//! figure, so it is normalized against a 5.0 tons/year ceiling before
//! weighting; the other three indicators already arrive on a 0-100 scale.
//!
//! Weights:
//! - PM10 reduction: 30%
//! - carbon absorption: 25%
//! - thermal comfort: 25%
//! - green coverage: 20%

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod scoring_test;

pub const W_PM10: f64 = 0.30;
pub const W_CARBON: f64 = 0.25;
pub const W_THERMAL: f64 = 0.25;
pub const W_GREEN: f64 = 0.20;

/// Reference ceiling for carbon normalization, tons/year
pub const CARBON_CEILING_TONS: f64 = 5.0;

/// The four raw indicators attached to every location and zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicators {
    pub pm10_reduction: f64,
    pub carbon_absorption: f64,
    pub thermal_comfort: f64,
    pub green_coverage: f64,
}

impl Indicators {
    pub fn new(
        pm10_reduction: f64,
        carbon_absorption: f64,
        thermal_comfort: f64,
        green_coverage: f64,
    ) -> Self {
        Self {
            pm10_reduction,
            carbon_absorption,
            thermal_comfort,
            green_coverage,
        }
    }
}

/// Composite 0-100 environmental score, always derived, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GreenScore(u8);

impl GreenScore {
    /// Wrap an already-known score, clamping into range
    pub fn from_value(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Weighted composite of the four indicators.
    ///
    /// Total over all inputs: out-of-range values clamp, nothing errors.
    pub fn compute(indicators: &Indicators) -> Self {
        let normalized_carbon = normalize_carbon(indicators.carbon_absorption);
        let score = indicators.pm10_reduction * W_PM10
            + normalized_carbon * W_CARBON
            + indicators.thermal_comfort * W_THERMAL
            + indicators.green_coverage * W_GREEN;
        Self(score.clamp(0.0, 100.0).round() as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Hex marker color for the score band
    pub fn color(&self) -> &'static str {
        match self.0 {
            85..=100 => "#10b981",
            70..=84 => "#14b8a6",
            55..=69 => "#f59e0b",
            40..=54 => "#f97316",
            _ => "#ef4444",
        }
    }

    /// Letter grade for the score band
    pub fn grade(&self) -> ScoreGrade {
        let (grade, label) = match self.0 {
            85..=100 => ("A+", "Outstanding"),
            70..=84 => ("A", "Excellent"),
            55..=69 => ("B", "Good"),
            40..=54 => ("C", "Fair"),
            _ => ("D", "Needs improvement"),
        };
        ScoreGrade { grade, label }
    }
}

/// Grade with its display label, bands shared with `color()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreGrade {
    pub grade: &'static str,
    pub label: &'static str,
}

/// Scale tons/year onto 0-100 against the reference ceiling.
/// The rounded intermediate matches the original formula exactly.
fn normalize_carbon(carbon_absorption: f64) -> f64 {
    (carbon_absorption / CARBON_CEILING_TONS * 100.0)
        .clamp(0.0, 100.0)
        .round()
}
