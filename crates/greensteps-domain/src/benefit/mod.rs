//! Visitor-facing benefit copy for green locations
//!
//! Turns raw indicators into the text blocks the location detail surface
//! shows: air quality, carbon offset figures, activity suggestions and an
//! overall health score.

use serde::Serialize;

use crate::location::LocationType;
use crate::scoring::Indicators;

/// Air quality band for the PM10 indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitLevel {
    Excellent,
    Good,
    Normal,
}

/// PM10 explainer block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pm10Benefit {
    pub level: BenefitLevel,
    pub title: &'static str,
    pub description: &'static str,
    pub health_tip: &'static str,
    pub icon: &'static str,
}

/// Yearly carbon offset translated into relatable figures
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonContribution {
    pub co2_equivalent: String,
    pub person_equivalent: String,
    pub description: String,
    pub impact: String,
}

/// One suggested activity with its time window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecommendation {
    pub activity: &'static str,
    pub time: &'static str,
    pub benefit: &'static str,
}

/// Everything the detail surface needs in one block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallBenefits {
    pub health_score: u8,
    pub health_level: &'static str,
    pub health_color: &'static str,
    pub pm10_benefit: Pm10Benefit,
    pub carbon_contribution: CarbonContribution,
    pub activities: Vec<ActivityRecommendation>,
}

// One ton of carbon binds 3.67 tons of CO2
const CO2_PER_CARBON_TON: f64 = 3.67;
// Average yearly carbon footprint per person, in tons
const YEARLY_TONS_PER_PERSON: f64 = 12.0;

/// Benefit copy rules
/// Pure domain logic without infrastructure dependencies
pub struct BenefitCalculator;

impl BenefitCalculator {
    pub fn pm10_benefit(pm10_reduction: f64) -> Pm10Benefit {
        if pm10_reduction >= 80.0 {
            Pm10Benefit {
                level: BenefitLevel::Excellent,
                title: "Excellent air quality",
                description: "PM10 here runs about 30% below the city average",
                health_tip: "Great for your lungs. Perfect for a walk or a workout!",
                icon: "lungs",
            }
        } else if pm10_reduction >= 70.0 {
            Pm10Benefit {
                level: BenefitLevel::Good,
                title: "Good air quality",
                description: "PM10 runs about 20% below the city average",
                health_tip: "An environment that goes easy on your lungs.",
                icon: "wind",
            }
        } else {
            Pm10Benefit {
                level: BenefitLevel::Normal,
                title: "Typical air quality",
                description: "About the same air as the rest of the city",
                health_tip: "Wearing a mask is recommended.",
                icon: "shield",
            }
        }
    }

    pub fn carbon_contribution(carbon_absorption: f64) -> CarbonContribution {
        let co2_equivalent = carbon_absorption * CO2_PER_CARBON_TON;
        let person_equivalent = carbon_absorption / YEARLY_TONS_PER_PERSON * 100.0;

        CarbonContribution {
            co2_equivalent: format!("{:.1}", co2_equivalent),
            person_equivalent: format!("{:.1}", person_equivalent),
            description: format!(
                "This green space absorbs {} tons of carbon a year",
                carbon_absorption
            ),
            impact: format!(
                "Offsets the yearly emissions of about {:.1} people",
                person_equivalent
            ),
        }
    }

    /// Comfort-driven suggestions plus one entry for the location type
    pub fn activity_recommendations(
        thermal_comfort: f64,
        location_type: LocationType,
    ) -> Vec<ActivityRecommendation> {
        let mut recommendations = Vec::new();

        if thermal_comfort >= 85.0 {
            recommendations.push(ActivityRecommendation {
                activity: "Outdoor exercise",
                time: "6-10am, 6-8pm",
                benefit: "Cool, comfortable conditions for a workout",
            });
            recommendations.push(ActivityRecommendation {
                activity: "Picnic",
                time: "10am-4pm",
                benefit: "Perfect for resting in the shade",
            });
        } else if thermal_comfort >= 75.0 {
            recommendations.push(ActivityRecommendation {
                activity: "Walk",
                time: "Morning or afternoon",
                benefit: "Comfortable conditions for an easy walk",
            });
        }

        recommendations.push(match location_type {
            LocationType::Park => ActivityRecommendation {
                activity: "Family outing",
                time: "All day",
                benefit: "Plenty of room to spend time with the kids",
            },
            LocationType::Trail => ActivityRecommendation {
                activity: "Jogging or walking",
                time: "6-9am",
                benefit: "Fresh air to exercise in",
            },
            LocationType::Shelter => ActivityRecommendation {
                activity: "Beat the heat",
                time: "1-5pm in summer",
                benefit: "A cooling shelter to rest in",
            },
        });

        recommendations
    }

    /// Health score weights PM10 at half, comfort and greenery the rest
    pub fn overall_benefits(indicators: &Indicators, location_type: LocationType) -> OverallBenefits {
        let health_score = (indicators.pm10_reduction * 0.5
            + indicators.thermal_comfort * 0.3
            + indicators.green_coverage * 0.2)
            .round() as u8;

        let (health_level, health_color) = if health_score >= 85 {
            ("Very good", "text-emerald-600")
        } else if health_score >= 75 {
            ("Good", "text-blue-600")
        } else {
            ("Average", "text-gray-600")
        };

        OverallBenefits {
            health_score,
            health_level,
            health_color,
            pm10_benefit: Self::pm10_benefit(indicators.pm10_reduction),
            carbon_contribution: Self::carbon_contribution(indicators.carbon_absorption),
            activities: Self::activity_recommendations(indicators.thermal_comfort, location_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pm10_bands_are_lower_inclusive() {
        assert_eq!(BenefitCalculator::pm10_benefit(85.0).level, BenefitLevel::Excellent);
        assert_eq!(BenefitCalculator::pm10_benefit(80.0).level, BenefitLevel::Excellent);
        assert_eq!(BenefitCalculator::pm10_benefit(79.9).level, BenefitLevel::Good);
        assert_eq!(BenefitCalculator::pm10_benefit(70.0).level, BenefitLevel::Good);
        assert_eq!(BenefitCalculator::pm10_benefit(69.9).level, BenefitLevel::Normal);
        assert_eq!(BenefitCalculator::pm10_benefit(85.0).icon, "lungs");
    }

    #[test]
    fn carbon_figures_format_to_one_decimal() {
        let contribution = BenefitCalculator::carbon_contribution(2.4);
        assert_eq!(contribution.co2_equivalent, "8.8");
        assert_eq!(contribution.person_equivalent, "20.0");
        assert_eq!(
            contribution.description,
            "This green space absorbs 2.4 tons of carbon a year"
        );
        assert_eq!(
            contribution.impact,
            "Offsets the yearly emissions of about 20.0 people"
        );
    }

    #[test]
    fn whole_ton_counts_print_without_a_fraction() {
        let contribution = BenefitCalculator::carbon_contribution(3.0);
        assert_eq!(contribution.co2_equivalent, "11.0");
        assert_eq!(
            contribution.description,
            "This green space absorbs 3 tons of carbon a year"
        );
    }

    #[test]
    fn comfortable_weather_doubles_the_suggestions() {
        let rows = BenefitCalculator::activity_recommendations(88.0, LocationType::Park);
        let names: Vec<&str> = rows.iter().map(|r| r.activity).collect();
        assert_eq!(names, vec!["Outdoor exercise", "Picnic", "Family outing"]);

        let rows = BenefitCalculator::activity_recommendations(78.0, LocationType::Trail);
        let names: Vec<&str> = rows.iter().map(|r| r.activity).collect();
        assert_eq!(names, vec!["Walk", "Jogging or walking"]);

        let rows = BenefitCalculator::activity_recommendations(70.0, LocationType::Shelter);
        let names: Vec<&str> = rows.iter().map(|r| r.activity).collect();
        assert_eq!(names, vec!["Beat the heat"]);
    }

    #[test]
    fn health_score_weights_and_bands() {
        // 85*0.5 + 88*0.3 + 75*0.2 = 83.9
        let lake_park = Indicators::new(85.0, 2.4, 88.0, 75.0);
        let benefits = BenefitCalculator::overall_benefits(&lake_park, LocationType::Park);
        assert_eq!(benefits.health_score, 84);
        assert_eq!(benefits.health_level, "Good");

        let pristine = Indicators::new(90.0, 2.0, 90.0, 90.0);
        let benefits = BenefitCalculator::overall_benefits(&pristine, LocationType::Park);
        assert_eq!(benefits.health_score, 90);
        assert_eq!(benefits.health_level, "Very good");
        assert_eq!(benefits.health_color, "text-emerald-600");

        let modest = Indicators::new(68.0, 0.9, 78.0, 40.0);
        let benefits = BenefitCalculator::overall_benefits(&modest, LocationType::Shelter);
        assert_eq!(benefits.health_score, 65);
        assert_eq!(benefits.health_level, "Average");
    }

    #[test]
    fn overall_block_nests_the_three_sections() {
        let indicators = Indicators::new(82.0, 2.1, 85.0, 70.0);
        let benefits = BenefitCalculator::overall_benefits(&indicators, LocationType::Park);

        assert_eq!(benefits.pm10_benefit.level, BenefitLevel::Excellent);
        assert_eq!(benefits.carbon_contribution.co2_equivalent, "7.7");
        assert_eq!(benefits.activities.len(), 3);

        let json = serde_json::to_value(&benefits).unwrap();
        assert!(json.get("healthScore").is_some());
        assert!(json.get("pm10Benefit").is_some());
        assert!(json.get("carbonContribution").is_some());
    }
}
