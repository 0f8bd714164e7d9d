use super::*;

#[test]
fn weights_sum_to_one() {
    let sum = W_PM10 + W_CARBON + W_THERMAL + W_GREEN;
    assert!((sum - 1.0).abs() < f64::EPSILON);
}

#[test]
fn reference_indicators_score_75() {
    // pm10 85, carbon 2.4 t/y (normalizes to 48), thermal 88, green 75
    // 85*0.30 + 48*0.25 + 88*0.25 + 75*0.20 = 74.5 -> 75
    let indicators = Indicators::new(85.0, 2.4, 88.0, 75.0);
    assert_eq!(GreenScore::compute(&indicators).value(), 75);
}

#[test]
fn perfect_indicators_hit_the_ceiling() {
    let indicators = Indicators::new(100.0, 5.0, 100.0, 100.0);
    assert_eq!(GreenScore::compute(&indicators).value(), 100);
}

#[test]
fn zero_indicators_score_zero() {
    let indicators = Indicators::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(GreenScore::compute(&indicators).value(), 0);
}

#[test]
fn out_of_range_inputs_clamp_instead_of_failing() {
    // Carbon far beyond the ceiling saturates at 100 before weighting
    let high = Indicators::new(150.0, 40.0, 120.0, 110.0);
    assert_eq!(GreenScore::compute(&high).value(), 100);

    let negative = Indicators::new(-50.0, -3.0, -10.0, -20.0);
    assert_eq!(GreenScore::compute(&negative).value(), 0);
}

#[test]
fn score_is_monotone_in_each_indicator() {
    let base = Indicators::new(50.0, 2.0, 50.0, 50.0);
    let base_score = GreenScore::compute(&base).value();

    let bumps = [
        Indicators::new(90.0, 2.0, 50.0, 50.0),
        Indicators::new(50.0, 4.5, 50.0, 50.0),
        Indicators::new(50.0, 2.0, 90.0, 50.0),
        Indicators::new(50.0, 2.0, 50.0, 90.0),
    ];
    for bumped in bumps {
        assert!(
            GreenScore::compute(&bumped).value() >= base_score,
            "raising an indicator must never lower the score: {:?}",
            bumped
        );
    }
}

#[test]
fn color_bands_are_lower_inclusive() {
    assert_eq!(GreenScore::from_value(85).color(), "#10b981");
    assert_eq!(GreenScore::from_value(84).color(), "#14b8a6");
    assert_eq!(GreenScore::from_value(70).color(), "#14b8a6");
    assert_eq!(GreenScore::from_value(69).color(), "#f59e0b");
    assert_eq!(GreenScore::from_value(55).color(), "#f59e0b");
    assert_eq!(GreenScore::from_value(54).color(), "#f97316");
    assert_eq!(GreenScore::from_value(40).color(), "#f97316");
    assert_eq!(GreenScore::from_value(39).color(), "#ef4444");
    assert_eq!(GreenScore::from_value(0).color(), "#ef4444");
}

#[test]
fn grade_bands_match_color_bands() {
    assert_eq!(GreenScore::from_value(92).grade().grade, "A+");
    assert_eq!(GreenScore::from_value(85).grade().grade, "A+");
    assert_eq!(GreenScore::from_value(77).grade().grade, "A");
    assert_eq!(GreenScore::from_value(60).grade().grade, "B");
    assert_eq!(GreenScore::from_value(45).grade().grade, "C");
    assert_eq!(GreenScore::from_value(12).grade().grade, "D");
    assert_eq!(GreenScore::from_value(12).grade().label, "Needs improvement");
}

#[test]
fn from_value_clamps_above_100() {
    assert_eq!(GreenScore::from_value(250).value(), 100);
}

#[test]
fn indicators_serialize_with_camel_case_keys() {
    let indicators = Indicators::new(85.0, 2.4, 88.0, 75.0);
    let json = serde_json::to_value(&indicators).expect("serialize");
    assert_eq!(json["pm10Reduction"], 85.0);
    assert_eq!(json["carbonAbsorption"], 2.4);
    assert_eq!(json["thermalComfort"], 88.0);
    assert_eq!(json["greenCoverage"], 75.0);
}

#[test]
fn computing_twice_yields_identical_scores() {
    let indicators = Indicators::new(78.0, 1.6, 87.0, 62.0);
    assert_eq!(
        GreenScore::compute(&indicators),
        GreenScore::compute(&indicators)
    );
}
