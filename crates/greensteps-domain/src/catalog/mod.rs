//! Reference dataset: Suwon-area parks, shelters, trails and zones
//!
//! The engines take catalogs as injected inputs; this module is the
//! bundled dataset an embedding application can hand them. Built once
//! per process, read-only afterwards.

use once_cell::sync::Lazy;

use crate::habit::{Habit, HabitCatalog};
use crate::location::{
    GeoPoint, GreenLocation, LocationCatalog, LocationType, ResidentialZone, ZoneCatalog,
};
use crate::scoring::Indicators;

/// Map fallback center (Gyeonggi provincial office)
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 37.275,
    lng: 127.010,
};

static HABITS: Lazy<HabitCatalog> = Lazy::new(|| {
    HabitCatalog::restore(vec![
        Habit::new(1, "Use a reusable tumbler", "Coffee"),
        Habit::new(2, "Take public transit", "Bus"),
        Habit::new(3, "Refuse single-use items", "ShoppingBag"),
        Habit::new(4, "Bring a shopping bag", "ShoppingBasket"),
        Habit::new(5, "Unplug idle devices", "Plug"),
        Habit::new(6, "Take the stairs", "TrendingUp"),
        Habit::new(7, "Eat one plant-based meal", "Leaf"),
        Habit::new(8, "Sort the recycling", "Recycle"),
    ])
});

static LOCATIONS: Lazy<LocationCatalog> = Lazy::new(|| {
    LocationCatalog::restore(vec![
        GreenLocation {
            id: 1,
            name: "Gwanggyo Lake Park".to_string(),
            lat: 37.283,
            lng: 127.062,
            location_type: LocationType::Park,
            score: Some(92),
            indicators: Indicators::new(85.0, 2.4, 88.0, 75.0),
        },
        GreenLocation {
            id: 2,
            name: "Ingye-dong Heat Shelter".to_string(),
            lat: 37.266,
            lng: 127.030,
            location_type: LocationType::Shelter,
            score: Some(75),
            indicators: Indicators::new(70.0, 1.2, 82.0, 45.0),
        },
        GreenLocation {
            id: 3,
            name: "Suwoncheon Trail".to_string(),
            lat: 37.263,
            lng: 127.028,
            location_type: LocationType::Trail,
            score: Some(88),
            indicators: Indicators::new(80.0, 1.8, 90.0, 65.0),
        },
        GreenLocation {
            id: 4,
            name: "Yeongtong Central Park".to_string(),
            lat: 37.257,
            lng: 127.073,
            location_type: LocationType::Park,
            score: Some(86),
            indicators: Indicators::new(82.0, 2.1, 85.0, 70.0),
        },
        GreenLocation {
            id: 5,
            name: "Yuljeon Shelter".to_string(),
            lat: 37.294,
            lng: 127.055,
            location_type: LocationType::Shelter,
            score: Some(72),
            indicators: Indicators::new(68.0, 0.9, 78.0, 40.0),
        },
        GreenLocation {
            id: 6,
            name: "Cheongmyeong Forest Trail".to_string(),
            lat: 37.272,
            lng: 127.051,
            location_type: LocationType::Trail,
            score: Some(84),
            indicators: Indicators::new(78.0, 1.6, 87.0, 62.0),
        },
        GreenLocation {
            id: 7,
            name: "Mangpo Neighborhood Park".to_string(),
            lat: 37.244,
            lng: 127.060,
            location_type: LocationType::Park,
            score: Some(80),
            indicators: Indicators::new(75.0, 1.5, 83.0, 58.0),
        },
    ])
});

static ZONES: Lazy<ZoneCatalog> = Lazy::new(|| {
    ZoneCatalog::restore(vec![
        ResidentialZone {
            id: "zone-1".to_string(),
            name: "Gwanggyo New Town, Block A".to_string(),
            center: GeoPoint {
                lat: 37.285,
                lng: 127.058,
            },
            polygon: vec![
                (37.290, 127.052),
                (37.290, 127.064),
                (37.280, 127.064),
                (37.280, 127.052),
            ],
            indicators: Indicators::new(88.0, 2.8, 90.0, 72.0),
            nearby_parks: vec!["Gwanggyo Lake Park".to_string()],
            description: "Next to the lake park, best-in-class greenery".to_string(),
        },
        ResidentialZone {
            id: "zone-2".to_string(),
            name: "Maetan-dong, Yeongtong".to_string(),
            center: GeoPoint {
                lat: 37.262,
                lng: 127.038,
            },
            polygon: vec![
                (37.268, 127.032),
                (37.268, 127.044),
                (37.256, 127.044),
                (37.256, 127.032),
            ],
            indicators: Indicators::new(72.0, 1.4, 78.0, 48.0),
            nearby_parks: vec![
                "Ingye-dong Heat Shelter".to_string(),
                "Suwoncheon Trail".to_string(),
            ],
            description: "Good stream access, mid-density housing".to_string(),
        },
        ResidentialZone {
            id: "zone-3".to_string(),
            name: "Yeongtong central commercial district".to_string(),
            center: GeoPoint {
                lat: 37.253,
                lng: 127.072,
            },
            polygon: vec![
                (37.260, 127.066),
                (37.260, 127.078),
                (37.246, 127.078),
                (37.246, 127.066),
            ],
            indicators: Indicators::new(58.0, 0.8, 65.0, 28.0),
            nearby_parks: vec!["Yeongtong Central Park".to_string()],
            description: "Dense commercial blocks, greenery needs work".to_string(),
        },
        ResidentialZone {
            id: "zone-4".to_string(),
            name: "Around Mangpo station".to_string(),
            center: GeoPoint {
                lat: 37.248,
                lng: 127.055,
            },
            polygon: vec![
                (37.254, 127.048),
                (37.254, 127.062),
                (37.242, 127.062),
                (37.242, 127.048),
            ],
            indicators: Indicators::new(65.0, 1.2, 72.0, 42.0),
            nearby_parks: vec!["Mangpo Neighborhood Park".to_string()],
            description: "Station-area development underway, more parks planned".to_string(),
        },
        ResidentialZone {
            id: "zone-5".to_string(),
            name: "Gwanggyo Techno Valley".to_string(),
            center: GeoPoint {
                lat: 37.278,
                lng: 127.048,
            },
            polygon: vec![
                (37.284, 127.042),
                (37.284, 127.054),
                (37.272, 127.054),
                (37.272, 127.042),
            ],
            indicators: Indicators::new(75.0, 1.6, 82.0, 55.0),
            nearby_parks: vec!["Cheongmyeong Forest Trail".to_string()],
            description: "Tech campus with active rooftop greening".to_string(),
        },
        ResidentialZone {
            id: "zone-6".to_string(),
            name: "Yuljeon-dong housing estate".to_string(),
            center: GeoPoint {
                lat: 37.296,
                lng: 127.050,
            },
            polygon: vec![
                (37.302, 127.044),
                (37.302, 127.056),
                (37.290, 127.056),
                (37.290, 127.044),
            ],
            indicators: Indicators::new(82.0, 2.0, 85.0, 62.0),
            nearby_parks: vec!["Yuljeon Shelter".to_string()],
            description: "New apartment blocks, well landscaped".to_string(),
        },
        ResidentialZone {
            id: "zone-7".to_string(),
            name: "Ingye-dong old town".to_string(),
            center: GeoPoint {
                lat: 37.270,
                lng: 127.025,
            },
            polygon: vec![
                (37.276, 127.018),
                (37.276, 127.032),
                (37.264, 127.032),
                (37.264, 127.018),
            ],
            indicators: Indicators::new(45.0, 0.5, 55.0, 18.0),
            nearby_parks: vec![],
            description: "Aging housing stock, regeneration candidate".to_string(),
        },
        ResidentialZone {
            id: "zone-8".to_string(),
            name: "Woncheon-dong university quarter".to_string(),
            center: GeoPoint {
                lat: 37.298,
                lng: 127.038,
            },
            polygon: vec![
                (37.304, 127.032),
                (37.304, 127.044),
                (37.292, 127.044),
                (37.292, 127.032),
            ],
            indicators: Indicators::new(70.0, 1.3, 75.0, 50.0),
            nearby_parks: vec![],
            description: "Campus green space within reach".to_string(),
        },
    ])
});

pub fn reference_habits() -> &'static HabitCatalog {
    &HABITS
}

pub fn reference_locations() -> &'static LocationCatalog {
    &LOCATIONS
}

pub fn reference_zones() -> &'static ZoneCatalog {
    &ZONES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalogs_have_the_dataset_cardinalities() {
        assert_eq!(reference_habits().len(), 8);
        assert_eq!(reference_locations().len(), 7);
        assert_eq!(reference_zones().iter().count(), 8);
    }

    #[test]
    fn reference_data_passes_the_validating_constructors() {
        let habits: Vec<_> = reference_habits().iter().cloned().collect();
        assert!(HabitCatalog::new(habits).is_ok());

        let locations: Vec<_> = reference_locations().iter().cloned().collect();
        assert!(LocationCatalog::new(locations).is_ok());

        let zones: Vec<_> = reference_zones().iter().cloned().collect();
        assert!(ZoneCatalog::new(zones).is_ok());
    }

    #[test]
    fn curated_location_scores_stay_in_range() {
        for location in reference_locations().iter() {
            let score = location.effective_score().value();
            assert!(score <= 100, "{} out of range", location.name);
        }
    }

    #[test]
    fn top_zone_scores_above_the_old_town() {
        let best = reference_zones().get("zone-1").expect("zone-1");
        let worst = reference_zones().get("zone-7").expect("zone-7");
        assert!(best.score() > worst.score());
    }
}
