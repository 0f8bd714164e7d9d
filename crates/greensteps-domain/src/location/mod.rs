//! Green locations and residential zones
//!
//! Locations are the unlockable map entries (parks, heat shelters,
//! trails). Zones are residential polygons scored purely from their
//! indicators. Both catalogs are read-only inputs supplied at startup.

use serde::{Deserialize, Serialize};

use crate::scoring::{GreenScore, Indicators};
use crate::shared::DomainError;

pub type LocationId = u32;

/// Location category, also the recommendation filter axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    #[serde(rename = "PARK")]
    Park,
    #[serde(rename = "SHELTER")]
    Shelter,
    #[serde(rename = "TRAIL")]
    Trail,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Park => "PARK",
            LocationType::Shelter => "SHELTER",
            LocationType::Trail => "TRAIL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A map location with its indicator set.
///
/// `score` is the curated display score from the dataset; it wins over
/// the formula when present. Entries without one fall back to
/// `GreenScore::compute`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreenLocation {
    pub id: LocationId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(rename = "details")]
    pub indicators: Indicators,
}

impl GreenLocation {
    pub fn effective_score(&self) -> GreenScore {
        match self.score {
            Some(value) => GreenScore::from_value(value),
            None => GreenScore::compute(&self.indicators),
        }
    }
}

/// Residential zone polygon with environmental indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentialZone {
    pub id: String,
    pub name: String,
    pub center: GeoPoint,
    /// Vertices as (lat, lng) pairs, clockwise
    pub polygon: Vec<(f64, f64)>,
    #[serde(rename = "details")]
    pub indicators: Indicators,
    pub nearby_parks: Vec<String>,
    pub description: String,
}

impl ResidentialZone {
    /// Zones carry no curated score, this is always the formula output
    pub fn score(&self) -> GreenScore {
        GreenScore::compute(&self.indicators)
    }
}

/// Read-only location catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCatalog {
    locations: Vec<GreenLocation>,
}

impl LocationCatalog {
    pub fn new(locations: Vec<GreenLocation>) -> Result<Self, DomainError> {
        let mut seen = std::collections::BTreeSet::new();
        for location in &locations {
            if !seen.insert(location.id) {
                return Err(DomainError::Validation(format!(
                    "Duplicate location id in catalog: {}",
                    location.id
                )));
            }
        }
        Ok(Self { locations })
    }

    /// Rebuild from already-trusted data, skipping validation
    pub fn restore(locations: Vec<GreenLocation>) -> Self {
        Self { locations }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GreenLocation> {
        self.locations.iter()
    }

    pub fn get(&self, id: LocationId) -> Option<&GreenLocation> {
        self.locations.iter().find(|loc| loc.id == id)
    }
}

/// Read-only residential zone catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCatalog {
    zones: Vec<ResidentialZone>,
}

impl ZoneCatalog {
    pub fn new(zones: Vec<ResidentialZone>) -> Result<Self, DomainError> {
        let mut seen = std::collections::BTreeSet::new();
        for zone in &zones {
            if !seen.insert(zone.id.clone()) {
                return Err(DomainError::Validation(format!(
                    "Duplicate zone id in catalog: {}",
                    zone.id
                )));
            }
        }
        Ok(Self { zones })
    }

    /// Rebuild from already-trusted data, skipping validation
    pub fn restore(zones: Vec<ResidentialZone>) -> Self {
        Self { zones }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResidentialZone> {
        self.zones.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ResidentialZone> {
        self.zones.iter().find(|zone| zone.id == id)
    }
}
