use std::sync::Arc;

use log::warn;

use crate::application::dtos::ZoneScoreDto;
use greensteps_domain::location::ZoneCatalog;

/// Residential zone scores for the map overlay
pub struct ZoneQueries {
    zones: Arc<ZoneCatalog>,
}

impl ZoneQueries {
    pub fn new(zones: Arc<ZoneCatalog>) -> Self {
        Self { zones }
    }

    /// Every zone with its derived score, catalog order
    pub fn get_zone_scores(&self) -> Vec<ZoneScoreDto> {
        self.zones.iter().map(ZoneScoreDto::from).collect()
    }

    pub fn get_zone_score(&self, zone_id: &str) -> Option<ZoneScoreDto> {
        let zone = self.zones.get(zone_id);
        if zone.is_none() {
            warn!("[zone] score for unknown zone id={}", zone_id);
        }
        zone.map(ZoneScoreDto::from)
    }
}
