//! Synthetic point-of-interest generation.
//!
//! Neighborhood aggregates carry amenity counts ("8 schools, 2 hospitals")
//! but no coordinates. To still draw amenity markers on a property map,
//! this module synthesizes marker positions around the property with a
//! deterministic spread: marker `i` sits at angle `i * 137.508°` (the
//! golden angle, which spaces accumulating points near-uniformly without
//! a random source) and at one of three radial magnitudes cycled by
//! `i % 3`.
//!
//! Offsets are applied directly in degrees of latitude/longitude rather
//! than along geodesics. Markers are decorative map dressing, not
//! authoritative locations; treat every synthesized coordinate as
//! illustrative only.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::neighborhood::NeighborhoodAggregate;
use crate::property::PropertyRecord;

/// The golden angle in degrees.
pub const GOLDEN_ANGLE_DEG: f64 = 137.508;

/// Per-category marker caps.
pub const MAX_SCHOOLS: u32 = 6;
pub const MAX_HOSPITALS: u32 = 3;
pub const MAX_PARKS: u32 = 4;
pub const MAX_TRANSIT_STATIONS: usize = 4;

/// Category of a synthesized map marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoiCategory {
    School,
    Hospital,
    Park,
    TransitStation,
    Shopping,
    Restaurant,
    Beach,
}

impl PoiCategory {
    /// Icon token for the map rendering layer.
    pub fn icon(&self) -> &'static str {
        match self {
            PoiCategory::School => "school",
            PoiCategory::Hospital => "hospital",
            PoiCategory::Park => "park",
            PoiCategory::TransitStation => "transit",
            PoiCategory::Shopping => "shopping",
            PoiCategory::Restaurant => "restaurant",
            PoiCategory::Beach => "beach",
        }
    }

    /// Color token for the map rendering layer.
    pub fn color(&self) -> &'static str {
        match self {
            PoiCategory::School => "#2563eb",
            PoiCategory::Hospital => "#dc2626",
            PoiCategory::Park => "#16a34a",
            PoiCategory::TransitStation => "#7c3aed",
            PoiCategory::Shopping => "#ea580c",
            PoiCategory::Restaurant => "#db2777",
            PoiCategory::Beach => "#0891b2",
        }
    }
}

/// A synthesized map marker. Never persisted; regenerate on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoiMarker {
    /// Amenity category.
    pub category: PoiCategory,
    /// Synthesized coordinate near the anchor property.
    pub point: GeoPoint,
    /// Display name ("School 1", a station name, ...).
    pub name: String,
    /// Icon token, derived from the category.
    pub icon: &'static str,
    /// Color token, derived from the category.
    pub color: &'static str,
}

/// Configuration for the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoiConfig {
    /// Base radial offset in degrees; markers sit at 1x, 2x or 3x this.
    pub base_offset_deg: f64,
}

impl PoiConfig {
    /// Tight spread for a single-property close-up view.
    pub fn close_up() -> Self {
        PoiConfig {
            base_offset_deg: 0.001,
        }
    }

    /// Wider spread for a city-level overview.
    pub fn overview() -> Self {
        PoiConfig {
            base_offset_deg: 0.0015,
        }
    }

    /// The largest radial offset any marker can receive, in degrees.
    pub fn max_offset_deg(&self) -> f64 {
        self.base_offset_deg * 3.0
    }
}

impl Default for PoiConfig {
    fn default() -> Self {
        PoiConfig::close_up()
    }
}

/// Deterministically synthesizes POI markers around a property from its
/// neighborhood's amenity aggregates.
///
/// Output depends only on the inputs and the configured base offset, so
/// results are reproducible across runs and safe to cache by input key.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoiSynthesizer {
    config: PoiConfig,
}

impl PoiSynthesizer {
    /// Create a synthesizer with the default (close-up) configuration.
    pub fn new() -> Self {
        PoiSynthesizer::default()
    }

    /// Create a synthesizer with the given configuration.
    pub fn with_config(config: PoiConfig) -> Self {
        PoiSynthesizer { config }
    }

    /// Synthesize markers for a property.
    ///
    /// Categories are generated in a fixed order (schools, hospitals,
    /// parks, transit, shopping, restaurants, beaches) with a sequential
    /// placement index running across all of them. A property without a
    /// coordinate, or a neighborhood without amenity data, yields no
    /// markers.
    pub fn synthesize(
        &self,
        property: &PropertyRecord,
        neighborhood: &NeighborhoodAggregate,
    ) -> Vec<PoiMarker> {
        let Some(anchor) = property.location else {
            return Vec::new();
        };
        let amenities = &neighborhood.amenities;
        if amenities.is_empty() && neighborhood.transit.stations.is_empty() {
            return Vec::new();
        }

        let mut markers = Vec::new();
        let mut index = 0usize;

        let mut push = |category: PoiCategory, name: String| {
            markers.push(PoiMarker {
                category,
                point: self.place(&anchor, index),
                name,
                icon: category.icon(),
                color: category.color(),
            });
            index += 1;
        };

        for i in 0..amenities.schools.min(MAX_SCHOOLS) {
            push(PoiCategory::School, format!("School {}", i + 1));
        }
        for i in 0..amenities.hospitals.min(MAX_HOSPITALS) {
            push(PoiCategory::Hospital, format!("Hospital {}", i + 1));
        }
        for i in 0..amenities.parks.min(MAX_PARKS) {
            push(PoiCategory::Park, format!("Park {}", i + 1));
        }
        for station in neighborhood
            .transit
            .stations
            .iter()
            .take(MAX_TRANSIT_STATIONS)
        {
            push(PoiCategory::TransitStation, station.clone());
        }
        if amenities.shopping {
            push(PoiCategory::Shopping, "Shopping".to_string());
        }
        if amenities.restaurants {
            push(PoiCategory::Restaurant, "Restaurants".to_string());
        }
        if amenities.beaches {
            push(PoiCategory::Beach, "Beach".to_string());
        }

        markers
    }

    /// Place the marker with the given sequential index around the anchor.
    ///
    /// Angle advances by the golden angle per index; the radius cycles
    /// through 1x, 2x, 3x the base offset. The offset is always non-zero,
    /// so a marker never lands exactly on the anchor.
    fn place(&self, anchor: &GeoPoint, index: usize) -> GeoPoint {
        let angle_deg = (index as f64 * GOLDEN_ANGLE_DEG) % 360.0;
        let radius = self.config.base_offset_deg * ((index % 3) as f64 + 1.0);
        let angle = angle_deg.to_radians();

        GeoPoint {
            lat: anchor.lat + angle.cos() * radius,
            lon: anchor.lon + angle.sin() * radius,
        }
    }
}
