//! Neighborhood aggregate data model.
//!
//! A [`NeighborhoodAggregate`] describes a named area with curated
//! statistics: price aggregates, livability scores, transit access and
//! amenity counts. Aggregates are maintained externally and are read-only
//! to this core; the POI synthesizer consumes their amenity data.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::property::LocalizedText;

/// Aggregate price statistics over the listings of a neighborhood.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
    /// Number of listings the statistics were computed over.
    pub property_count: u32,
    pub min_price: f64,
    pub median_price: f64,
    pub average_price: f64,
    pub max_price: f64,
}

/// Public transport access for a neighborhood.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitInfo {
    /// Whether the area has rail/metro access.
    pub has_metro: bool,
    /// Whether the area has bus access.
    pub has_bus: bool,
    /// Named stations serving the area, closest first.
    pub stations: Vec<String>,
}

/// Amenity presence for a neighborhood.
///
/// Schools, hospitals and parks are counted; shopping, restaurants and
/// beaches are curated as presence flags only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AmenityCounts {
    pub schools: u32,
    pub hospitals: u32,
    pub parks: u32,
    pub shopping: bool,
    pub restaurants: bool,
    pub beaches: bool,
}

impl AmenityCounts {
    /// Whether no amenity data is present at all.
    pub fn is_empty(&self) -> bool {
        self.schools == 0
            && self.hospitals == 0
            && self.parks == 0
            && !self.shopping
            && !self.restaurants
            && !self.beaches
    }
}

/// Externally curated description of a named area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodAggregate {
    /// Unique slug, the lookup key in the directory.
    pub slug: String,
    /// Display name.
    pub name: LocalizedText,
    /// Localized marketing description.
    pub description: LocalizedText,
    /// Geographic center of the area, if known.
    pub center: Option<GeoPoint>,
    /// Price aggregates.
    pub price_stats: PriceStats,
    /// Safety score on a 0-10 scale.
    pub safety_score: Option<f32>,
    /// Quality-of-life score on a 0-10 scale.
    pub quality_of_life_score: Option<f32>,
    /// Public transport access.
    pub transit: TransitInfo,
    /// Amenity counts and flags.
    pub amenities: AmenityCounts,
    /// Free-form demographic descriptors ("families", "students", ...).
    pub demographics: Vec<String>,
}

impl NeighborhoodAggregate {
    /// Create an empty aggregate for the given slug.
    pub fn new<S: Into<String>>(slug: S, name: LocalizedText) -> Self {
        NeighborhoodAggregate {
            slug: slug.into(),
            name,
            description: LocalizedText::new(),
            center: None,
            price_stats: PriceStats::default(),
            safety_score: None,
            quality_of_life_score: None,
            transit: TransitInfo::default(),
            amenities: AmenityCounts::default(),
            demographics: Vec::new(),
        }
    }
}
