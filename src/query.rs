//! Search query specification.
//!
//! A [`SearchQuery`] bundles every filter the search engine understands:
//! free text, categorical equality, price range and the two spatial
//! filters. All filters are optional; an empty query matches everything.

use serde::{Deserialize, Serialize};

use crate::geo::{GeoBoundingBox, GeoPoint};
use crate::property::PropertyType;

/// Default page size when the caller does not specify one.
pub const DEFAULT_LIMIT: usize = 20;

/// Ordering applied to filtered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Keep the order produced by the external index. Explicitly a no-op:
    /// this core has no scoring model of its own.
    #[default]
    Relevance,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Closest to the query center first. Requires [`SearchQuery::center`].
    Distance,
}

/// A filter specification for property search.
///
/// The two spatial filters are mutually exclusive in effect: when both a
/// bounding box and a center/radius pair are set, the bounding box wins.
/// The center also serves as the origin for [`SortPolicy::Distance`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query, matched case-insensitively against title,
    /// description, city and country.
    pub text: Option<String>,
    /// Exact property-type filter.
    pub property_type: Option<PropertyType>,
    /// Case-insensitive substring filter on the country field.
    pub country: Option<String>,
    /// Case-insensitive substring filter on the city field.
    pub city: Option<String>,
    /// Minimum price, inclusive.
    pub min_price: Option<f64>,
    /// Maximum price, inclusive.
    pub max_price: Option<f64>,
    /// Rectangular spatial filter; takes priority over center/radius.
    pub bounds: Option<GeoBoundingBox>,
    /// Center point for the radius filter and for distance sorting.
    pub center: Option<GeoPoint>,
    /// Radius in kilometers around `center`.
    pub radius_km: Option<f64>,
    /// Sort policy for the result set.
    pub sort: SortPolicy,
    /// Page size.
    pub limit: usize,
    /// Page start offset.
    pub offset: usize,
}

impl SearchQuery {
    /// Create an empty query with the default page size.
    pub fn new() -> Self {
        SearchQuery {
            limit: DEFAULT_LIMIT,
            ..Default::default()
        }
    }

    /// Set the free-text query.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Filter by property type.
    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    /// Filter by country.
    pub fn with_country<S: Into<String>>(mut self, country: S) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Filter by city.
    pub fn with_city<S: Into<String>>(mut self, city: S) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the inclusive price range. Either bound may be `None`.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set the bounding-box spatial filter.
    pub fn with_bounds(mut self, bounds: GeoBoundingBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Set the center/radius spatial filter.
    pub fn with_radius(mut self, center: GeoPoint, radius_km: f64) -> Self {
        self.center = Some(center);
        self.radius_km = Some(radius_km);
        self
    }

    /// Set a center point without a radius (for distance sorting).
    pub fn with_center(mut self, center: GeoPoint) -> Self {
        self.center = Some(center);
        self
    }

    /// Set the sort policy.
    pub fn with_sort(mut self, sort: SortPolicy) -> Self {
        self.sort = sort;
        self
    }

    /// Set the pagination window.
    pub fn with_page(mut self, limit: usize, offset: usize) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    /// Whether the query has no filtering effect at all.
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_none()
            && self.property_type.is_none()
            && self.country.is_none()
            && self.city.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.bounds.is_none()
            && !(self.center.is_some() && self.radius_km.is_some())
    }
}
