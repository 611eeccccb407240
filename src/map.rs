//! Map viewport fitting.
//!
//! Given the coordinates a map should show (the property, its synthesized
//! POI markers, the neighborhood center), [`MapBoundsCalculator`] produces
//! a padded bounding region plus a zoom ceiling so the rendering layer can
//! auto-fit its viewport without ever zooming unreasonably tight on a
//! single marker.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::neighborhood::NeighborhoodAggregate;
use crate::poi::PoiMarker;
use crate::property::PropertyRecord;

/// A bounding region for a map viewport, with a zoom ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
    /// Maximum zoom level the renderer should apply when fitting.
    pub max_zoom: u8,
}

impl MapViewport {
    /// Center of the viewport.
    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lat: (self.min_lat + self.max_lat) / 2.0,
            lon: (self.min_lon + self.max_lon) / 2.0,
        }
    }

    /// Latitude and longitude spans in degrees.
    pub fn spans(&self) -> (f64, f64) {
        (self.max_lat - self.min_lat, self.max_lon - self.min_lon)
    }
}

/// Configuration for viewport fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Padding margin added on every side, in degrees.
    pub padding_deg: f64,
    /// Zoom ceiling passed through to the viewport.
    pub max_zoom: u8,
    /// Center of the fallback viewport used when no coordinates are given.
    pub fallback_center: GeoPoint,
    /// Half-span of the fallback viewport, in degrees.
    pub fallback_half_span_deg: f64,
}

impl ViewportConfig {
    /// Fallback to a whole-world view.
    pub fn world() -> Self {
        ViewportConfig {
            padding_deg: 0.01,
            max_zoom: 15,
            fallback_center: GeoPoint { lat: 0.0, lon: 0.0 },
            fallback_half_span_deg: 60.0,
        }
    }

    /// Fallback to a city view centered on the given point.
    pub fn city(fallback_center: GeoPoint) -> Self {
        ViewportConfig {
            padding_deg: 0.01,
            max_zoom: 15,
            fallback_center,
            fallback_half_span_deg: 0.1,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportConfig::world()
    }
}

/// Computes a viewport containing a set of coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapBoundsCalculator {
    config: ViewportConfig,
}

impl MapBoundsCalculator {
    /// Create a calculator with the default (world-fallback) configuration.
    pub fn new() -> Self {
        MapBoundsCalculator::default()
    }

    /// Create a calculator with the given configuration.
    pub fn with_config(config: ViewportConfig) -> Self {
        MapBoundsCalculator { config }
    }

    /// Compute a padded viewport containing every given coordinate.
    ///
    /// Bounds start degenerate at the first coordinate and are extended
    /// per point; the padding margin then guarantees a non-zero span even
    /// for a single coordinate. Zero coordinates yield the configured
    /// fallback viewport.
    pub fn compute_bounds(&self, points: &[GeoPoint]) -> MapViewport {
        let Some(first) = points.first() else {
            return self.fallback();
        };

        let mut min_lat = first.lat;
        let mut max_lat = first.lat;
        let mut min_lon = first.lon;
        let mut max_lon = first.lon;

        for point in &points[1..] {
            min_lat = min_lat.min(point.lat);
            max_lat = max_lat.max(point.lat);
            min_lon = min_lon.min(point.lon);
            max_lon = max_lon.max(point.lon);
        }

        MapViewport {
            min_lat: min_lat - self.config.padding_deg,
            max_lat: max_lat + self.config.padding_deg,
            min_lon: min_lon - self.config.padding_deg,
            max_lon: max_lon + self.config.padding_deg,
            max_zoom: self.config.max_zoom,
        }
    }

    /// Fit a property-page scene: the property itself, its synthesized
    /// markers and the neighborhood center when known.
    pub fn fit_property_scene(
        &self,
        property: &PropertyRecord,
        markers: &[PoiMarker],
        neighborhood: Option<&NeighborhoodAggregate>,
    ) -> MapViewport {
        let mut points = Vec::with_capacity(markers.len() + 2);
        if let Some(location) = property.location {
            points.push(location);
        }
        points.extend(markers.iter().map(|marker| marker.point));
        if let Some(center) = neighborhood.and_then(|hood| hood.center) {
            points.push(center);
        }

        self.compute_bounds(&points)
    }

    fn fallback(&self) -> MapViewport {
        let center = self.config.fallback_center;
        let half_span = self.config.fallback_half_span_deg;
        MapViewport {
            min_lat: center.lat - half_span,
            max_lat: center.lat + half_span,
            min_lon: center.lon - half_span,
            max_lon: center.lon + half_span,
            max_zoom: self.config.max_zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_fallback_viewport() {
        let paris = GeoPoint::new(48.8566, 2.3522).unwrap();
        let calculator = MapBoundsCalculator::with_config(ViewportConfig::city(paris));
        let viewport = calculator.compute_bounds(&[]);

        assert_eq!(viewport.center(), paris);
        let (lat_span, lon_span) = viewport.spans();
        assert_eq!(lat_span, 0.2);
        assert_eq!(lon_span, 0.2);
    }

    #[test]
    fn test_single_point_gets_padding() {
        let point = GeoPoint::new(48.85, 2.35).unwrap();
        let viewport = MapBoundsCalculator::new().compute_bounds(&[point]);

        let center = viewport.center();
        assert!((center.lat - point.lat).abs() < 1e-12);
        assert!((center.lon - point.lon).abs() < 1e-12);

        let (lat_span, lon_span) = viewport.spans();
        assert!(lat_span > 0.0);
        assert!(lon_span > 0.0);
    }

    #[test]
    fn test_bounds_contain_every_point() {
        let points = vec![
            GeoPoint::new(48.85, 2.35).unwrap(),
            GeoPoint::new(48.87, 2.30).unwrap(),
            GeoPoint::new(48.83, 2.40).unwrap(),
        ];
        let viewport = MapBoundsCalculator::new().compute_bounds(&points);

        for point in &points {
            assert!(point.lat >= viewport.min_lat && point.lat <= viewport.max_lat);
            assert!(point.lon >= viewport.min_lon && point.lon <= viewport.max_lon);
        }
        assert_eq!(viewport.max_zoom, 15);
    }

    #[test]
    fn test_fit_property_scene_uses_all_sources() {
        use crate::neighborhood::AmenityCounts;
        use crate::poi::PoiSynthesizer;
        use crate::property::LocalizedText;

        let property = PropertyRecord::builder("p")
            .location(GeoPoint::new(48.8566, 2.3522).unwrap())
            .build();
        let mut hood =
            NeighborhoodAggregate::new("marais", LocalizedText::with("en", "Le Marais"));
        hood.center = Some(GeoPoint::new(48.8597, 2.3622).unwrap());
        hood.amenities = AmenityCounts {
            schools: 2,
            ..Default::default()
        };

        let markers = PoiSynthesizer::new().synthesize(&property, &hood);
        let viewport =
            MapBoundsCalculator::new().fit_property_scene(&property, &markers, Some(&hood));

        // The neighborhood center is the easternmost point; it must be inside.
        assert!(viewport.max_lon >= 2.3622);
        assert!(viewport.min_lat <= 48.8566);
    }

    #[test]
    fn test_scene_without_any_coordinates_falls_back() {
        let property = PropertyRecord::builder("p").build();
        let viewport = MapBoundsCalculator::new().fit_property_scene(&property, &[], None);
        assert_eq!(viewport.center(), GeoPoint { lat: 0.0, lon: 0.0 });
    }
}
