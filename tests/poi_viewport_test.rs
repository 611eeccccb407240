//! POI synthesis and viewport fitting over a realistic neighborhood.

use cadastre::geo::GeoPoint;
use cadastre::map::{MapBoundsCalculator, ViewportConfig};
use cadastre::neighborhood::{AmenityCounts, NeighborhoodAggregate, TransitInfo};
use cadastre::poi::{MAX_SCHOOLS, PoiCategory, PoiConfig, PoiSynthesizer};
use cadastre::property::{LocalizedText, PropertyRecord};

fn marais() -> NeighborhoodAggregate {
    let mut hood = NeighborhoodAggregate::new("marais", LocalizedText::with("en", "Le Marais"));
    hood.center = Some(GeoPoint::new(48.8597, 2.3622).unwrap());
    hood.amenities = AmenityCounts {
        schools: 8,
        hospitals: 2,
        parks: 3,
        ..Default::default()
    };
    hood.transit = TransitInfo {
        has_metro: true,
        has_bus: true,
        stations: vec!["Saint-Paul".to_string(), "Hôtel de Ville".to_string()],
    };
    hood
}

fn property() -> PropertyRecord {
    PropertyRecord::builder("prop-001")
        .title("en", "Apartment in the Marais")
        .location(GeoPoint::new(48.8589, 2.3571).unwrap())
        .neighborhood("marais", LocalizedText::with("en", "Le Marais"))
        .build()
}

#[test]
fn counted_amenities_cap_and_sum() {
    let markers = PoiSynthesizer::new().synthesize(&property(), &marais());

    let count = |category: PoiCategory| {
        markers
            .iter()
            .filter(|marker| marker.category == category)
            .count()
    };

    // 8 schools clamp to the cap; hospitals, parks and the two named
    // stations pass through unclamped.
    assert_eq!(count(PoiCategory::School), MAX_SCHOOLS as usize);
    assert_eq!(count(PoiCategory::Hospital), 2);
    assert_eq!(count(PoiCategory::Park), 3);
    assert_eq!(count(PoiCategory::TransitStation), 2);
    assert_eq!(markers.len(), MAX_SCHOOLS as usize + 2 + 3 + 2);
}

#[test]
fn synthesis_is_reproducible() {
    let synthesizer = PoiSynthesizer::new();
    let first = synthesizer.synthesize(&property(), &marais());
    let second = synthesizer.synthesize(&property(), &marais());

    assert_eq!(first, second);
}

#[test]
fn no_marker_lands_on_the_anchor() {
    let anchor = property().location.unwrap();
    let markers = PoiSynthesizer::new().synthesize(&property(), &marais());

    assert!(!markers.is_empty());
    for marker in &markers {
        assert_ne!(marker.point, anchor);
    }
}

#[test]
fn markers_respect_the_configured_spread() {
    let config = PoiConfig::close_up();
    let anchor = property().location.unwrap();
    let markers = PoiSynthesizer::with_config(config).synthesize(&property(), &marais());

    for marker in &markers {
        assert!((marker.point.lat - anchor.lat).abs() <= config.max_offset_deg() + 1e-12);
        assert!((marker.point.lon - anchor.lon).abs() <= config.max_offset_deg() + 1e-12);
    }
}

#[test]
fn category_tokens_are_consistent() {
    let markers = PoiSynthesizer::new().synthesize(&property(), &marais());
    for marker in &markers {
        assert_eq!(marker.icon, marker.category.icon());
        assert_eq!(marker.color, marker.category.color());
    }
}

#[test]
fn viewport_contains_property_markers_and_center() {
    let property = property();
    let hood = marais();
    let markers = PoiSynthesizer::new().synthesize(&property, &hood);

    let viewport = MapBoundsCalculator::new().fit_property_scene(&property, &markers, Some(&hood));

    let mut points = vec![property.location.unwrap(), hood.center.unwrap()];
    points.extend(markers.iter().map(|marker| marker.point));

    for point in points {
        assert!(point.lat >= viewport.min_lat && point.lat <= viewport.max_lat);
        assert!(point.lon >= viewport.min_lon && point.lon <= viewport.max_lon);
    }
}

#[test]
fn empty_coordinate_set_yields_the_configured_fallback() {
    let paris = GeoPoint::new(48.85, 2.35).unwrap();
    let calculator = MapBoundsCalculator::with_config(ViewportConfig::city(paris));
    let viewport = calculator.compute_bounds(&[]);

    assert_eq!(viewport.center(), paris);
    let (lat_span, lon_span) = viewport.spans();
    assert!(lat_span > 0.0 && lon_span > 0.0);
}

#[test]
fn single_coordinate_viewport_has_padding() {
    let point = GeoPoint::new(48.85, 2.35).unwrap();
    let viewport = MapBoundsCalculator::new().compute_bounds(&[point]);

    let (lat_span, lon_span) = viewport.spans();
    assert!(lat_span > 0.0 && lon_span > 0.0);
    let center = viewport.center();
    assert!((center.lat - point.lat).abs() < 1e-12);
    assert!((center.lon - point.lon).abs() < 1e-12);
}
