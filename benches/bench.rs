use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cadastre::geo::GeoPoint;
use cadastre::neighborhood::{AmenityCounts, NeighborhoodAggregate, TransitInfo};
use cadastre::poi::PoiSynthesizer;
use cadastre::property::{LocalizedText, PropertyRecord, PropertyType};
use cadastre::query::{SearchQuery, SortPolicy};
use cadastre::search::SearchEngine;

fn generate_records(count: usize) -> Vec<PropertyRecord> {
    let cities = ["Paris", "Lyon", "Marseille", "Nice", "Bordeaux"];
    let types = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Villa,
        PropertyType::Land,
    ];

    (0..count)
        .map(|i| {
            let lat = 42.0 + (i % 700) as f64 * 0.01;
            let lon = -1.0 + (i % 600) as f64 * 0.01;
            PropertyRecord::builder(format!("prop-{i:06}"))
                .title("en", format!("Listing {i}"))
                .property_type(types[i % types.len()])
                .price(80_000.0 + (i % 500) as f64 * 4_000.0, "EUR")
                .location(GeoPoint::new(lat, lon).unwrap())
                .address(cities[i % cities.len()], "France")
                .build()
        })
        .collect()
}

fn bench_search_pipeline(c: &mut Criterion) {
    let records = generate_records(10_000);
    let engine = SearchEngine::new();

    let mut group = c.benchmark_group("search_pipeline");

    group.bench_function("city_filter", |b| {
        let query = SearchQuery::new().with_city("Paris");
        b.iter(|| black_box(engine.search(black_box(&records), &query).unwrap()))
    });

    group.bench_function("radius_filter_price_sort", |b| {
        let center = GeoPoint::new(45.0, 1.5).unwrap();
        let query = SearchQuery::new()
            .with_radius(center, 150.0)
            .with_sort(SortPolicy::PriceAsc);
        b.iter(|| black_box(engine.search(black_box(&records), &query).unwrap()))
    });

    group.bench_function("distance_sort", |b| {
        let center = GeoPoint::new(45.0, 1.5).unwrap();
        let query = SearchQuery::new()
            .with_center(center)
            .with_sort(SortPolicy::Distance);
        b.iter(|| black_box(engine.search(black_box(&records), &query).unwrap()))
    });

    group.finish();
}

fn bench_poi_synthesis(c: &mut Criterion) {
    let property = PropertyRecord::builder("prop-0")
        .location(GeoPoint::new(48.8566, 2.3522).unwrap())
        .build();
    let mut hood = NeighborhoodAggregate::new("bench", LocalizedText::with("en", "Bench"));
    hood.amenities = AmenityCounts {
        schools: 6,
        hospitals: 3,
        parks: 4,
        shopping: true,
        restaurants: true,
        beaches: true,
    };
    hood.transit = TransitInfo {
        has_metro: true,
        has_bus: true,
        stations: vec![
            "North".to_string(),
            "South".to_string(),
            "East".to_string(),
            "West".to_string(),
        ],
    };

    let synthesizer = PoiSynthesizer::new();
    c.bench_function("poi_synthesis_full", |b| {
        b.iter(|| black_box(synthesizer.synthesize(black_box(&property), black_box(&hood))))
    });
}

criterion_group!(benches, bench_search_pipeline, bench_poi_synthesis);
criterion_main!(benches);
