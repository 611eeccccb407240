//! Command implementations for the Cadastre CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{CadastreError, Result};
use crate::geo::{GeoBoundingBox, GeoPoint};
use crate::map::{MapBoundsCalculator, MapViewport, ViewportConfig};
use crate::poi::{PoiConfig, PoiMarker, PoiSynthesizer};
use crate::property::PropertyRecord;
use crate::query::SearchQuery;
use crate::search::SearchEngine;
use crate::store::{Dataset, NeighborhoodDirectory, PropertyStore};

/// Execute a CLI command.
pub fn execute_command(args: CadastreArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args.clone(), &args),
        Command::Poi(poi_args) => run_poi(poi_args.clone(), &args),
        Command::Bounds(bounds_args) => run_bounds(bounds_args.clone(), &args),
    }
}

/// Search a dataset file.
fn run_search(args: SearchArgs, cli_args: &CadastreArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dataset from: {}", args.dataset_file.display());
    }

    let store = PropertyStore::from_json_file(&args.dataset_file)?;
    let query = build_query(&args)?;

    let engine = SearchEngine::new();
    let results = engine.search(store.records(), &query)?;

    output_result("Search results", &results, cli_args)
}

/// Build a [`SearchQuery`] from CLI arguments.
fn build_query(args: &SearchArgs) -> Result<SearchQuery> {
    let mut query = SearchQuery::new()
        .with_price_range(args.min_price, args.max_price)
        .with_sort(args.sort.into())
        .with_page(args.limit, args.offset);

    if let Some(text) = &args.text {
        query = query.with_text(text.clone());
    }
    if let Some(property_type) = &args.property_type {
        query = query.with_property_type(property_type.parse()?);
    }
    if let Some(country) = &args.country {
        query = query.with_country(country.clone());
    }
    if let Some(city) = &args.city {
        query = query.with_city(city.clone());
    }
    if let Some(center) = &args.center {
        let center = parse_point(center)?;
        query = match args.radius_km {
            Some(radius_km) => query.with_radius(center, radius_km),
            None => query.with_center(center),
        };
    }
    if let Some(bounds) = &args.bounds {
        query = query.with_bounds(parse_bounds(bounds)?);
    }

    Ok(query)
}

/// Parse "lat,lon" into a point.
fn parse_point(input: &str) -> Result<GeoPoint> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(CadastreError::invalid_argument(format!(
            "expected \"lat,lon\", got \"{input}\""
        )));
    }
    let lat: f64 = parts[0]
        .parse()
        .map_err(|_| CadastreError::invalid_argument(format!("invalid latitude: {}", parts[0])))?;
    let lon: f64 = parts[1]
        .parse()
        .map_err(|_| CadastreError::invalid_argument(format!("invalid longitude: {}", parts[1])))?;
    GeoPoint::new(lat, lon)
}

/// Parse "sw_lat,sw_lon,ne_lat,ne_lon" into a bounding box.
fn parse_bounds(input: &str) -> Result<GeoBoundingBox> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(CadastreError::invalid_argument(format!(
            "expected \"sw_lat,sw_lon,ne_lat,ne_lon\", got \"{input}\""
        )));
    }
    let mut values = [0.0f64; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| CadastreError::invalid_argument(format!("invalid coordinate: {part}")))?;
    }
    let south_west = GeoPoint::new(values[0], values[1])?;
    let north_east = GeoPoint::new(values[2], values[3])?;
    GeoBoundingBox::new(south_west, north_east)
}

/// Load a dataset and resolve the property and its neighborhood.
fn load_scene(
    dataset_file: &std::path::Path,
    property_id: &str,
) -> Result<(PropertyRecord, NeighborhoodDirectory)> {
    let dataset = Dataset::from_json_file(dataset_file)?;
    let directory = NeighborhoodDirectory::from_aggregates(dataset.neighborhoods);
    let property = dataset
        .properties
        .into_iter()
        .find(|record| record.id == property_id)
        .ok_or_else(|| CadastreError::not_found(format!("property '{property_id}'")))?;
    Ok((property, directory))
}

/// Synthesize markers for a property in a dataset.
fn synthesize_markers(
    property: &PropertyRecord,
    directory: &NeighborhoodDirectory,
    overview: bool,
) -> Result<Vec<PoiMarker>> {
    let config = if overview {
        PoiConfig::overview()
    } else {
        PoiConfig::close_up()
    };

    let markers = match &property.neighborhood {
        Some(reference) => {
            let neighborhood = directory.require(&reference.slug)?;
            PoiSynthesizer::with_config(config).synthesize(property, neighborhood)
        }
        None => Vec::new(),
    };

    Ok(markers)
}

/// Synthesize POI markers for a property.
fn run_poi(args: PoiArgs, cli_args: &CadastreArgs) -> Result<()> {
    let (property, directory) = load_scene(&args.dataset_file, &args.property_id)?;
    let markers = synthesize_markers(&property, &directory, args.overview)?;

    output_result("Synthesized markers", &markers, cli_args)
}

/// Compute a viewport for a property scene.
fn run_bounds(args: BoundsArgs, cli_args: &CadastreArgs) -> Result<()> {
    let (property, directory) = load_scene(&args.dataset_file, &args.property_id)?;
    let markers = synthesize_markers(&property, &directory, args.overview)?;

    let neighborhood = property
        .neighborhood
        .as_ref()
        .and_then(|reference| directory.get(&reference.slug));

    let viewport: MapViewport = MapBoundsCalculator::with_config(ViewportConfig::default())
        .fit_property_scene(&property, &markers, neighborhood);

    output_result("Viewport", &viewport, cli_args)
}
