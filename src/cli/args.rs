//! Command line argument parsing for the Cadastre CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::query::{DEFAULT_LIMIT, SortPolicy};

/// Cadastre - geospatial property search over JSON fixtures
#[derive(Parser, Debug, Clone)]
#[command(name = "cadastre")]
#[command(about = "Geospatial property search and map tooling")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CadastreArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CadastreArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a property dataset
    Search(SearchArgs),

    /// Synthesize POI markers for a property
    Poi(PoiArgs),

    /// Compute a map viewport for a property scene
    Bounds(BoundsArgs),
}

/// Arguments for searching a dataset
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the dataset file (JSON)
    #[arg(value_name = "DATASET_FILE")]
    pub dataset_file: PathBuf,

    /// Free-text query
    #[arg(short, long)]
    pub text: Option<String>,

    /// Property type filter (house, apartment, villa, land, commercial, other)
    #[arg(long = "type")]
    pub property_type: Option<String>,

    /// Country filter (case-insensitive substring)
    #[arg(long)]
    pub country: Option<String>,

    /// City filter (case-insensitive substring)
    #[arg(long)]
    pub city: Option<String>,

    /// Minimum price, inclusive
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price, inclusive
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Center point as "lat,lon" (radius filter and distance sort)
    #[arg(long)]
    pub center: Option<String>,

    /// Radius in kilometers around the center
    #[arg(long)]
    pub radius_km: Option<f64>,

    /// Bounding box as "sw_lat,sw_lon,ne_lat,ne_lon" (overrides radius)
    #[arg(long)]
    pub bounds: Option<String>,

    /// Sort order
    #[arg(short, long, default_value = "relevance")]
    pub sort: SortMode,

    /// Maximum number of results to return
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Offset for pagination
    #[arg(short, long, default_value = "0")]
    pub offset: usize,
}

/// Arguments for POI synthesis
#[derive(Parser, Debug, Clone)]
pub struct PoiArgs {
    /// Path to the dataset file (JSON)
    #[arg(value_name = "DATASET_FILE")]
    pub dataset_file: PathBuf,

    /// Identifier of the property to synthesize markers for
    #[arg(value_name = "PROPERTY_ID")]
    pub property_id: String,

    /// Use the wider city-overview marker spread
    #[arg(long)]
    pub overview: bool,
}

/// Arguments for viewport computation
#[derive(Parser, Debug, Clone)]
pub struct BoundsArgs {
    /// Path to the dataset file (JSON)
    #[arg(value_name = "DATASET_FILE")]
    pub dataset_file: PathBuf,

    /// Identifier of the property to fit the viewport around
    #[arg(value_name = "PROPERTY_ID")]
    pub property_id: String,

    /// Use the wider city-overview marker spread
    #[arg(long)]
    pub overview: bool,
}

/// Sort orders available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Keep index order
    Relevance,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Closest to the center first (requires --center)
    Distance,
}

impl From<SortMode> for SortPolicy {
    fn from(mode: SortMode) -> Self {
        match mode {
            SortMode::Relevance => SortPolicy::Relevance,
            SortMode::PriceAsc => SortPolicy::PriceAsc,
            SortMode::PriceDesc => SortPolicy::PriceDesc,
            SortMode::Distance => SortPolicy::Distance,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
