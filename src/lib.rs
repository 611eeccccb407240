//! # Cadastre
//!
//! A geospatial property search and map presentation library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation with no service dependencies
//! - Conjunctive filtering: free text, categorical, price range, spatial
//! - Bounding-box and radius filters over Haversine distances
//! - Stable ranking policies and clamped pagination
//! - Deterministic golden-angle POI synthesis from neighborhood aggregates
//! - Map viewport fitting with padding and zoom ceiling

pub mod cli;
pub mod error;
pub mod geo;
pub mod map;
pub mod neighborhood;
pub mod poi;
pub mod property;
pub mod query;
pub mod search;
pub mod store;

pub mod prelude {
    //! Convenience re-exports for typical search-and-map usage.

    pub use crate::error::{CadastreError, Result};
    pub use crate::geo::{GeoBoundingBox, GeoPoint};
    pub use crate::map::{MapBoundsCalculator, MapViewport, ViewportConfig};
    pub use crate::neighborhood::NeighborhoodAggregate;
    pub use crate::poi::{PoiConfig, PoiMarker, PoiSynthesizer};
    pub use crate::property::{PropertyRecord, PropertyStatus, PropertyType};
    pub use crate::query::{SearchQuery, SortPolicy};
    pub use crate::search::{SearchEngine, SearchResults};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
