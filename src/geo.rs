//! Geographic primitives: points, great-circle distance, bounding boxes.
//!
//! Distance math uses the Haversine formula on a spherical Earth, which is
//! accurate to within ~0.5% for the listing-to-listing distances this
//! library works with.

use serde::{Deserialize, Serialize};

use crate::error::{CadastreError, Result};

/// Mean Earth radius in kilometers, as used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographical point with latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new geographical point, validating the coordinate ranges.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CadastreError::geo(format!(
                "Invalid latitude: {lat} (must be between -90 and 90)"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CadastreError::geo(format!(
                "Invalid longitude: {lon} (must be between -180 and 180)"
            )));
        }

        Ok(GeoPoint { lat, lon })
    }

    /// Calculate the Haversine distance to another point in kilometers.
    ///
    /// Pure and total for valid coordinates; NaN inputs propagate as NaN.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// A geographical bounding box defined by its south-west and north-east
/// corners. Containment is inclusive on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBoundingBox {
    /// South-west corner (minimum latitude and longitude)
    pub south_west: GeoPoint,
    /// North-east corner (maximum latitude and longitude)
    pub north_east: GeoPoint,
}

impl GeoBoundingBox {
    /// Create a new bounding box from its corners.
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Result<Self> {
        if south_west.lat > north_east.lat {
            return Err(CadastreError::geo(
                "South-west latitude must not exceed north-east latitude",
            ));
        }
        if south_west.lon > north_east.lon {
            return Err(CadastreError::geo(
                "South-west longitude must not exceed north-east longitude",
            ));
        }

        Ok(GeoBoundingBox {
            south_west,
            north_east,
        })
    }

    /// Check if a point lies within this bounding box (edges inclusive).
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lon >= self.south_west.lon
            && point.lon <= self.north_east.lon
    }

    /// Get the center point of this bounding box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lat: (self.south_west.lat + self.north_east.lat) / 2.0,
            lon: (self.south_west.lon + self.north_east.lon) / 2.0,
        }
    }

    /// Get the width (longitude span) and height (latitude span) in degrees.
    pub fn dimensions(&self) -> (f64, f64) {
        let width = self.north_east.lon - self.south_west.lon;
        let height = self.north_east.lat - self.south_west.lat;
        (width, height)
    }
}
