//! Property listing data model.
//!
//! [`PropertyRecord`] is the search-indexed representation of a listing.
//! Records are produced by an external indexing process and are read-only
//! input to the search core; nothing in this crate mutates them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CadastreError, Result};
use crate::geo::GeoPoint;

/// Lifecycle status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Draft,
    Review,
    Listed,
    Flagged,
    Archived,
}

/// Kind of property being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Villa,
    Land,
    Commercial,
    Other,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
            PropertyType::Other => "other",
        };
        f.write_str(name)
    }
}

impl FromStr for PropertyType {
    type Err = CadastreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "house" => Ok(PropertyType::House),
            "apartment" => Ok(PropertyType::Apartment),
            "villa" => Ok(PropertyType::Villa),
            "land" => Ok(PropertyType::Land),
            "commercial" => Ok(PropertyType::Commercial),
            "other" => Ok(PropertyType::Other),
            _ => Err(CadastreError::invalid_argument(format!(
                "unknown property type: {s}"
            ))),
        }
    }
}

/// Translated text keyed by language tag ("en", "fr", ...).
///
/// The search core never performs translation itself; it matches and
/// resolves against whatever translations the indexing process supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(pub HashMap<String, String>);

impl LocalizedText {
    /// Create an empty localized text.
    pub fn new() -> Self {
        LocalizedText(HashMap::new())
    }

    /// Create a localized text with a single translation.
    pub fn with<L: Into<String>, T: Into<String>>(lang: L, text: T) -> Self {
        let mut map = HashMap::new();
        map.insert(lang.into(), text.into());
        LocalizedText(map)
    }

    /// Add a translation, returning self for chaining.
    pub fn and<L: Into<String>, T: Into<String>>(mut self, lang: L, text: T) -> Self {
        self.0.insert(lang.into(), text.into());
        self
    }

    /// Resolve the text for a language, falling back to "en", then to any
    /// available translation.
    pub fn resolve(&self, lang: &str) -> Option<&str> {
        self.0
            .get(lang)
            .or_else(|| self.0.get("en"))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
    }

    /// Case-insensitive substring test across every translation.
    pub fn contains_ignore_case(&self, needle_lower: &str) -> bool {
        self.0
            .values()
            .any(|text| text.to_lowercase().contains(needle_lower))
    }
}

/// Postal address fields of a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub city: String,
    pub postal_code: Option<String>,
    pub country: String,
}

/// Reference from a listing to its neighborhood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodRef {
    /// Unique neighborhood slug, resolvable through the directory.
    pub slug: String,
    /// Display name of the neighborhood.
    pub name: LocalizedText,
}

/// Immutable search-indexed representation of a property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Listing identifier, assigned by the indexing process.
    pub id: String,
    /// Lifecycle status.
    pub status: PropertyStatus,
    /// Localized listing title.
    pub title: LocalizedText,
    /// Localized listing description.
    pub description: LocalizedText,
    /// Kind of property.
    pub property_type: PropertyType,
    /// Asking price, non-negative.
    pub price: f64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Coordinate of the listing, if geocoded.
    pub location: Option<GeoPoint>,
    /// Postal address.
    pub address: Address,
    /// Neighborhood reference, if the listing is assigned to one.
    pub neighborhood: Option<NeighborhoodRef>,
    /// Media URLs (photos, floor plans).
    pub media: Vec<String>,
    /// Creation timestamp, set by the indexing process.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, set by the indexing process.
    pub updated_at: DateTime<Utc>,
}

impl PropertyRecord {
    /// Start building a record with the given identifier.
    pub fn builder<S: Into<String>>(id: S) -> PropertyRecordBuilder {
        PropertyRecordBuilder::new(id)
    }
}

/// Builder for [`PropertyRecord`].
#[derive(Debug)]
pub struct PropertyRecordBuilder {
    record: PropertyRecord,
}

impl PropertyRecordBuilder {
    /// Create a builder with defaults: listed status, apartment type,
    /// zero price in EUR, no coordinate, epoch timestamps.
    pub fn new<S: Into<String>>(id: S) -> Self {
        PropertyRecordBuilder {
            record: PropertyRecord {
                id: id.into(),
                status: PropertyStatus::Listed,
                title: LocalizedText::new(),
                description: LocalizedText::new(),
                property_type: PropertyType::Apartment,
                price: 0.0,
                currency: "EUR".to_string(),
                location: None,
                address: Address::default(),
                neighborhood: None,
                media: Vec::new(),
                created_at: DateTime::<Utc>::UNIX_EPOCH,
                updated_at: DateTime::<Utc>::UNIX_EPOCH,
            },
        }
    }

    /// Set the listing status.
    pub fn status(mut self, status: PropertyStatus) -> Self {
        self.record.status = status;
        self
    }

    /// Set the title for a language.
    pub fn title<L: Into<String>, T: Into<String>>(mut self, lang: L, text: T) -> Self {
        self.record.title.0.insert(lang.into(), text.into());
        self
    }

    /// Set the description for a language.
    pub fn description<L: Into<String>, T: Into<String>>(mut self, lang: L, text: T) -> Self {
        self.record.description.0.insert(lang.into(), text.into());
        self
    }

    /// Set the property type.
    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.record.property_type = property_type;
        self
    }

    /// Set the price and currency.
    pub fn price(mut self, price: f64, currency: &str) -> Self {
        self.record.price = price;
        self.record.currency = currency.to_string();
        self
    }

    /// Set the coordinate.
    pub fn location(mut self, point: GeoPoint) -> Self {
        self.record.location = Some(point);
        self
    }

    /// Set the city and country address fields.
    pub fn address<C: Into<String>, K: Into<String>>(mut self, city: C, country: K) -> Self {
        self.record.address.city = city.into();
        self.record.address.country = country.into();
        self
    }

    /// Set the neighborhood reference.
    pub fn neighborhood<S: Into<String>>(mut self, slug: S, name: LocalizedText) -> Self {
        self.record.neighborhood = Some(NeighborhoodRef {
            slug: slug.into(),
            name,
        });
        self
    }

    /// Add a media URL.
    pub fn media<S: Into<String>>(mut self, url: S) -> Self {
        self.record.media.push(url.into());
        self
    }

    /// Set creation and update timestamps.
    pub fn timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.record.created_at = created_at;
        self.record.updated_at = updated_at;
        self
    }

    /// Finish building the record.
    pub fn build(self) -> PropertyRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_round_trip() {
        for name in ["house", "apartment", "villa", "land", "commercial", "other"] {
            let parsed: PropertyType = name.parse().unwrap();
            assert_eq!(parsed.to_string(), name);
        }
        assert!("castle".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_localized_text_resolution() {
        let text = LocalizedText::with("en", "Bright loft").and("fr", "Loft lumineux");

        assert_eq!(text.resolve("fr"), Some("Loft lumineux"));
        assert_eq!(text.resolve("de"), Some("Bright loft")); // falls back to en

        let no_english = LocalizedText::with("sv", "Ljus vind");
        assert_eq!(no_english.resolve("de"), Some("Ljus vind"));

        assert_eq!(LocalizedText::new().resolve("en"), None);
    }

    #[test]
    fn test_localized_text_substring_match() {
        let text = LocalizedText::with("en", "Sea View Apartment");
        assert!(text.contains_ignore_case("sea view"));
        assert!(!text.contains_ignore_case("mountain"));
    }

    #[test]
    fn test_record_builder() {
        let record = PropertyRecord::builder("prop-1")
            .title("en", "Canal house")
            .property_type(PropertyType::House)
            .price(1_250_000.0, "EUR")
            .location(GeoPoint::new(52.3676, 4.9041).unwrap())
            .address("Amsterdam", "Netherlands")
            .build();

        assert_eq!(record.id, "prop-1");
        assert_eq!(record.property_type, PropertyType::House);
        assert_eq!(record.price, 1_250_000.0);
        assert_eq!(record.address.city, "Amsterdam");
        assert!(record.location.is_some());
        assert_eq!(record.status, PropertyStatus::Listed);
    }
}
