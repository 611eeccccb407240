//! Conjunctive predicate filtering of property records.
//!
//! Predicates are applied in a fixed order, each narrowing the working
//! set: free text, categorical equality, price range, then the spatial
//! filter. A record passes only if every specified predicate matches.
//! Records without a coordinate never match a spatial filter.

use rayon::prelude::*;

use crate::property::PropertyRecord;
use crate::query::SearchQuery;
use crate::search::SearchConfig;

/// Lowercased needles, computed once per filter pass.
#[derive(Debug)]
struct Needles {
    text: Option<String>,
    country: Option<String>,
    city: Option<String>,
}

impl Needles {
    fn from_query(query: &SearchQuery) -> Self {
        Needles {
            text: query.text.as_deref().map(str::to_lowercase),
            country: query.country.as_deref().map(str::to_lowercase),
            city: query.city.as_deref().map(str::to_lowercase),
        }
    }
}

/// Applies a [`SearchQuery`]'s predicates to a collection of records.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    config: SearchConfig,
}

impl FilterEngine {
    /// Create a filter engine with the default configuration.
    pub fn new() -> Self {
        FilterEngine::default()
    }

    /// Create a filter engine with the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        FilterEngine { config }
    }

    /// Filter records by the query, preserving input order.
    ///
    /// An unfiltered query returns the input unchanged. Large inputs are
    /// filtered in parallel when the configuration allows it; the result
    /// order is identical on both paths.
    pub fn filter(&self, records: &[PropertyRecord], query: &SearchQuery) -> Vec<PropertyRecord> {
        if query.is_unfiltered() {
            return records.to_vec();
        }

        let needles = Needles::from_query(query);

        if self.config.parallel && records.len() >= self.config.parallel_threshold {
            records
                .par_iter()
                .filter(|record| Self::matches(record, query, &needles))
                .cloned()
                .collect()
        } else {
            records
                .iter()
                .filter(|record| Self::matches(record, query, &needles))
                .cloned()
                .collect()
        }
    }

    /// Evaluate every specified predicate against one record.
    fn matches(record: &PropertyRecord, query: &SearchQuery, needles: &Needles) -> bool {
        // 1. Free text: OR across title, description, city and country.
        if let Some(needle) = &needles.text {
            let hit = record.title.contains_ignore_case(needle)
                || record.description.contains_ignore_case(needle)
                || record.address.city.to_lowercase().contains(needle)
                || record.address.country.to_lowercase().contains(needle);
            if !hit {
                return false;
            }
        }

        // 2. Categorical filters: exact for type, substring for country/city.
        if let Some(property_type) = query.property_type
            && record.property_type != property_type
        {
            return false;
        }
        if let Some(needle) = &needles.country
            && !record.address.country.to_lowercase().contains(needle)
        {
            return false;
        }
        if let Some(needle) = &needles.city
            && !record.address.city.to_lowercase().contains(needle)
        {
            return false;
        }

        // 3. Price range, both bounds inclusive.
        if let Some(min_price) = query.min_price
            && record.price < min_price
        {
            return false;
        }
        if let Some(max_price) = query.max_price
            && record.price > max_price
        {
            return false;
        }

        // 4. Spatial filter: bounding box wins over center/radius.
        if let Some(bounds) = &query.bounds {
            match &record.location {
                Some(point) => bounds.contains(point),
                None => false,
            }
        } else if let (Some(center), Some(radius_km)) = (&query.center, query.radius_km) {
            match &record.location {
                Some(point) => center.distance_km(point) <= radius_km,
                None => false,
            }
        } else {
            true
        }
    }
}
