//! High-level search engine: filter, rank, paginate.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::property::PropertyRecord;
use crate::query::SearchQuery;
use crate::search::SearchConfig;
use crate::search::filter::FilterEngine;
use crate::search::paginate::paginate;
use crate::search::rank::RankingEngine;

/// Result envelope for a search: one page of hits plus the figures a
/// results UI needs to render counts and page controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// The page of matching records, in ranked order.
    pub hits: Vec<PropertyRecord>,
    /// Total number of matches before pagination.
    pub total_hits: u64,
    /// Effective page size.
    pub limit: usize,
    /// Effective page offset.
    pub offset: usize,
    /// Wall-clock processing duration in milliseconds.
    pub processing_time_ms: u64,
    /// Echo of the free-text query, if any.
    pub query: Option<String>,
}

/// Stateless search service over in-memory record collections.
///
/// Each call is an independent, synchronous computation; concurrent calls
/// need no coordination.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    filter: FilterEngine,
    ranker: RankingEngine,
}

impl SearchEngine {
    /// Create a search engine with the default configuration.
    pub fn new() -> Self {
        SearchEngine::default()
    }

    /// Create a search engine with the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        SearchEngine {
            filter: FilterEngine::with_config(config),
            ranker: RankingEngine::new(),
        }
    }

    /// Execute a query against a record collection.
    ///
    /// The envelope's `total_hits` is the pre-pagination match count.
    /// A distance sort without a center coordinate is rejected before any
    /// results are produced.
    pub fn search(&self, records: &[PropertyRecord], query: &SearchQuery) -> Result<SearchResults> {
        let start_time = Instant::now();

        let filtered = self.filter.filter(records, query);
        let total_hits = filtered.len() as u64;
        let ranked = self.ranker.rank(filtered, query.sort, query.center.as_ref())?;
        let hits = paginate(ranked, query.limit, query.offset);

        let processing_time_ms = start_time.elapsed().as_millis() as u64;
        debug!(
            total_hits,
            returned = hits.len(),
            processing_time_ms,
            sort = ?query.sort,
            "search completed"
        );

        Ok(SearchResults {
            hits,
            total_hits,
            limit: query.limit,
            offset: query.offset,
            processing_time_ms,
            query: query.text.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::query::SortPolicy;

    fn fixture() -> Vec<PropertyRecord> {
        vec![
            PropertyRecord::builder("a")
                .address("Paris", "France")
                .price(450_000.0, "EUR")
                .location(GeoPoint::new(48.86, 2.35).unwrap())
                .build(),
            PropertyRecord::builder("b")
                .address("Lyon", "France")
                .price(320_000.0, "EUR")
                .build(),
            PropertyRecord::builder("c")
                .address("Paris", "France")
                .price(780_000.0, "EUR")
                .build(),
        ]
    }

    #[test]
    fn test_total_hits_reported_before_pagination() {
        let records = fixture();
        let engine = SearchEngine::new();
        let query = SearchQuery::new().with_page(1, 0);
        let results = engine.search(&records, &query).unwrap();

        assert_eq!(results.total_hits, 3);
        assert_eq!(results.hits.len(), 1);
        assert_eq!((results.limit, results.offset), (1, 0));
    }

    #[test]
    fn test_query_text_is_echoed() {
        let records = fixture();
        let query = SearchQuery::new().with_text("paris");
        let results = SearchEngine::new().search(&records, &query).unwrap();
        assert_eq!(results.query.as_deref(), Some("paris"));
        assert_eq!(results.total_hits, 2);
    }

    #[test]
    fn test_sorted_page() {
        let records = fixture();
        let query = SearchQuery::new().with_sort(SortPolicy::PriceDesc);
        let results = SearchEngine::new().search(&records, &query).unwrap();
        let ids: Vec<&str> = results.hits.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_distance_sort_without_center_is_rejected() {
        let records = fixture();
        let query = SearchQuery::new().with_sort(SortPolicy::Distance);
        assert!(SearchEngine::new().search(&records, &query).is_err());
    }

    #[test]
    fn test_distance_sort_with_center() {
        let records = fixture();
        let query = SearchQuery::new()
            .with_center(GeoPoint::new(48.8566, 2.3522).unwrap())
            .with_sort(SortPolicy::Distance);
        let results = SearchEngine::new().search(&records, &query).unwrap();
        // Only "a" has a coordinate, so it leads; the rest keep input order.
        let ids: Vec<&str> = results.hits.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
