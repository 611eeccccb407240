//! Search pipeline: filtering, ranking and pagination of property records.

pub mod engine;
pub mod filter;
pub mod paginate;
pub mod rank;

pub use self::engine::{SearchEngine, SearchResults};
pub use self::filter::FilterEngine;
pub use self::paginate::paginate;
pub use self::rank::RankingEngine;

/// Configuration for search operations.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Enable data-parallel filtering for large record sets.
    pub parallel: bool,
    /// Record count at which filtering switches to the parallel path.
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            parallel: true,
            parallel_threshold: 4096,
        }
    }
}
