//! In-memory record stores.
//!
//! The search core consumes plain data: a collection of property records
//! and a slug-keyed directory of neighborhood aggregates. Both a live
//! backend and a static JSON fixture produce the same shapes, so this
//! module also carries the fixture loader.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CadastreError, Result};
use crate::neighborhood::NeighborhoodAggregate;
use crate::property::PropertyRecord;

/// A deserialized dataset: properties plus neighborhoods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub properties: Vec<PropertyRecord>,
    #[serde(default)]
    pub neighborhoods: Vec<NeighborhoodAggregate>,
}

impl Dataset {
    /// Load a dataset from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let dataset = serde_json::from_reader(BufReader::new(file))?;
        Ok(dataset)
    }
}

/// Read-only collection of indexed property records.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    records: Vec<PropertyRecord>,
}

impl PropertyStore {
    /// Create a store over the given records.
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        PropertyStore { records }
    }

    /// Load a store from a JSON fixture file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let dataset = Dataset::from_json_file(path)?;
        Ok(PropertyStore::new(dataset.properties))
    }

    /// All records, in index order.
    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    /// Look up a record by its identifier.
    pub fn get(&self, id: &str) -> Option<&PropertyRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Slug-keyed directory of neighborhood aggregates.
#[derive(Debug, Clone, Default)]
pub struct NeighborhoodDirectory {
    by_slug: AHashMap<String, NeighborhoodAggregate>,
}

impl NeighborhoodDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        NeighborhoodDirectory::default()
    }

    /// Build a directory from aggregates, keyed by slug. Later entries
    /// with a duplicate slug replace earlier ones.
    pub fn from_aggregates<I: IntoIterator<Item = NeighborhoodAggregate>>(
        aggregates: I,
    ) -> Self {
        let by_slug = aggregates
            .into_iter()
            .map(|aggregate| (aggregate.slug.clone(), aggregate))
            .collect();
        NeighborhoodDirectory { by_slug }
    }

    /// Insert an aggregate, replacing any existing entry with its slug.
    pub fn insert(&mut self, aggregate: NeighborhoodAggregate) {
        self.by_slug.insert(aggregate.slug.clone(), aggregate);
    }

    /// Look up an aggregate by slug.
    pub fn get(&self, slug: &str) -> Option<&NeighborhoodAggregate> {
        self.by_slug.get(slug)
    }

    /// Look up an aggregate by slug, failing if absent.
    pub fn require(&self, slug: &str) -> Result<&NeighborhoodAggregate> {
        self.get(slug)
            .ok_or_else(|| CadastreError::not_found(format!("neighborhood '{slug}'")))
    }

    /// Number of aggregates in the directory.
    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }
}
