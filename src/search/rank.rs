//! Ordering of filtered records by sort policy.
//!
//! All sorts are stable: records that compare equal keep their relative
//! input order, so the external index's ordering survives ties.

use crate::error::{CadastreError, Result};
use crate::geo::GeoPoint;
use crate::property::PropertyRecord;
use crate::query::SortPolicy;

/// Orders a filtered collection by a [`SortPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine;

impl RankingEngine {
    /// Create a ranking engine.
    pub fn new() -> Self {
        RankingEngine
    }

    /// Sort records by the given policy.
    ///
    /// `Relevance` is an explicit pass-through: relevance scoring belongs
    /// to the external index, not to this core. `Distance` requires a
    /// center point and rejects the request otherwise; records without a
    /// coordinate sort last, as if infinitely far away.
    pub fn rank(
        &self,
        records: Vec<PropertyRecord>,
        sort: SortPolicy,
        center: Option<&GeoPoint>,
    ) -> Result<Vec<PropertyRecord>> {
        match sort {
            SortPolicy::Relevance => Ok(records),
            SortPolicy::PriceAsc => {
                let mut records = records;
                records.sort_by(|a, b| a.price.total_cmp(&b.price));
                Ok(records)
            }
            SortPolicy::PriceDesc => {
                let mut records = records;
                records.sort_by(|a, b| b.price.total_cmp(&a.price));
                Ok(records)
            }
            SortPolicy::Distance => {
                let center = center.ok_or_else(|| {
                    CadastreError::query("distance sort requires a center coordinate")
                })?;

                let mut keyed: Vec<(f64, PropertyRecord)> = records
                    .into_iter()
                    .map(|record| {
                        let distance = record
                            .location
                            .map_or(f64::INFINITY, |point| center.distance_km(&point));
                        (distance, record)
                    })
                    .collect();
                keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
                Ok(keyed.into_iter().map(|(_, record)| record).collect())
            }
        }
    }
}
