//! Page slicing of ranked results.

use crate::property::PropertyRecord;

/// Return the sub-sequence `[offset, offset + limit)`, clamped to the
/// available length. An out-of-range offset yields an empty page.
pub fn paginate(records: Vec<PropertyRecord>, limit: usize, offset: usize) -> Vec<PropertyRecord> {
    records.into_iter().skip(offset).take(limit).collect()
}
