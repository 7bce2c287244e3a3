use std::collections::HashMap;

use crate::engine::update::types::UpdateRecord;

/// Count occurrences per region over an already-filtered record set.
/// A record carrying multiple region ids increments each of its buckets
/// once. The map is rebuilt fresh per request; its iteration order is not
/// part of the contract.
pub fn count_regions<T: UpdateRecord>(records: &[T]) -> HashMap<i64, u64> {
    let mut counts: HashMap<i64, u64> = HashMap::new();

    for record in records {
        for region_id in record.region_ids() {
            *counts.entry(region_id).or_insert(0) += 1;
        }
    }

    counts
}
