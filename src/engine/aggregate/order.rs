use crate::engine::update::types::UpdateRecord;

/// Sort most-recent-first by `occurredAt`. The sort is stable, so records
/// sharing a timestamp keep their original relative order; consumers
/// observe this ordering directly.
pub fn order_newest_first<T: UpdateRecord>(records: &mut [T]) {
    records.sort_by(|a, b| b.occurred_at().cmp(&a.occurred_at()));
}
