use crate::engine::update::types::UpdateRecord;

/// Keep only the records for `event_id` stamped at or after `watermark`,
/// compacting survivors toward the front of the vector.
///
/// Single left-to-right pass with a write cursor: stable, O(n) time, O(1)
/// extra space. A watermark of 0 keeps every record for the event.
pub fn filter_window<T: UpdateRecord>(records: &mut Vec<T>, event_id: i64, watermark: i64) {
    let mut write = 0;

    for read in 0..records.len() {
        let keep =
            records[read].event_id() == event_id && records[read].occurred_at() >= watermark;
        if keep {
            records.swap(write, read);
            write += 1;
        }
    }

    records.truncate(write);
}
