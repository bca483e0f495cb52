use crate::model::FileRecord;
use crate::selection::SelectionSet;

/// Totals over a record list and the selected subset within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewTotals {
    pub total_count: usize,
    pub total_bytes: u64,
    pub selected_count: usize,
    pub selected_bytes: u64,
}

/// Compute counts and byte sums for the full list and for the records
/// whose id is in the selection. Ids in the selection that no longer
/// appear in the list (e.g. after a refresh) contribute nothing.
pub fn aggregate(records: &[FileRecord], selection: &SelectionSet) -> ViewTotals {
    let mut totals = ViewTotals {
        total_count: records.len(),
        ..Default::default()
    };
    for record in records {
        totals.total_bytes += record.size;
        if selection.contains(&record.id) {
            totals.selected_count += 1;
            totals.selected_bytes += record.size;
        }
    }
    totals
}
