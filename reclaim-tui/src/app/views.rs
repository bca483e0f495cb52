use reclaim_core::{
    FileFilter, FileRecord, Session, SortKey, SortOrder, ViewTotals, aggregate, sorted_view,
};

/// Derived row data for one pane: the filtered (and optionally sorted)
/// projection of the session's record list, plus running totals.
///
/// Rebuilt whenever the list, search term, kind filter, sort key, or
/// direction changes; the session itself is never mutated here.
pub struct ComputedView {
    pub rows: Vec<FileRecord>,
    pub totals: ViewTotals,
    pub dirty: bool,
}

impl ComputedView {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            totals: ViewTotals::default(),
            dirty: true,
        }
    }

    /// `sort` is present for the large-files pane only; the temp-files
    /// pane keeps the backend's order.
    pub fn rebuild(
        &mut self,
        session: &Session,
        filter: &FileFilter,
        sort: Option<(SortKey, SortOrder)>,
    ) {
        let filtered = filter.apply(&session.records);
        self.rows = match sort {
            Some((key, order)) => sorted_view(&filtered, key, order),
            None => filtered,
        };
        // Totals cover the full unfiltered list; the selection may hold
        // ids outside the current filter
        self.totals = aggregate(&session.records, &session.selection);
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use reclaim_core::KindFilter;

    fn record(id: &str, name: &str, size: u64, kind: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            path: format!("/data/{name}"),
            size,
            kind: kind.to_string(),
            last_modified: Utc::now(),
        }
    }

    #[test]
    fn test_rebuild_filters_then_sorts() {
        let mut session = Session::new();
        session.fetch_ok(vec![
            record("1", "small.log", 10, "log"),
            record("2", "big.log", 300, "log"),
            record("3", "other.tmp", 200, "tmp"),
        ]);

        let filter = FileFilter {
            search: ".log".to_string(),
            kind: KindFilter::All,
        };
        let mut view = ComputedView::new();
        view.rebuild(&session, &filter, Some((SortKey::Size, SortOrder::Desc)));

        let ids: Vec<&str> = view.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        // Totals stay scoped to the full list
        assert_eq!(view.totals.total_count, 3);
        assert_eq!(view.totals.total_bytes, 510);
    }

    #[test]
    fn test_selection_outside_filter_still_counted() {
        let mut session = Session::new();
        session.fetch_ok(vec![
            record("1", "a.log", 100, "log"),
            record("2", "b.tmp", 200, "tmp"),
        ]);
        session.selection = session.selection.toggled("2");

        let filter = FileFilter {
            search: ".log".to_string(),
            kind: KindFilter::All,
        };
        let mut view = ComputedView::new();
        view.rebuild(&session, &filter, None);

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.totals.selected_count, 1);
        assert_eq!(view.totals.selected_bytes, 200);
    }
}
