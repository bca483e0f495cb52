use crate::model::{CleanupResult, FileRecord};
use crate::selection::SelectionSet;

/// Fetch lifecycle of one view.
///
/// `Loading` means the initial fetch is in flight with nothing to show;
/// `Scanning` means a refresh is in flight while the stale list stays on
/// screen. Any fetch failure lands in `Error`, which is terminal until
/// the user retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Scanning,
    Error(String),
}

/// One view's slice of backend state: the fetched list, the selection,
/// and the outcome of the most recent cleanup. Owned by a single view
/// instance; discarded wholesale when the view's fetch context changes.
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: Phase,
    pub records: Vec<FileRecord>,
    pub selection: SelectionSet,
    /// Success banner payload, shown until the next user-initiated fetch
    pub last_cleanup: Option<CleanupResult>,
    /// Non-blocking cleanup error, shown alongside the usable list
    pub cleanup_error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            records: Vec::new(),
            selection: SelectionSet::new(),
            last_cleanup: None,
            cleanup_error: None,
        }
    }

    /// A user-initiated fetch (initial load, refresh, or retry) started.
    /// Discards any cleanup banner or cleanup error from the last cycle.
    pub fn fetch_started(&mut self) {
        self.last_cleanup = None;
        self.cleanup_error = None;
        self.enter_in_flight();
    }

    /// The re-fetch sequenced after a successful cleanup started.
    /// Keeps the success banner so it is displayed with the fresh list.
    pub fn refetch_started(&mut self) {
        self.cleanup_error = None;
        self.enter_in_flight();
    }

    fn enter_in_flight(&mut self) {
        self.phase = if self.records.is_empty() {
            Phase::Loading
        } else {
            Phase::Scanning
        };
    }

    pub fn fetch_ok(&mut self, records: Vec<FileRecord>) {
        self.records = records;
        self.phase = Phase::Ready;
    }

    pub fn fetch_failed(&mut self, message: String) {
        self.phase = Phase::Error(message);
    }

    /// Cleanup succeeded: clear the selection and record the banner.
    /// The caller is expected to start the re-fetch next, strictly after
    /// this response.
    pub fn cleanup_succeeded(&mut self, result: CleanupResult) {
        self.selection = SelectionSet::cleared();
        self.cleanup_error = None;
        self.last_cleanup = Some(result);
    }

    /// Cleanup failed: surface the error but keep the list and the
    /// selection so the user can retry without re-selecting.
    pub fn cleanup_failed(&mut self, message: String) {
        self.cleanup_error = Some(message);
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, Phase::Loading | Phase::Scanning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str, size: u64) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: format!("{id}.bin"),
            path: format!("/data/{id}.bin"),
            size,
            kind: "bin".to_string(),
            last_modified: Utc::now(),
        }
    }

    fn cleanup_result(files_removed: u64, space_freed: u64) -> CleanupResult {
        CleanupResult {
            files_removed,
            space_freed,
            categories: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_initial_fetch_goes_through_loading() {
        let mut session = Session::new();
        assert_eq!(session.phase, Phase::Loading);
        session.fetch_ok(vec![record("1", 10)]);
        assert_eq!(session.phase, Phase::Ready);
        assert_eq!(session.records.len(), 1);
    }

    #[test]
    fn test_refresh_keeps_stale_list_visible() {
        let mut session = Session::new();
        session.fetch_ok(vec![record("1", 10)]);
        session.fetch_started();
        assert_eq!(session.phase, Phase::Scanning);
        assert_eq!(session.records.len(), 1);
    }

    #[test]
    fn test_fetch_failure_then_retry_recovers() {
        let mut session = Session::new();
        session.fetch_failed("connection refused".to_string());
        assert_eq!(session.phase, Phase::Error("connection refused".to_string()));

        session.fetch_started();
        assert_eq!(session.phase, Phase::Loading);
        session.fetch_ok(vec![record("1", 10)]);
        assert_eq!(session.phase, Phase::Ready);
    }

    #[test]
    fn test_cleanup_success_clears_selection_and_sets_banner() {
        let mut session = Session::new();
        session.fetch_ok(vec![record("1", 600_000_000), record("2", 2_000_000_000)]);
        session.selection = session.selection.toggled("2");

        session.cleanup_succeeded(cleanup_result(1, 2_000_000_000));
        assert!(session.selection.is_empty());
        let banner = session.last_cleanup.as_ref().unwrap();
        assert_eq!(banner.files_removed, 1);
        assert_eq!(banner.space_freed, 2_000_000_000);

        // Banner survives the re-fetch sequenced after the cleanup
        session.refetch_started();
        session.fetch_ok(vec![record("1", 600_000_000)]);
        assert!(session.last_cleanup.is_some());

        // ...but not the next user-initiated fetch
        session.fetch_started();
        assert!(session.last_cleanup.is_none());
    }

    #[test]
    fn test_cleanup_failure_keeps_list_and_selection() {
        let mut session = Session::new();
        session.fetch_ok(vec![record("1", 10)]);
        session.selection = session.selection.toggled("1");

        session.cleanup_failed("backend returned 500".to_string());
        assert_eq!(session.phase, Phase::Ready);
        assert_eq!(session.records.len(), 1);
        assert!(session.selection.contains("1"));
        assert!(session.cleanup_error.is_some());
    }
}
