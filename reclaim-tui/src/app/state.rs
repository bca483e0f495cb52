use std::sync::Arc;
use std::sync::mpsc;

use reclaim_core::{
    ApiClient, CleanupResult, FileFilter, FileRecord, KindFilter, Phase, Session, SortKey,
    SortOrder, known_kinds,
};

use super::views::ComputedView;

/// Statistics tracked during the session
#[derive(Debug, Default, Clone)]
pub struct SessionStats {
    /// Total bytes freed by cleanups
    pub bytes_freed: u64,
    /// Number of files removed
    pub files_removed: u64,
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal dashboard interaction
    Dashboard,
    /// Typing into the search box
    Search,
    /// Showing help overlay
    Help,
    /// Showing cleanup confirmation dialog
    ConfirmCleanup,
}

/// Which pane is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    LargeFiles,
    TempFiles,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::LargeFiles => "Large Files",
            ViewMode::TempFiles => "Temp Files",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ViewMode::LargeFiles => ViewMode::TempFiles,
            ViewMode::TempFiles => ViewMode::LargeFiles,
        }
    }
}

/// Per-view cursor state
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub selected_index: usize,
    pub scroll_offset: usize,
}

/// One dashboard pane: its backend session, filter and sort settings,
/// cursor, and the derived row projection.
pub struct Pane {
    pub session: Session,
    pub filter: FileFilter,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub cursor: ViewState,
    pub computed: ComputedView,
}

impl Pane {
    fn new() -> Self {
        Self {
            session: Session::new(),
            filter: FileFilter::default(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            cursor: ViewState::default(),
            computed: ComputedView::new(),
        }
    }
}

type FetchOutcome = Result<Vec<FileRecord>, String>;
type CleanupOutcome = Result<CleanupResult, String>;

/// Application state
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Current pane
    pub view_mode: ViewMode,
    /// Large-files pane (sortable, size-threshold fetch)
    pub large: Pane,
    /// Temp-files pane (kind filter, category fetch)
    pub temp: Pane,
    /// Visible list height (set by UI)
    pub visible_height: usize,
    /// Whether app should quit
    pub should_quit: bool,
    /// Spinner frame for animation
    pub spinner_frame: usize,
    /// Session statistics (files removed, freed space)
    pub session_stats: SessionStats,
    /// Records snapshot shown in the cleanup confirmation dialog
    pub pending_cleanup: Option<Vec<FileRecord>>,
    /// Backend client shared with worker threads
    client: Arc<ApiClient>,
    /// Size threshold for the large-files fetch
    min_size_bytes: u64,
    /// Category for the temp-files fetch
    category: String,
    /// Fetch limit passed to both listing endpoints
    limit: usize,
    /// Receiver for the in-flight fetch, tagged with its pane.
    /// At most one fetch is in flight; further requests are ignored.
    fetch_receiver: Option<(ViewMode, mpsc::Receiver<FetchOutcome>)>,
    /// Post-cleanup re-fetch deferred because a fetch was in flight.
    /// User-initiated fetches are droppable; this one is owed to the
    /// cleanup that succeeded and runs as soon as the channel frees up.
    pending_refetch: Option<ViewMode>,
    /// Receiver for the in-flight cleanup, tagged with its pane
    cleanup_receiver: Option<(ViewMode, mpsc::Receiver<CleanupOutcome>)>,
}

impl AppState {
    pub fn new(client: ApiClient, min_size_bytes: u64, category: String, limit: usize) -> Self {
        Self {
            mode: AppMode::Dashboard,
            view_mode: ViewMode::LargeFiles,
            large: Pane::new(),
            temp: Pane::new(),
            visible_height: 20,
            should_quit: false,
            spinner_frame: 0,
            session_stats: SessionStats::default(),
            pending_cleanup: None,
            client: Arc::new(client),
            min_size_bytes,
            category,
            limit,
            fetch_receiver: None,
            pending_refetch: None,
            cleanup_receiver: None,
        }
    }

    pub fn pane(&self) -> &Pane {
        self.pane_for(self.view_mode)
    }

    pub fn pane_mut(&mut self) -> &mut Pane {
        self.pane_for_mut(self.view_mode)
    }

    fn pane_for(&self, view: ViewMode) -> &Pane {
        match view {
            ViewMode::LargeFiles => &self.large,
            ViewMode::TempFiles => &self.temp,
        }
    }

    fn pane_for_mut(&mut self, view: ViewMode) -> &mut Pane {
        match view {
            ViewMode::LargeFiles => &mut self.large,
            ViewMode::TempFiles => &mut self.temp,
        }
    }

    /// Whether a fetch for the active pane is in flight
    pub fn is_scanning(&self) -> bool {
        matches!(self.fetch_receiver, Some((view, _)) if view == self.view_mode)
    }

    /// Whether a cleanup for the active pane is in flight
    pub fn is_cleaning_up(&self) -> bool {
        matches!(self.cleanup_receiver, Some((view, _)) if view == self.view_mode)
    }

    // --- Fetch orchestration ---

    /// Start a user-initiated fetch for the given pane.
    /// Ignored while another fetch is in flight.
    pub fn start_fetch(&mut self, view: ViewMode) {
        self.spawn_fetch(view, false);
    }

    /// Start the re-fetch sequenced after a successful cleanup
    fn start_refetch(&mut self, view: ViewMode) {
        self.spawn_fetch(view, true);
    }

    fn spawn_fetch(&mut self, view: ViewMode, after_cleanup: bool) {
        // Guard: one fetch at a time. A user fetch blocked here is simply
        // dropped; the post-cleanup re-fetch must not be, or the pane
        // would keep showing files the backend already removed.
        if self.fetch_receiver.is_some() {
            if after_cleanup {
                self.pending_refetch = Some(view);
            }
            return;
        }

        let pane = self.pane_for_mut(view);
        if after_cleanup {
            pane.session.refetch_started();
        } else {
            pane.session.fetch_started();
        }
        pane.computed.dirty = true;

        let client = Arc::clone(&self.client);
        let min_size = self.min_size_bytes;
        let category = self.category.clone();
        let limit = self.limit;
        let (tx, rx) = mpsc::channel();
        self.fetch_receiver = Some((view, rx));

        std::thread::spawn(move || {
            let result = match view {
                ViewMode::LargeFiles => client.fetch_large_files(min_size, limit),
                ViewMode::TempFiles => client.fetch_category(&category, limit),
            };
            let _ = tx.send(result.map_err(|e| e.to_string()));
        });
    }

    /// Check if the in-flight fetch completed and apply the result
    pub fn poll_fetch(&mut self) {
        let outcome = match &self.fetch_receiver {
            Some((view, rx)) => match rx.try_recv() {
                Ok(outcome) => Some((*view, outcome)),
                Err(_) => None,
            },
            None => None,
        };

        if let Some((view, outcome)) = outcome {
            self.fetch_receiver = None;
            let pane = self.pane_for_mut(view);
            match outcome {
                Ok(records) => {
                    log::debug!("fetch ok: {} records", records.len());
                    pane.session.fetch_ok(records);
                }
                Err(message) => {
                    log::warn!("fetch failed: {message}");
                    pane.session.fetch_failed(message);
                }
            }
            pane.computed.dirty = true;
            // A cleanup that finished while this fetch was in flight is
            // still owed its re-fetch
            if let Some(view) = self.pending_refetch.take() {
                self.start_refetch(view);
            }
            // A pane visited while this fetch was in flight may still be
            // waiting for its first load
            self.fetch_if_unvisited();
        }
    }

    /// Re-fetch the active pane; also acts as the retry for `Error`
    pub fn refresh(&mut self) {
        self.start_fetch(self.view_mode);
    }

    // --- Cleanup orchestration ---

    /// Request cleanup of the selection - shows the confirmation dialog
    pub fn request_cleanup(&mut self) {
        // Guard: reject if a cleanup is already in progress
        if self.cleanup_receiver.is_some() {
            return;
        }

        let pane = self.pane();
        if pane.session.selection.is_empty() {
            return;
        }

        // Snapshot of the selected records still present in the list.
        // Ids that dropped out since they were selected stay behind.
        let items: Vec<FileRecord> = pane
            .session
            .records
            .iter()
            .filter(|r| pane.session.selection.contains(&r.id))
            .cloned()
            .collect();
        if items.is_empty() {
            return;
        }

        self.pending_cleanup = Some(items);
        self.mode = AppMode::ConfirmCleanup;
    }

    /// Confirm and dispatch the cleanup on a worker thread. The request
    /// carries exactly the ids the dialog listed.
    pub fn confirm_cleanup(&mut self) {
        let Some(items) = self.pending_cleanup.take() else {
            return;
        };
        self.mode = AppMode::Dashboard;

        let view = self.view_mode;
        let file_ids: Vec<String> = items.iter().map(|r| r.id.clone()).collect();

        let client = Arc::clone(&self.client);
        let (tx, rx) = mpsc::channel();
        self.cleanup_receiver = Some((view, rx));

        std::thread::spawn(move || {
            let result = client.cleanup(file_ids);
            let _ = tx.send(result.map_err(|e| e.to_string()));
        });
    }

    /// Check if the in-flight cleanup completed and handle the result.
    /// On success the selection is cleared and a re-fetch starts, strictly
    /// after the cleanup response. On failure the list and selection stay
    /// usable so the user can retry without re-selecting.
    pub fn poll_cleanup(&mut self) {
        let outcome = match &self.cleanup_receiver {
            Some((view, rx)) => match rx.try_recv() {
                Ok(outcome) => Some((*view, outcome)),
                Err(_) => None,
            },
            None => None,
        };

        if let Some((view, outcome)) = outcome {
            self.cleanup_receiver = None;
            match outcome {
                Ok(result) => {
                    self.session_stats.bytes_freed += result.space_freed;
                    self.session_stats.files_removed += result.files_removed;
                    let pane = self.pane_for_mut(view);
                    pane.session.cleanup_succeeded(result);
                    pane.computed.dirty = true;
                    self.start_refetch(view);
                }
                Err(message) => {
                    log::warn!("cleanup failed: {message}");
                    let pane = self.pane_for_mut(view);
                    pane.session.cleanup_failed(message);
                }
            }
        }
    }

    /// Cancel the pending cleanup
    pub fn cancel_cleanup(&mut self) {
        self.pending_cleanup = None;
        self.mode = AppMode::Dashboard;
    }

    // --- Selection ---

    /// Id of the row under the cursor, if any
    fn cursor_row_id(&self) -> Option<String> {
        let pane = self.pane();
        pane.computed
            .rows
            .get(pane.cursor.selected_index)
            .map(|r| r.id.clone())
    }

    /// Toggle the row under the cursor in/out of the selection
    pub fn toggle_select(&mut self) {
        if let Some(id) = self.cursor_row_id() {
            let pane = self.pane_mut();
            pane.session.selection = pane.session.selection.toggled(&id);
            pane.computed.dirty = true;
        }
    }

    /// Select every currently filtered row. Frozen at this moment: a later
    /// filter change does not shrink the selection.
    pub fn select_all_filtered(&mut self) {
        let pane = self.pane_mut();
        let ids: Vec<String> = pane.computed.rows.iter().map(|r| r.id.clone()).collect();
        pane.session.selection = pane
            .session
            .selection
            .with_all(ids.iter().map(String::as_str));
        pane.computed.dirty = true;
    }

    /// Clear the selection unconditionally
    pub fn clear_selection(&mut self) {
        let pane = self.pane_mut();
        pane.session.selection = reclaim_core::SelectionSet::cleared();
        pane.computed.dirty = true;
    }

    // --- Filters and sorting ---

    pub fn start_search(&mut self) {
        self.mode = AppMode::Search;
    }

    pub fn search_push(&mut self, c: char) {
        let pane = self.pane_mut();
        pane.filter.search.push(c);
        pane.computed.dirty = true;
    }

    pub fn search_pop(&mut self) {
        let pane = self.pane_mut();
        pane.filter.search.pop();
        pane.computed.dirty = true;
    }

    pub fn commit_search(&mut self) {
        self.mode = AppMode::Dashboard;
    }

    pub fn cancel_search(&mut self) {
        let pane = self.pane_mut();
        pane.filter.search.clear();
        pane.computed.dirty = true;
        self.mode = AppMode::Dashboard;
    }

    /// Cycle the sort key (large-files pane only)
    pub fn cycle_sort_key(&mut self) {
        if self.view_mode != ViewMode::LargeFiles {
            return;
        }
        self.large.sort_key = self.large.sort_key.next();
        self.large.computed.dirty = true;
    }

    /// Flip the sort direction (large-files pane only)
    pub fn toggle_sort_order(&mut self) {
        if self.view_mode != ViewMode::LargeFiles {
            return;
        }
        self.large.sort_order = self.large.sort_order.toggled();
        self.large.computed.dirty = true;
    }

    /// Cycle the kind filter through "all" plus every kind seen in the
    /// current list (temp-files pane only)
    pub fn cycle_kind_filter(&mut self) {
        if self.view_mode != ViewMode::TempFiles {
            return;
        }
        let kinds = known_kinds(&self.temp.session.records);
        let next = match &self.temp.filter.kind {
            KindFilter::All => kinds.first().cloned().map(KindFilter::Only),
            KindFilter::Only(current) => kinds
                .iter()
                .position(|k| k == current)
                .and_then(|i| kinds.get(i + 1))
                .cloned()
                .map(KindFilter::Only),
        };
        self.temp.filter.kind = next.unwrap_or(KindFilter::All);
        self.temp.computed.dirty = true;
    }

    // --- Views ---

    /// Switch to the next pane, fetching it on first visit
    pub fn next_view(&mut self) {
        self.view_mode = self.view_mode.next();
        self.fetch_if_unvisited();
    }

    /// Switch to the previous pane (with two panes, same as next)
    pub fn prev_view(&mut self) {
        self.next_view();
    }

    fn fetch_if_unvisited(&mut self) {
        let view = self.view_mode;
        let pane = self.pane();
        if pane.session.phase == Phase::Loading
            && pane.session.records.is_empty()
            && !self.is_scanning()
        {
            self.start_fetch(view);
        }
    }

    /// Ensure the active pane's derived rows are up to date, clamp cursor
    pub fn ensure_views_computed(&mut self) {
        let sort = match self.view_mode {
            ViewMode::LargeFiles => Some((self.large.sort_key, self.large.sort_order)),
            ViewMode::TempFiles => None,
        };
        let pane = self.pane_mut();
        if pane.computed.dirty {
            let Pane {
                session,
                filter,
                computed,
                cursor,
                ..
            } = pane;
            computed.rebuild(session, filter, sort);

            let count = computed.rows.len();
            if cursor.selected_index >= count {
                cursor.selected_index = count.saturating_sub(1);
            }
            if cursor.scroll_offset > 0 && cursor.scroll_offset >= count {
                cursor.scroll_offset = count.saturating_sub(1);
            }
        }
    }

    // --- Navigation ---

    /// Ensure the given index is visible within the scroll viewport
    fn ensure_visible_for(selected: &mut usize, scroll: &mut usize, visible_height: usize) {
        if *selected < *scroll {
            *scroll = *selected;
        } else if *selected >= *scroll + visible_height {
            *scroll = *selected - visible_height + 1;
        }
    }

    /// Move cursor up
    pub fn move_up(&mut self) {
        let vh = self.visible_height;
        let cursor = &mut self.pane_mut().cursor;
        if cursor.selected_index > 0 {
            cursor.selected_index -= 1;
        }
        Self::ensure_visible_for(&mut cursor.selected_index, &mut cursor.scroll_offset, vh);
    }

    /// Move cursor down
    pub fn move_down(&mut self) {
        let count = self.pane().computed.rows.len();
        let vh = self.visible_height;
        let cursor = &mut self.pane_mut().cursor;
        if cursor.selected_index < count.saturating_sub(1) {
            cursor.selected_index += 1;
        }
        Self::ensure_visible_for(&mut cursor.selected_index, &mut cursor.scroll_offset, vh);
    }

    /// Move cursor up by a page
    pub fn page_up(&mut self) {
        let vh = self.visible_height;
        let page_size = vh.saturating_sub(2);
        let cursor = &mut self.pane_mut().cursor;
        cursor.selected_index = cursor.selected_index.saturating_sub(page_size);
        Self::ensure_visible_for(&mut cursor.selected_index, &mut cursor.scroll_offset, vh);
    }

    /// Move cursor down by a page
    pub fn page_down(&mut self) {
        let count = self.pane().computed.rows.len();
        let vh = self.visible_height;
        let page_size = vh.saturating_sub(2);
        let cursor = &mut self.pane_mut().cursor;
        cursor.selected_index = (cursor.selected_index + page_size).min(count.saturating_sub(1));
        Self::ensure_visible_for(&mut cursor.selected_index, &mut cursor.scroll_offset, vh);
    }

    /// Go to first row
    pub fn go_to_first(&mut self) {
        let vh = self.visible_height;
        let cursor = &mut self.pane_mut().cursor;
        cursor.selected_index = 0;
        Self::ensure_visible_for(&mut cursor.selected_index, &mut cursor.scroll_offset, vh);
    }

    /// Go to last row
    pub fn go_to_last(&mut self) {
        let count = self.pane().computed.rows.len();
        let vh = self.visible_height;
        let cursor = &mut self.pane_mut().cursor;
        cursor.selected_index = count.saturating_sub(1);
        Self::ensure_visible_for(&mut cursor.selected_index, &mut cursor.scroll_offset, vh);
    }

    // --- Misc ---

    /// Show help overlay
    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
    }

    /// Hide help overlay
    pub fn hide_help(&mut self) {
        self.mode = AppMode::Dashboard;
    }

    /// Advance spinner animation
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % 10;
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Threshold shown in the header (large-files pane)
    pub fn min_size_bytes(&self) -> u64 {
        self.min_size_bytes
    }

    /// Category shown in the header (temp-files pane)
    pub fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str, name: &str, size: u64) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            path: format!("/data/{name}"),
            size,
            kind: "temp".to_string(),
            last_modified: Utc::now(),
        }
    }

    // Nothing listens on port 1; worker threads spawned by these tests
    // fail fast and their outcomes are never polled.
    fn state() -> AppState {
        let client = ApiClient::new("http://localhost:1").unwrap();
        AppState::new(client, 100_000_000, "temp".to_string(), 50)
    }

    fn freed(files_removed: u64, space_freed: u64) -> CleanupResult {
        CleanupResult {
            files_removed,
            space_freed,
            categories: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_cleanup_refetch_waits_out_in_flight_fetch() {
        let mut state = state();
        let listing = vec![
            record("1", "a.bin", 600_000_000),
            record("2", "b.bin", 700_000_000),
        ];
        state.large.session.fetch_ok(listing.clone());
        state.large.session.selection = state.large.session.selection.toggled("1");

        // A user refresh is already in flight when the cleanup lands
        let (fetch_tx, fetch_rx) = mpsc::channel();
        state.fetch_receiver = Some((ViewMode::LargeFiles, fetch_rx));
        let (cleanup_tx, cleanup_rx) = mpsc::channel();
        state.cleanup_receiver = Some((ViewMode::LargeFiles, cleanup_rx));

        cleanup_tx.send(Ok(freed(1, 600_000_000))).unwrap();
        state.poll_cleanup();

        // The re-fetch cannot start yet, but it must not be dropped
        assert_eq!(state.pending_refetch, Some(ViewMode::LargeFiles));
        assert!(state.large.session.selection.is_empty());

        // The superseded refresh lands with the pre-cleanup list
        fetch_tx.send(Ok(listing)).unwrap();
        state.poll_fetch();

        // Now the owed re-fetch is in flight and the banner survives
        assert!(state.pending_refetch.is_none());
        assert!(state.is_scanning());
        assert_eq!(state.large.session.phase, Phase::Scanning);
        assert!(state.large.session.last_cleanup.is_some());
    }

    #[test]
    fn test_cleanup_dispatch_matches_dialog_snapshot() {
        let mut state = state();
        state.view_mode = ViewMode::TempFiles;
        state
            .temp
            .session
            .fetch_ok(vec![record("1", "a.tmp", 10), record("2", "b.tmp", 20)]);
        // "9" was selected before a refresh dropped it from the list
        state.temp.session.selection = state.temp.session.selection.with_all(["1", "9"]);

        state.request_cleanup();
        assert_eq!(state.mode, AppMode::ConfirmCleanup);
        let ids: Vec<&str> = state
            .pending_cleanup
            .as_ref()
            .unwrap()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1"]);

        state.confirm_cleanup();
        assert_eq!(state.mode, AppMode::Dashboard);
        assert!(state.cleanup_receiver.is_some());
    }

    #[test]
    fn test_request_cleanup_ignores_fully_stale_selection() {
        let mut state = state();
        state.large.session.fetch_ok(vec![record("1", "a.bin", 10)]);
        state.large.session.selection = state.large.session.selection.toggled("9");

        state.request_cleanup();
        assert_eq!(state.mode, AppMode::Dashboard);
        assert!(state.pending_cleanup.is_none());
    }
}
