/// User actions that can be performed in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up
    MoveUp,
    /// Move cursor down
    MoveDown,
    /// Move cursor up by a page
    PageUp,
    /// Move cursor down by a page
    PageDown,
    /// Go to first row
    GoToFirst,
    /// Go to last row
    GoToLast,
    /// Switch to next view
    NextView,
    /// Switch to previous view
    PrevView,
    /// Toggle selection of the row under the cursor
    ToggleSelect,
    /// Select every currently filtered row
    SelectAllFiltered,
    /// Clear the selection
    ClearSelection,
    /// Request cleanup of the selection (show confirmation dialog)
    RequestCleanup,
    /// Confirm the pending cleanup
    ConfirmCleanup,
    /// Cancel the pending cleanup
    CancelCleanup,
    /// Re-fetch the current view from the backend (also retries errors)
    Refresh,
    /// Cycle the sort key (large files view)
    CycleSortKey,
    /// Flip the sort direction (large files view)
    ToggleSortOrder,
    /// Cycle the kind filter (temp files view)
    CycleKindFilter,
    /// Enter search input mode
    StartSearch,
    /// Append a character to the search term
    SearchChar(char),
    /// Delete the last character of the search term
    SearchBackspace,
    /// Leave search input mode, keeping the term
    CommitSearch,
    /// Leave search input mode and clear the term
    CancelSearch,
    /// Show help overlay
    ShowHelp,
    /// Hide help overlay
    HideHelp,
    /// Quit the application
    Quit,
    /// No action (for tick events)
    Tick,
}
