use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Action, AppMode};

/// Map key events to actions based on current mode
pub fn handle_key(key: KeyEvent, mode: AppMode) -> Action {
    match mode {
        AppMode::Help => handle_key_help(key),
        AppMode::Search => handle_key_search(key),
        AppMode::ConfirmCleanup => handle_key_confirm(key),
        AppMode::Dashboard => handle_key_dashboard(key),
    }
}

fn handle_key_help(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Action::HideHelp,
        _ => Action::Tick,
    }
}

fn handle_key_search(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::CancelSearch,
        KeyCode::Enter => Action::CommitSearch,
        KeyCode::Backspace => Action::SearchBackspace,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char(c) => Action::SearchChar(c),
        _ => Action::Tick,
    }
}

fn handle_key_confirm(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::ConfirmCleanup,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::CancelCleanup,
        _ => Action::Tick,
    }
}

fn handle_key_dashboard(key: KeyEvent) -> Action {
    match key.code {
        // Quit
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Home | KeyCode::Char('g') => Action::GoToFirst,
        KeyCode::End | KeyCode::Char('G') => Action::GoToLast,

        // Views
        KeyCode::Tab => Action::NextView,
        KeyCode::BackTab => Action::PrevView,

        // Selection
        KeyCode::Char(' ') => Action::ToggleSelect,
        KeyCode::Char('a') => Action::SelectAllFiltered,
        KeyCode::Char('u') | KeyCode::Esc => Action::ClearSelection,

        // Filters and sorting
        KeyCode::Char('/') => Action::StartSearch,
        KeyCode::Char('s') => Action::CycleSortKey,
        KeyCode::Char('o') => Action::ToggleSortOrder,
        KeyCode::Char('t') => Action::CycleKindFilter,

        // Backend operations
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('d') => Action::RequestCleanup,

        // Help
        KeyCode::Char('?') => Action::ShowHelp,

        _ => Action::Tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_search_mode_captures_plain_chars() {
        assert_eq!(
            handle_key(key(KeyCode::Char('q')), AppMode::Search),
            Action::SearchChar('q')
        );
        assert_eq!(
            handle_key(key(KeyCode::Esc), AppMode::Search),
            Action::CancelSearch
        );
    }

    #[test]
    fn test_dashboard_cleanup_keys() {
        assert_eq!(
            handle_key(key(KeyCode::Char('d')), AppMode::Dashboard),
            Action::RequestCleanup
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('y')), AppMode::ConfirmCleanup),
            Action::ConfirmCleanup
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('n')), AppMode::ConfirmCleanup),
            Action::CancelCleanup
        );
    }
}
