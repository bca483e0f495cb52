use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use reclaim_core::format_size;

use crate::app::{AppMode, AppState, ViewMode};

use super::theme::Theme;

/// One-line bar under the header: search box, active filters, sort
/// settings, selection totals, and cleanup outcome messages.
pub struct StatusBar<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let pane = self.state.pane();
        let mut x = area.x + 1;

        // Search box
        let searching = self.state.mode == AppMode::Search;
        let search_label = if searching {
            format!("/{}▌", pane.filter.search)
        } else if pane.filter.search.is_empty() {
            "/ search".to_string()
        } else {
            format!("/{}", pane.filter.search)
        };
        let search_style = if searching {
            Style::default()
                .fg(self.theme.fg)
                .bg(self.theme.bg_highlight)
        } else if pane.filter.search.is_empty() {
            Style::default().fg(self.theme.fg_muted)
        } else {
            Style::default().fg(self.theme.teal)
        };
        buf.set_string(x, area.y, &search_label, search_style);
        x += search_label.chars().count() as u16 + 3;

        // Sort / kind filter indicator
        let mode_label = match self.state.view_mode {
            ViewMode::LargeFiles => format!(
                "sort: {} {}",
                pane.sort_key.label(),
                pane.sort_order.label()
            ),
            ViewMode::TempFiles => format!("type: {}", pane.filter.kind.label()),
        };
        buf.set_string(x, area.y, &mode_label, Style::default().fg(self.theme.fg_dim));
        x += mode_label.len() as u16 + 3;

        // Cleanup outcome: success banner or non-blocking error
        if let Some(result) = &pane.session.last_cleanup {
            let banner = format!(
                "✓ removed {} files, freed {}",
                result.files_removed,
                format_size(result.space_freed)
            );
            buf.set_string(
                x,
                area.y,
                &banner,
                Style::default()
                    .fg(self.theme.green)
                    .add_modifier(Modifier::BOLD),
            );
        } else if let Some(error) = &pane.session.cleanup_error {
            let message = format!("✗ cleanup failed: {error}");
            let max = area.width.saturating_sub(x - area.x + 24) as usize;
            let display: String = message.chars().take(max).collect();
            buf.set_string(x, area.y, &display, Style::default().fg(self.theme.red));
        }

        // Selection totals (right-aligned)
        let totals = pane.computed.totals;
        if totals.selected_count > 0 {
            let selected = format!(
                "{} selected, {}",
                totals.selected_count,
                format_size(totals.selected_bytes)
            );
            let sx = area.x + area.width.saturating_sub(selected.len() as u16 + 2);
            buf.set_string(
                sx,
                area.y,
                &selected,
                Style::default()
                    .fg(self.theme.purple)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}
