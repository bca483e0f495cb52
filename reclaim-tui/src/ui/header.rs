use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use reclaim_core::{format_count, format_size};

use crate::app::{AppState, ViewMode};

use super::theme::Theme;

/// Braille spinner characters
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Header widget showing title, view tabs, and fetch status
pub struct Header<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        // Title
        let title = "RECLAIM";
        let title_style = Style::default()
            .fg(self.theme.blue)
            .add_modifier(Modifier::BOLD);
        buf.set_string(area.x + 1, area.y, title, title_style);

        // View tabs
        let mut x = area.x + 10;
        for view in [ViewMode::LargeFiles, ViewMode::TempFiles] {
            let label = format!(" {} ", view.label());
            let style = if view == self.state.view_mode {
                Style::default()
                    .bg(self.theme.bg_highlight)
                    .fg(self.theme.fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.fg_muted)
            };
            buf.set_string(x, area.y, &label, style);
            x += label.len() as u16 + 1;
        }

        // Fetch context for the active view
        let context = match self.state.view_mode {
            ViewMode::LargeFiles => format!("> {}", format_size(self.state.min_size_bytes())),
            ViewMode::TempFiles => format!("category: {}", self.state.category()),
        };
        buf.set_string(x + 1, area.y, &context, Style::default().fg(self.theme.fg_dim));

        // Status (right-aligned)
        let pane = self.state.pane();
        let status = if self.state.is_cleaning_up() {
            format!(
                "{} cleaning up...",
                SPINNER[self.state.spinner_frame % SPINNER.len()]
            )
        } else if self.state.is_scanning() {
            format!(
                "{} scanning...",
                SPINNER[self.state.spinner_frame % SPINNER.len()]
            )
        } else {
            format!(
                "{} files, {}",
                format_count(pane.computed.totals.total_count as u64),
                format_size(pane.computed.totals.total_bytes)
            )
        };

        let status_x = area.x + area.width.saturating_sub(status.chars().count() as u16 + 2);
        let status_style = if self.state.is_scanning() || self.state.is_cleaning_up() {
            Style::default().fg(self.theme.yellow)
        } else {
            Style::default().fg(self.theme.fg_dim)
        };
        buf.set_string(status_x, area.y, &status, status_style);
    }
}
