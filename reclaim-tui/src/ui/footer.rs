use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use reclaim_core::format_size;

use crate::app::{AppMode, SessionStats, ViewMode};

use super::theme::Theme;

/// Footer widget showing keyboard hints and session stats
pub struct Footer<'a> {
    mode: AppMode,
    view_mode: ViewMode,
    theme: &'a Theme,
    session_stats: &'a SessionStats,
}

impl<'a> Footer<'a> {
    pub fn new(
        mode: AppMode,
        view_mode: ViewMode,
        theme: &'a Theme,
        session_stats: &'a SessionStats,
    ) -> Self {
        Self {
            mode,
            view_mode,
            theme,
            session_stats,
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let hints: Vec<(&str, &str)> = match self.mode {
            AppMode::Dashboard => match self.view_mode {
                ViewMode::LargeFiles => vec![
                    ("Tab", "Views"),
                    ("↑↓", "Navigate"),
                    ("Space", "Select"),
                    ("a", "Select all"),
                    ("s/o", "Sort"),
                    ("/", "Search"),
                    ("d", "Clean up"),
                    ("r", "Rescan"),
                    ("?", "Help"),
                    ("q", "Quit"),
                ],
                ViewMode::TempFiles => vec![
                    ("Tab", "Views"),
                    ("↑↓", "Navigate"),
                    ("Space", "Select"),
                    ("a", "Select all"),
                    ("t", "Type"),
                    ("/", "Search"),
                    ("d", "Clean up"),
                    ("r", "Rescan"),
                    ("?", "Help"),
                    ("q", "Quit"),
                ],
            },
            AppMode::Search => vec![
                ("Enter", "Apply"),
                ("Esc", "Clear"),
                ("type", "to filter name/path"),
            ],
            AppMode::Help => vec![("Esc", "Close help"), ("q", "Quit")],
            AppMode::ConfirmCleanup => vec![("y", "Yes"), ("n", "Cancel")],
        };

        let key_style = Style::default()
            .fg(self.theme.fg)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.theme.fg_dim);
        let sep_style = Style::default().fg(self.theme.border);

        let mut x = area.x + 1;
        for (i, (key, desc)) in hints.iter().enumerate() {
            buf.set_string(x, area.y, *key, key_style);
            x += key.chars().count() as u16 + 1;

            buf.set_string(x, area.y, *desc, desc_style);
            x += desc.chars().count() as u16;

            if i < hints.len() - 1 {
                buf.set_string(x, area.y, "  │  ", sep_style);
                x += 5;
            }

            if x >= area.x + area.width - 5 {
                break;
            }
        }

        // Show freed space on the right side (only after a cleanup)
        if self.session_stats.files_removed > 0 {
            let freed_text = format!(
                "Freed: {} ({} file{})",
                format_size(self.session_stats.bytes_freed),
                self.session_stats.files_removed,
                if self.session_stats.files_removed == 1 {
                    ""
                } else {
                    "s"
                }
            );
            let stats_style = Style::default()
                .fg(self.theme.green)
                .add_modifier(Modifier::BOLD);
            let stats_x = area.x + area.width - freed_text.len() as u16 - 1;
            if stats_x > x + 2 {
                buf.set_string(stats_x, area.y, &freed_text, stats_style);
            }
        }
    }
}
