use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Padding, Widget},
};
use reclaim_core::{FileRecord, format_size};

use super::theme::Theme;

/// Cleanup confirmation dialog listing the selected records
pub struct ConfirmCleanupView<'a> {
    items: &'a [FileRecord],
    theme: &'a Theme,
}

impl<'a> ConfirmCleanupView<'a> {
    pub fn new(items: &'a [FileRecord], theme: &'a Theme) -> Self {
        Self { items, theme }
    }
}

impl Widget for ConfirmCleanupView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.items.len();
        let total_size: u64 = self.items.iter().map(|r| r.size).sum();
        let show_count = count.min(5);
        let has_more = count > 5;

        // Dynamic height: header(1) + paths(show_count) + "...and N more"
        // + blank(1) + total(1) + blank(1) + hints(1)
        let content_lines = 1 + show_count + if has_more { 1 } else { 0 } + 1 + 1 + 1 + 1;
        let height = (content_lines as u16 + 4).min(area.height.saturating_sub(4));
        let width = 62.min(area.width.saturating_sub(4));

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(" Clean Up Files? ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.red))
            .style(Style::default().bg(self.theme.bg_surface))
            .padding(Padding::uniform(1));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let text_style = Style::default().fg(self.theme.fg);
        let path_style = Style::default()
            .fg(self.theme.yellow)
            .add_modifier(Modifier::BOLD);
        let dim_style = Style::default().fg(self.theme.fg_dim);
        let key_style = Style::default()
            .fg(self.theme.green)
            .add_modifier(Modifier::BOLD);

        let mut row = inner.y;
        let max_w = (inner.width as usize).saturating_sub(2);

        // Header line
        let header = format!(
            "Delete {} file{} on the backend:",
            count,
            if count == 1 { "" } else { "s" }
        );
        buf.set_string(inner.x, row, &header, text_style);
        row += 1;

        // List up to 5 paths with sizes
        for record in self.items.iter().take(5) {
            let size_part = format!("  ({})", format_size(record.size));
            let avail = max_w.saturating_sub(size_part.len() + 2);
            let display_path = if record.path.chars().count() > avail {
                let chars: Vec<char> = record.path.chars().collect();
                let start = chars.len() - avail + 3;
                format!("...{}", chars[start..].iter().collect::<String>())
            } else {
                record.path.clone()
            };
            buf.set_string(inner.x + 1, row, &display_path, path_style);
            buf.set_string(
                inner.x + 1 + display_path.chars().count() as u16,
                row,
                &size_part,
                dim_style,
            );
            row += 1;
        }

        // "...and N more"
        if has_more {
            let more_text = format!("  ...and {} more", count - 5);
            buf.set_string(inner.x, row, &more_text, dim_style);
            row += 1;
        }

        row += 1; // blank line

        // Total size
        let total_str = format!("Total: {}", format_size(total_size));
        buf.set_string(inner.x, row, &total_str, text_style);
        row += 1;

        // Action hints at bottom
        let hints_y = row.max(inner.y + inner.height.saturating_sub(1));
        buf.set_string(inner.x, hints_y, "[y]", key_style);
        buf.set_string(inner.x + 4, hints_y, "Yes, clean up", text_style);
        buf.set_string(inner.x + 20, hints_y, "[n]", key_style);
        buf.set_string(inner.x + 24, hints_y, "Cancel", text_style);
    }
}
