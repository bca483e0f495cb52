use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use reclaim_core::{FileRecord, SelectionSet, Severity, format_size, size_percentage};

use crate::app::ViewMode;

use super::bar_chart::render_bar;
use super::theme::Theme;

/// Flat file table shared by both panes; the temp-files pane adds a
/// kind column, the large-files pane a share bar.
pub struct FileListView<'a> {
    rows: &'a [FileRecord],
    view_mode: ViewMode,
    total_bytes: u64,
    selected_index: usize,
    scroll_offset: usize,
    selection: &'a SelectionSet,
    theme: &'a Theme,
}

impl<'a> FileListView<'a> {
    pub fn new(
        rows: &'a [FileRecord],
        view_mode: ViewMode,
        total_bytes: u64,
        selected_index: usize,
        scroll_offset: usize,
        selection: &'a SelectionSet,
        theme: &'a Theme,
    ) -> Self {
        Self {
            rows,
            view_mode,
            total_bytes,
            selected_index,
            scroll_offset,
            selection,
            theme,
        }
    }
}

impl Widget for FileListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 50 {
            return;
        }

        if self.rows.is_empty() {
            let msg = "No matching files";
            let x = area.x + (area.width.saturating_sub(msg.len() as u16)) / 2;
            let y = area.y + area.height / 2;
            buf.set_string(x, y, msg, Style::default().fg(self.theme.fg_dim));
            return;
        }

        // Column widths
        let kind_width: usize = if self.view_mode == ViewMode::TempFiles {
            8
        } else {
            0
        };
        let bar_width: usize = if self.view_mode == ViewMode::LargeFiles {
            14
        } else {
            0
        };
        let date_width: usize = 17;
        let size_width: usize = 10;
        let right_width = kind_width + bar_width + date_width + size_width;
        let path_width = (area.width as usize).saturating_sub(right_width + 4);

        for (i, record) in self
            .rows
            .iter()
            .skip(self.scroll_offset)
            .take(area.height as usize)
            .enumerate()
        {
            let y = area.y + i as u16;
            let is_cursor = i + self.scroll_offset == self.selected_index;
            let is_selected = self.selection.contains(&record.id);

            let row_style = if is_cursor {
                Style::default()
                    .bg(self.theme.selection_bg)
                    .fg(self.theme.selection_fg)
            } else if is_selected {
                Style::default()
                    .bg(self.theme.bg_highlight)
                    .fg(self.theme.fg)
            } else {
                Style::default().fg(self.theme.fg)
            };
            let row_bg = if is_cursor {
                self.theme.selection_bg
            } else if is_selected {
                self.theme.bg_highlight
            } else {
                self.theme.bg
            };

            // Clear the row
            for x in 0..area.width {
                buf.set_string(area.x + x, y, " ", row_style);
            }

            let mut x = area.x;

            // Selection marker
            let marker = if is_selected { "▪ " } else { "  " };
            let marker_style = if is_cursor {
                row_style
            } else {
                Style::default().fg(self.theme.purple).bg(row_bg)
            };
            buf.set_string(x, y, marker, marker_style);
            x += 2;

            // Name, then path dimmed
            let name_len = record.name.chars().count();
            let avail = path_width.saturating_sub(2);
            if name_len < avail.saturating_sub(3) {
                buf.set_string(x, y, &record.name, row_style);
                let path_avail = avail - name_len - 2;
                let display_path = if record.path.chars().count() > path_avail {
                    let chars: Vec<char> = record.path.chars().collect();
                    let start = chars.len() - path_avail + 3;
                    format!("...{}", chars[start..].iter().collect::<String>())
                } else {
                    record.path.clone()
                };
                let path_style = if is_cursor {
                    row_style
                } else {
                    Style::default().fg(self.theme.fg_muted).bg(row_bg)
                };
                buf.set_string(x + name_len as u16 + 2, y, &display_path, path_style);
            } else {
                let display: String = record.name.chars().take(avail).collect();
                buf.set_string(x, y, &display, row_style);
            }

            // Right-aligned section
            let mut right_x = area.x + area.width.saturating_sub(right_width as u16 + 2);

            // Kind tag (temp files)
            if kind_width > 0 {
                let kind: String = record.kind.chars().take(kind_width - 1).collect();
                let kind_style = if is_cursor {
                    row_style
                } else {
                    Style::default().fg(self.theme.teal).bg(row_bg)
                };
                buf.set_string(right_x, y, &kind, kind_style);
                right_x += kind_width as u16;
            }

            // Modified date
            let date_str = record.last_modified.format("%Y-%m-%d %H:%M").to_string();
            let date_style = if is_cursor {
                row_style
            } else {
                Style::default().fg(self.theme.fg_dim).bg(row_bg)
            };
            buf.set_string(right_x, y, &date_str, date_style);
            right_x += date_width as u16;

            // Share-of-total bar (large files)
            if bar_width > 0 {
                let percentage = size_percentage(record.size, self.total_bytes);
                let bar = render_bar(percentage, bar_width - 2);
                let bar_style = if is_cursor {
                    row_style
                } else {
                    Style::default()
                        .fg(self.theme.severity_color(Severity::of(record.size)))
                        .bg(row_bg)
                };
                buf.set_string(right_x, y, &bar, bar_style);
                right_x += bar_width as u16;
            }

            // Size, tinted by severity class
            let size_str = format!("{:>9}", format_size(record.size));
            let size_style = if is_cursor {
                row_style
            } else {
                Style::default()
                    .fg(self.theme.severity_color(Severity::of(record.size)))
                    .bg(row_bg)
            };
            buf.set_string(right_x, y, &size_str, size_style);
        }
    }
}
