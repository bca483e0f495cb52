use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Padding, Widget},
};

use super::theme::Theme;

/// Help overlay widget
pub struct HelpView<'a> {
    theme: &'a Theme,
}

impl<'a> HelpView<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Center the help box
        let width = 52.min(area.width.saturating_sub(4));
        let height = 27.min(area.height.saturating_sub(4));
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let help_area = Rect::new(x, y, width, height);

        Clear.render(help_area, buf);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.blue))
            .style(Style::default().bg(self.theme.bg_surface))
            .padding(Padding::uniform(1));

        let inner = block.inner(help_area);
        block.render(help_area, buf);

        let key_style = Style::default()
            .fg(self.theme.yellow)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.theme.fg);
        let section_style = Style::default()
            .fg(self.theme.blue)
            .add_modifier(Modifier::BOLD);

        let help_items = [
            ("", "Views", true),
            ("Tab", "Next view", false),
            ("S-Tab", "Previous view", false),
            ("", "", false),
            ("", "Navigation", true),
            ("↑ k", "Move up", false),
            ("↓ j", "Move down", false),
            ("PgUp/PgDn", "Page up/down", false),
            ("g / G", "First / last row", false),
            ("", "", false),
            ("", "Filtering & sorting", true),
            ("/", "Search name or path", false),
            ("s", "Cycle sort key (Large Files)", false),
            ("o", "Flip sort direction (Large Files)", false),
            ("t", "Cycle type filter (Temp Files)", false),
            ("", "", false),
            ("", "Selection & cleanup", true),
            ("Space", "Toggle selection", false),
            ("a", "Select all filtered", false),
            ("u / Esc", "Clear selection", false),
            ("d", "Clean up selected files", false),
            ("r", "Rescan (retry after errors)", false),
            ("", "", false),
            ("q", "Quit", false),
        ];

        for (i, (key, desc, is_section)) in help_items.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            if *is_section {
                buf.set_string(inner.x, y, *desc, section_style);
            } else {
                buf.set_string(inner.x, y, *key, key_style);
                buf.set_string(inner.x + 11, y, *desc, desc_style);
            }
        }
    }
}
