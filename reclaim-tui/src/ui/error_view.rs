use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Widget},
};

use super::theme::Theme;

/// Full-pane error state shown when a fetch fails. Blocks the view
/// until the user retries.
pub struct ErrorView<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ErrorView<'a> {
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for ErrorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.red))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 {
            return;
        }

        let y = inner.y + inner.height / 2;

        let title = "Could not reach the cleanup backend";
        let tx = inner.x + (inner.width.saturating_sub(title.len() as u16)) / 2;
        buf.set_string(
            tx,
            y.saturating_sub(1),
            title,
            Style::default()
                .fg(self.theme.red)
                .add_modifier(Modifier::BOLD),
        );

        let detail: String = self
            .message
            .chars()
            .take(inner.width.saturating_sub(2) as usize)
            .collect();
        let dx = inner.x + (inner.width.saturating_sub(detail.chars().count() as u16)) / 2;
        buf.set_string(dx, y, &detail, Style::default().fg(self.theme.fg_dim));

        let hint = "Press r to retry";
        let hx = inner.x + (inner.width.saturating_sub(hint.len() as u16)) / 2;
        buf.set_string(hx, y + 2, hint, Style::default().fg(self.theme.fg));
    }
}
