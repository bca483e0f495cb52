use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Widget},
};

use super::theme::Theme;

/// Braille spinner characters
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Full-pane spinner shown while the initial fetch is in flight
pub struct LoadingView<'a> {
    spinner_frame: usize,
    label: &'a str,
    theme: &'a Theme,
}

impl<'a> LoadingView<'a> {
    pub fn new(spinner_frame: usize, label: &'a str, theme: &'a Theme) -> Self {
        Self {
            spinner_frame,
            label,
            theme,
        }
    }
}

impl Widget for LoadingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 {
            return;
        }

        let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
        let message = format!("{spinner} {}", self.label);
        let x = inner.x + (inner.width.saturating_sub(message.chars().count() as u16)) / 2;
        let y = inner.y + inner.height / 2;
        buf.set_string(
            x,
            y,
            &message,
            Style::default()
                .fg(self.theme.yellow)
                .add_modifier(Modifier::BOLD),
        );
    }
}
