use super::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Transient generation error pinned to the bottom of the screen.
pub struct ErrorBanner<'a> {
    message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Where the banner goes inside `area`: bottom center, above the status bar.
    pub fn area(&self, area: Rect) -> Rect {
        let width = area.width.saturating_sub(4).min(90);
        let height = 4;
        let bottom = Rect {
            y: area.y + area.height.saturating_sub(height + 3),
            height: height.min(area.height),
            ..area
        };
        centered_rect(width, height, bottom)
    }
}

impl<'a> Widget for ErrorBanner<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let body = vec![
            Line::from(vec![
                Span::styled("Error: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(self.message),
            ]),
        ];
        Paragraph::new(body)
            .style(Style::default().fg(Color::White).bg(Color::Red))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" x to dismiss ")
                    .style(Style::default().bg(Color::Red)),
            )
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
