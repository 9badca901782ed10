use super::slide_view::{Scale, SlideView};
use super::ACCENT;
use deck_common::Slide;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

/// Fullscreen slide with navigation hints and a progress bar.
pub struct PresentationView<'a> {
    slide: Option<&'a Slide>,
    progress: Option<(usize, usize)>,
}

impl<'a> PresentationView<'a> {
    pub fn new(slide: Option<&'a Slide>, progress: Option<(usize, usize)>) -> Self {
        Self { slide, progress }
    }
}

impl<'a> Widget for PresentationView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Nothing to show if the deck emptied out underneath us.
        let (Some(slide), Some((position, total))) = (self.slide, self.progress) else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Paragraph::new(Span::styled("Esc exit", Style::default().fg(Color::DarkGray)))
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[0], buf);

        SlideView::new(Some(slide), Scale::Fullscreen).render(chunks[1], buf);

        let enabled = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let disabled = Style::default().fg(Color::DarkGray);
        let prev_style = if position > 1 { enabled } else { disabled };
        let next_style = if position < total { enabled } else { disabled };
        let nav = Line::from(vec![
            Span::styled("‹ prev", prev_style),
            Span::raw("   "),
            Span::styled(format!("{position} / {total}"), Style::default().fg(Color::Gray)),
            Span::raw("   "),
            Span::styled("next ›", next_style),
        ]);
        Paragraph::new(nav)
            .alignment(ratatui::layout::Alignment::Center)
            .render(chunks[2], buf);

        let ratio = if total == 0 { 0.0 } else { position as f64 / total as f64 };
        Gauge::default()
            .gauge_style(Style::default().fg(ACCENT).bg(Color::DarkGray))
            .ratio(ratio.clamp(0.0, 1.0))
            .label("")
            .render(chunks[3], buf);
    }
}
