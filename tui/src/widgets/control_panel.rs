use super::ACCENT;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Topic input, generate action and present action.
pub struct ControlPanel<'a> {
    topic: &'a str,
    error: Option<&'a str>,
    focused: bool,
    loading: bool,
    slide_count: usize,
    spinner_frame: usize,
}

impl<'a> ControlPanel<'a> {
    pub fn new(topic: &'a str, focused: bool) -> Self {
        Self {
            topic,
            error: None,
            focused,
            loading: false,
            slide_count: 0,
            spinner_frame: 0,
        }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn loading(mut self, loading: bool, spinner_frame: usize) -> Self {
        self.loading = loading;
        self.spinner_frame = spinner_frame;
        self
    }

    pub fn slide_count(mut self, slide_count: usize) -> Self {
        self.slide_count = slide_count;
        self
    }
}

impl<'a> Widget for ControlPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Slide Builder ");
        let inner = outer.inner(area);
        outer.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let input_style = if self.focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input_text = if self.topic.is_empty() {
            Text::from(Span::styled(
                "e.g., The Future of Renewable Energy",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else if self.focused {
            Text::from(Line::from(vec![Span::raw(self.topic), Span::styled("▏", input_style)]))
        } else {
            Text::from(self.topic)
        };
        Paragraph::new(input_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(input_style)
                    .title("Presentation Topic"),
            )
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);

        if let Some(error) = self.error {
            Paragraph::new(Span::styled(error, Style::default().fg(Color::LightRed)))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        let action = if self.loading {
            let frame = SPINNER[self.spinner_frame % SPINNER.len()];
            Line::from(Span::styled(
                format!("{frame} Generating..."),
                Style::default().fg(Color::Gray),
            ))
        } else {
            Line::from(vec![
                Span::styled("[Enter] ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
                Span::raw("Generate Slides"),
            ])
        };
        Paragraph::new(action).render(chunks[2], buf);

        if self.slide_count > 0 {
            Paragraph::new(Line::from(vec![
                Span::styled(
                    "[p] ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Present"),
            ]))
            .render(chunks[4], buf);
        }
    }
}
