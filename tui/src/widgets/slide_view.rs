use super::ACCENT;
use deck_common::Slide;
use deck_core::layout::{arrange, Arrangement, HorizontalAlign};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Editor preview or fullscreen presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Preview,
    Fullscreen,
}

/// Renders one slide according to its layout arrangement.
pub struct SlideView<'a> {
    slide: Option<&'a Slide>,
    scale: Scale,
}

impl<'a> SlideView<'a> {
    pub fn new(slide: Option<&'a Slide>, scale: Scale) -> Self {
        Self { slide, scale }
    }

    fn indent(&self) -> u16 {
        match self.scale {
            Scale::Preview => 2,
            Scale::Fullscreen => 6,
        }
    }
}

/// Lines for an arrangement, and whether they should sit in the vertical middle.
fn arrangement_lines<'a>(arrangement: &Arrangement<'a>, scale: Scale) -> (Vec<Line<'a>>, bool) {
    let title_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let subtitle_style = Style::default().fg(Color::Gray);
    let gap = match scale {
        Scale::Preview => 1,
        Scale::Fullscreen => 2,
    };

    match *arrangement {
        Arrangement::TitleCard { title, subtitle } | Arrangement::Closing { title, subtitle } => {
            let mut lines = vec![Line::from(Span::styled(title, title_style))];
            if let Some(subtitle) = subtitle {
                lines.extend(std::iter::repeat(Line::from("")).take(gap));
                lines.push(Line::from(Span::styled(subtitle, subtitle_style)));
            }
            (lines, true)
        }
        Arrangement::SectionHeading { heading } => (
            vec![Line::from(Span::styled(
                heading,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))],
            true,
        ),
        Arrangement::Bulleted { heading, bullets } => {
            let mut lines = vec![
                Line::from(Span::styled(heading, title_style)),
                Line::from(Span::styled(
                    "─".repeat(heading.chars().count().max(8)),
                    Style::default().fg(ACCENT),
                )),
                Line::from(""),
            ];
            for (i, point) in bullets.iter().enumerate() {
                if i > 0 && scale == Scale::Fullscreen {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(ACCENT)),
                    Span::styled(point.as_str(), Style::default().fg(Color::Gray)),
                ]));
            }
            (lines, false)
        }
    }
}

fn welcome_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Welcome to the AI Presentation Builder",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter a topic in the right panel to generate your slides.",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

impl<'a> Widget for SlideView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = match self.scale {
            Scale::Preview => Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
            Scale::Fullscreen => Block::default(),
        };
        let inner = block.inner(area);
        block.render(area, buf);

        let (lines, alignment, centered) = match self.slide {
            Some(slide) => {
                let arrangement = arrange(slide);
                let alignment = match arrangement.align() {
                    HorizontalAlign::Center => Alignment::Center,
                    HorizontalAlign::Left => Alignment::Left,
                };
                let (lines, centered) = arrangement_lines(&arrangement, self.scale);
                (lines, alignment, centered)
            }
            None if self.scale == Scale::Preview => (welcome_lines(), Alignment::Center, true),
            None => return,
        };

        let indent = self.indent();
        let body = Rect {
            x: inner.x + indent.min(inner.width / 2),
            width: inner.width.saturating_sub(indent.min(inner.width / 2) * 2),
            ..inner
        };
        let top = if centered {
            let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
            body.height.saturating_sub(height) / 2
        } else {
            body.height.min(1)
        };
        let body = Rect {
            y: body.y + top,
            height: body.height.saturating_sub(top),
            ..body
        };

        Paragraph::new(Text::from(lines))
            .alignment(alignment)
            .wrap(Wrap { trim: false })
            .render(body, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_text;
    use deck_common::SlideLayout;

    fn render(slide: Option<&Slide>, scale: Scale) -> String {
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);
        SlideView::new(slide, scale).render(area, &mut buf);
        buffer_text(&buf)
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_content_slide_lists_bullets() {
        let slide = Slide::new("Key Points", lines(&["first", "second"]), SlideLayout::Content);
        let text = render(Some(&slide), Scale::Preview);
        assert!(text.contains("Key Points"));
        assert!(text.contains("• first"));
        assert!(text.contains("• second"));
    }

    #[test]
    fn test_title_slide_shows_only_first_line() {
        let slide = Slide::new("Solar", lines(&["Bright future", "hidden"]), SlideLayout::Title);
        let text = render(Some(&slide), Scale::Fullscreen);
        assert!(text.contains("Solar"));
        assert!(text.contains("Bright future"));
        assert!(!text.contains("hidden"));
        assert!(!text.contains("•"));
    }

    #[test]
    fn test_section_header_has_no_bullets() {
        let slide = Slide::new("Part Two", lines(&["nope"]), SlideLayout::SectionHeader);
        let text = render(Some(&slide), Scale::Preview);
        assert!(text.contains("Part Two"));
        assert!(!text.contains("nope"));
    }

    #[test]
    fn test_title_is_centered() {
        let slide = Slide::new("Mid", vec![], SlideLayout::ThankYou);
        let area = Rect::new(0, 0, 40, 9);
        let mut buf = Buffer::empty(area);
        SlideView::new(Some(&slide), Scale::Fullscreen).render(area, &mut buf);
        let text = buffer_text(&buf);
        let row = text.lines().find(|l| l.contains("Mid")).unwrap_or_default();
        let col = row.find("Mid").unwrap_or_default();
        assert!(col > 10, "title should be centered, found at column {col}");
    }

    #[test]
    fn test_centered_slide_taller_than_area_starts_at_top() {
        let slide = Slide::new("Solar", lines(&["Bright future"]), SlideLayout::Title);
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);
        SlideView::new(Some(&slide), Scale::Fullscreen).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.lines().next().unwrap_or_default().contains("Solar"));
    }

    #[test]
    fn test_empty_deck_views() {
        assert!(render(None, Scale::Preview).contains("Welcome to the AI Presentation Builder"));
        assert!(render(None, Scale::Fullscreen).trim().is_empty());
    }
}
