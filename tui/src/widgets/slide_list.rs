use super::ACCENT;
use deck_common::Slide;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Sidebar listing slide numbers and titles, with the selection highlighted.
pub struct SlideList<'a> {
    slides: &'a [Slide],
    selected: usize,
    focused: bool,
}

impl<'a> SlideList<'a> {
    pub fn new(slides: &'a [Slide], selected: usize, focused: bool) -> Self {
        Self {
            slides,
            selected,
            focused,
        }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let border = if self.focused { ACCENT } else { Color::DarkGray };
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" Slides ({}) ", self.slides.len()));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        // "12 " prefix plus highlight symbol
        let title_width = usize::from(chunks[0].width).saturating_sub(6);
        let items: Vec<ListItem> = self
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>2} ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::raw(truncate_to_width(&slide.title, title_width)),
                ]))
            })
            .collect();

        if items.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No slides yet",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
            f.render_widget(empty, chunks[0]);
        } else {
            let list = List::new(items)
                .highlight_style(
                    Style::default()
                        .fg(Color::White)
                        .bg(ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▌ ");
            let mut state = ListState::default().with_selected(Some(self.selected));
            f.render_stateful_widget(list, chunks[0], &mut state);
        }

        let hint = Paragraph::new("a add  d delete  ↑↓ select")
            .style(Style::default().fg(Color::Gray));
        f.render_widget(hint, chunks[1]);
    }
}

/// Cut `s` to at most `max` display columns, marking the cut with an ellipsis.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max > 0 {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_text;
    use deck_common::SlideLayout;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a long title", 6), "a lon…");
        assert_eq!(truncate_to_width("日本語タイトル", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_renders_numbered_titles() {
        let slides = vec![
            Slide::new("Intro", vec![], SlideLayout::Title),
            Slide::new("Details", vec![], SlideLayout::Content),
        ];
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal
            .draw(|f| SlideList::new(&slides, 1, true).render(f, f.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Slides (2)"));
        assert!(text.contains(" 1 Intro"));
        assert!(text.contains("▌  2 Details"));
    }
}
