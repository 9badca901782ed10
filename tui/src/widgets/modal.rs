use ratatui::{
    style::Style,
    text::Text,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct Modal<'a> {
    title: &'a str,
    body: &'a str,
}

impl<'a> Modal<'a> {
    pub fn new(title: &'a str, body: &'a str) -> Self {
        Self { title, body }
    }
}

impl<'a> Widget for Modal<'a> {
    fn render(self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        Clear.render(area, buf);
        let widget = Paragraph::new(Text::from(self.body))
            .style(Style::default())
            .block(Block::default().borders(Borders::ALL).title(self.title))
            .wrap(Wrap { trim: true });
        widget.render(area, buf);
    }
}
