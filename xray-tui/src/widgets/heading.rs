//! Section heading drawn above a stat group.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

pub struct Heading<'a> {
    text: &'a str,
    theme: &'a Theme,
}

impl<'a> Heading<'a> {
    pub const HEIGHT: u16 = 1;

    pub fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self { text, theme }
    }
}

impl<'a> Widget for Heading<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("▍", self.theme.heading()),
            Span::styled(self.text, self.theme.heading()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
