//! Single statistic card: label, value and an optional description.
//!
//! The label falls back to the statistic identifier when the document
//! gives none. Height follows the wrapped text, so long descriptions are
//! never cut off.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use xray_core::StatValue;

use crate::theme::Theme;

#[derive(Clone, Copy)]
pub struct SimpleStat<'a> {
    id: &'a str,
    stat: &'a StatValue,
    show_description: bool,
    theme: &'a Theme,
}

impl<'a> SimpleStat<'a> {
    /// Label plus value, before wrapping.
    pub const BASE_HEIGHT: u16 = 2;

    pub fn new(id: &'a str, stat: &'a StatValue, show_description: bool, theme: &'a Theme) -> Self {
        Self {
            id,
            stat,
            show_description,
            theme,
        }
    }

    fn description(&self) -> Option<&'a str> {
        if self.show_description {
            self.stat.description.as_deref()
        } else {
            None
        }
    }

    /// Rows needed to draw the card at `width` columns without clipping.
    pub fn height(&self, width: u16) -> u16 {
        let lines = self.paragraph().line_count(width);
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .max(Self::BASE_HEIGHT)
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled(self.stat.label_or(self.id), self.theme.label())),
            Line::from(Span::styled(
                self.stat.value.to_string(),
                Style::default()
                    .fg(self.theme.datum_color(&self.stat.value))
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(description) = self.description() {
            lines.push(Line::from(Span::styled(description, self.theme.description())));
        }
        lines
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.lines()).wrap(Wrap { trim: true })
    }
}

impl<'a> Widget for SimpleStat<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.paragraph().render(area, buf);
    }
}
