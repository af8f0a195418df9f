//! Stat group panel: heading over a bordered four-column grid of cards.
//!
//! Cards flow row-major in the group's identifier order. Each cell gets a
//! right and bottom rule; a row is as tall as its tallest card.

use std::rc::Rc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, BorderType, Borders, Widget},
};
use xray_core::{StatGroup, StatValue};

use crate::theme::Theme;
use crate::widgets::{Heading, SimpleStat};

pub const GRID_COLUMNS: usize = 4;

pub struct StatGroupPanel<'a> {
    group: &'a StatGroup<'a, StatValue>,
    theme: &'a Theme,
}

impl<'a> StatGroupPanel<'a> {
    pub fn new(group: &'a StatGroup<'a, StatValue>, theme: &'a Theme) -> Self {
        Self { group, theme }
    }

    fn cards(&self) -> Vec<SimpleStat<'a>> {
        self.group
            .cards
            .iter()
            .map(|c| SimpleStat::new(c.id, c.stat, c.show_description, self.theme))
            .collect()
    }

    fn columns(inner: Rect) -> Rc<[Rect]> {
        Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS]).split(inner)
    }

    /// Height of each grid row, cell rule included.
    fn row_heights(cards: &[SimpleStat<'_>], columns: &[Rect]) -> Vec<u16> {
        cards
            .chunks(GRID_COLUMNS)
            .map(|row| {
                row.iter()
                    .zip(columns)
                    .map(|(card, column)| card.height(column.width.saturating_sub(1)))
                    .max()
                    .unwrap_or(0)
                    .saturating_add(1)
            })
            .collect()
    }

    /// Total height needed to draw the panel at `width` without clipping.
    /// Saturates at `u16::MAX`.
    pub fn height(&self, width: u16) -> u16 {
        let inner = Rect::new(0, 0, width.saturating_sub(2), 1);
        let rows = Self::row_heights(&self.cards(), &Self::columns(inner))
            .into_iter()
            .fold(0u16, u16::saturating_add);
        Heading::HEIGHT.saturating_add(2).saturating_add(rows)
    }
}

impl<'a> Widget for StatGroupPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let [heading_area, grid_area] =
            Layout::vertical([Constraint::Length(Heading::HEIGHT), Constraint::Min(0)])
                .areas(area);
        Heading::new(self.group.title, self.theme).render(heading_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border());
        let inner = block.inner(grid_area);
        block.render(grid_area, buf);

        let cards = self.cards();
        let columns = Self::columns(inner);
        let heights = Self::row_heights(&cards, &columns);

        let mut y = inner.y;
        let bottom = inner.bottom();
        for (row, height) in cards.chunks(GRID_COLUMNS).zip(heights) {
            if y >= bottom {
                break;
            }
            let height = height.min(bottom - y);
            for (card, column) in row.iter().copied().zip(columns.iter()) {
                let cell = Rect::new(column.x, y, column.width, height);
                let cell_block = Block::default()
                    .borders(Borders::RIGHT | Borders::BOTTOM)
                    .border_style(self.theme.border());
                let card_area = cell_block.inner(cell);
                cell_block.render(cell, buf);
                card.render(card_area, buf);
            }
            y = y.saturating_add(height);
        }
    }
}
