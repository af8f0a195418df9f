//! Top-level UI layout: scrolling stat groups over a status bar.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::widgets::StatGroupPanel;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let [main_area, status_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border())
        .title(format!(" xray: {} ", app.source_name()))
        .title_style(app.theme.heading());
    let inner = block.inner(main_area);
    f.render_widget(block, main_area);

    draw_groups(f, inner, app);
    draw_status_bar(f, status_area, app);
}

fn draw_groups(f: &mut Frame, area: Rect, app: &AppState) {
    let groups = app.groups();
    if groups.is_empty() {
        let empty = Paragraph::new("No statistics available for this layout.")
            .style(app.theme.description())
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let mut y = area.y;
    for group in groups.iter().skip(app.scroll) {
        if y >= area.bottom() {
            break;
        }
        let panel = StatGroupPanel::new(group, &app.theme);
        let height = panel.height(area.width).min(area.bottom() - y);
        f.render_widget(panel, Rect::new(area.x, y, area.width, height));
        // one blank line between groups
        y = y.saturating_add(height).saturating_add(1);
    }
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let visible = app.visible_group_count();
    let mut spans = vec![
        Span::styled(
            " q:Quit d:Descriptions j/k:Scroll r:Reload",
            app.theme.border(),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{visible}/{} groups", app.layout.groups.len()),
            app.theme.label(),
        ),
    ];

    if let Some((msg, level)) = &app.status_message {
        let color = match level {
            StatusLevel::Info => app.theme.accent,
            StatusLevel::Warning => app.theme.warning,
            StatusLevel::Error => app.theme.negative,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
