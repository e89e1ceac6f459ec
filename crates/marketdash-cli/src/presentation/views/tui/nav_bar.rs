//! Navigation shell: brand, route tabs and the key-hint line

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{bold, dim};
use crate::presentation::view_models::NavigationViewModel;

pub struct NavBarView<'a> {
    model: &'a NavigationViewModel,
}

impl<'a> NavBarView<'a> {
    pub fn new(model: &'a NavigationViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for NavBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(26)]).areas(inner);

        let mut spans = vec![
            Span::styled(
                self.model.brand.as_str(),
                bold().fg(Color::Cyan),
            ),
            Span::raw("   "),
        ];
        for (idx, item) in self.model.items.iter().enumerate() {
            let label = format!(" {} {} ", idx + 1, item.name);
            let style = if item.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans)).render(left, buf);

        Paragraph::new(Line::from(Span::styled(self.model.last_updated.as_str(), dim())))
            .right_aligned()
            .render(right, buf);
    }
}

/// Bottom line listing the keys that apply on the current page
pub struct StatusLineView<'a> {
    hints: &'a [(&'a str, &'a str)],
}

impl<'a> StatusLineView<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self { hints }
    }
}

impl<'a> Widget for StatusLineView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, action) in self.hints {
            spans.push(Span::styled(*key, bold().fg(Color::Yellow)));
            spans.push(Span::styled(format!(" {}  ", action), dim()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::navigation::navigation;
    use crate::presentation::views::tui::test_support::{buffer_lines, terminal};

    #[test]
    fn test_active_item_is_highlighted() {
        let vm = navigation("/data");
        let mut terminal = terminal(100, 2);
        terminal
            .draw(|f| f.render_widget(NavBarView::new(&vm), f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let line = &buffer_lines(buffer)[0];
        assert!(line.contains("MarketAnalytics"));
        assert!(line.contains("Last updated: 2 min ago"));

        let col = line.find(" 2 Data ").unwrap();
        let x = line[..col].chars().count() as u16 + 1;
        assert_eq!(buffer[(x, 0)].bg, Color::Cyan);

        let col = line.find(" 1 Overview ").unwrap();
        let x = line[..col].chars().count() as u16 + 1;
        assert_ne!(buffer[(x, 0)].bg, Color::Cyan);
    }
}
