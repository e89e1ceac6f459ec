//! Card, bar and list widgets shared by the page components

use marketdash_engine::cells;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{bold, dim, tone_color};
use crate::presentation::view_models::{
    BarItemViewModel, BenchmarkViewModel, HeaderViewModel, KpiCardViewModel, NoteViewModel,
};

/// Filled cells plus track for a bar `columns` wide
pub(crate) fn bar_spans(width_pct: f64, columns: u16, color: Color) -> Vec<Span<'static>> {
    let filled = cells(width_pct, columns);
    vec![
        Span::styled("█".repeat(usize::from(filled)), Style::default().fg(color)),
        Span::styled(
            "░".repeat(usize::from(columns - filled)),
            Style::default().fg(Color::DarkGray),
        ),
    ]
}

/// Page title, subtitle and inert buttons
pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut title = vec![Span::styled(self.model.title.as_str(), bold())];
        for action in &self.model.actions {
            title.push(Span::raw("  "));
            title.push(Span::styled(format!("[ {} ]", action), dim()));
        }
        let lines = vec![
            Line::from(title),
            Line::from(Span::styled(self.model.subtitle.as_str(), dim())),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}

pub struct KpiCardView<'a> {
    model: &'a KpiCardViewModel,
}

impl<'a> KpiCardView<'a> {
    pub fn new(model: &'a KpiCardViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for KpiCardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kpi = self.model;
        let block = Block::default()
            .title(format!(" {} ", kpi.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let lines = vec![
            Line::from(vec![
                Span::styled(kpi.value.as_str(), bold()),
                Span::raw(" "),
                Span::styled(
                    format!("{} {}", kpi.indicator.glyph, kpi.change),
                    Style::default().fg(tone_color(kpi.indicator.tone)),
                ),
            ]),
            Line::from(Span::styled(kpi.description.as_str(), dim())),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Labelled bars with the score printed to one decimal
pub struct BarListView<'a> {
    title: &'a str,
    items: &'a [BarItemViewModel],
}

impl<'a> BarListView<'a> {
    pub fn new(title: &'a str, items: &'a [BarItemViewModel]) -> Self {
        Self { title, items }
    }
}

impl<'a> Widget for BarListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let label_width = self
            .items
            .iter()
            .map(|i| i.label.chars().count())
            .max()
            .unwrap_or(0);
        let columns = inner.width.saturating_sub(label_width as u16 + 8);

        let lines: Vec<Line> = self
            .items
            .iter()
            .map(|item| {
                let mut spans = vec![Span::raw(format!(
                    "{:<width$} ",
                    item.label,
                    width = label_width
                ))];
                spans.extend(bar_spans(item.width_pct, columns, Color::Cyan));
                spans.push(Span::raw(format!(" {:.1}", item.score_pct)));
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Value vs target bars
pub struct BenchmarkListView<'a> {
    title: &'a str,
    metrics: &'a [BenchmarkViewModel],
}

impl<'a> BenchmarkListView<'a> {
    pub fn new(title: &'a str, metrics: &'a [BenchmarkViewModel]) -> Self {
        Self { title, metrics }
    }
}

impl<'a> Widget for BenchmarkListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for m in self.metrics {
            lines.push(Line::from(vec![
                Span::styled(m.metric.as_str(), bold()),
                Span::raw(format!("  {}{}", m.value, m.unit)),
                Span::styled(format!(" / target {}{}", m.target, m.unit), dim()),
            ]));
            lines.push(Line::from(bar_spans(m.width_pct, inner.width, Color::Green)));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

pub struct NotesView<'a> {
    title: &'a str,
    notes: &'a [NoteViewModel],
}

impl<'a> NotesView<'a> {
    pub fn new(title: &'a str, notes: &'a [NoteViewModel]) -> Self {
        Self { title, notes }
    }
}

impl<'a> Widget for NotesView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL);

        let mut lines = Vec::new();
        for note in self.notes {
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", note.icon.glyph())),
                Span::styled(note.title.as_str(), bold()),
            ]));
            lines.push(Line::from(Span::styled(format!("  {}", note.detail), dim())));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_overview;
    use crate::presentation::views::tui::test_support::{buffer_lines, terminal};

    #[test]
    fn test_forecast_accuracy_card_buffer() {
        let result = present_overview();
        let card = &result.content.kpis[0];
        let mut terminal = terminal(40, 4);
        terminal
            .draw(|f| f.render_widget(KpiCardView::new(card), f.area()))
            .unwrap();

        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[0].contains("Forecast Accuracy"));
        assert!(lines[1].contains("94.2% ▲ +20%"));
    }

    #[test]
    fn test_down_trend_card_buffer() {
        let result = present_overview();
        let card = &result.content.kpis[2];
        let mut terminal = terminal(40, 4);
        terminal
            .draw(|f| f.render_widget(KpiCardView::new(card), f.area()))
            .unwrap();

        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[1].contains("▼ -35%"));
    }

    #[test]
    fn test_bar_spans_fill() {
        let spans = bar_spans(50.0, 10, Color::Cyan);
        assert_eq!(spans[0].content.chars().count(), 5);
        assert_eq!(spans[1].content.chars().count(), 5);
    }
}
