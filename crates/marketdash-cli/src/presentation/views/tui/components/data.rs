//! Data page: stat cards, searchable source table, quality and task panels
//!
//! The component owns the search text. Edits are reported upward as
//! [`DataAction::SearchChanged`] so the renderer can re-present the page.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::presentation::formatters::{format_pct, format_thousands};
use crate::presentation::view_models::DataViewModel;
use crate::presentation::views::tui::widgets::bar_spans;
use crate::presentation::views::tui::{HeaderView, badge_span, bold, dim};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataAction {
    SearchChanged(String),
}

#[derive(Debug, Default)]
pub struct DataComponent {
    query: String,
    editing: bool,
}

impl DataComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// While editing, every key belongs to the search box
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DataAction> {
        if !self.editing {
            if key.code == KeyCode::Char('/') {
                self.editing = true;
            }
            return None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.editing = false;
                None
            }
            KeyCode::Backspace => {
                self.query.pop()?;
                Some(DataAction::SearchChanged(self.query.clone()))
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                None
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                Some(DataAction::SearchChanged(self.query.clone()))
            }
            _ => None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, vm: &DataViewModel) {
        let [header, cards, search, table, bottom] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(8),
        ])
        .areas(area);

        f.render_widget(HeaderView::new(&vm.header), header);

        let card_areas = Layout::horizontal(vec![Constraint::Ratio(1, 4); 4]).split(cards);
        for (card, slot) in vm.stat_cards.iter().zip(card_areas.iter()) {
            let lines = vec![
                Line::from(Span::styled(card.value.as_str(), bold())),
                Line::from(Span::styled(card.caption.as_str(), dim())),
            ];
            let block = Block::default()
                .title(format!(" {} ", card.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            f.render_widget(Paragraph::new(lines).block(block), *slot);
        }

        self.render_search(f, search, vm);
        render_sources(f, table, vm);

        let [quality, tasks] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(bottom);
        render_quality(f, quality, vm);
        render_tasks(f, tasks, vm);
    }

    fn render_search(&self, f: &mut Frame, area: Rect, vm: &DataViewModel) {
        let border = if self.editing { Color::Yellow } else { Color::DarkGray };
        let mut spans = if self.query.is_empty() && !self.editing {
            vec![Span::styled("Search sources... (press /)", dim())]
        } else {
            vec![Span::raw(self.query.as_str())]
        };
        if self.editing {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        if vm.search.applied {
            spans.push(Span::styled(
                format!("   {} of {}", vm.search.shown, vm.search.total),
                dim(),
            ));
        }
        let block = Block::default()
            .title(" Search ")
            .title_bottom(Line::from(Span::styled(" [ Filter ] ", dim())).right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

fn render_sources(f: &mut Frame, area: Rect, vm: &DataViewModel) {
    let header = Row::new(vec![
        "Source",
        "Type",
        "Records",
        "Quality",
        "Status",
        "Last Updated",
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = vm
        .sources
        .iter()
        .map(|s| {
            let mut quality = bar_spans(s.quality_width_pct, 10, Color::Cyan);
            quality.push(Span::raw(format!(" {}", format_pct(s.quality_pct))));
            Row::new(vec![
                Cell::from(s.name.as_str()),
                Cell::from(Span::styled(s.source_type.as_str(), dim())),
                Cell::from(format_thousands(s.records)),
                Cell::from(Line::from(quality)),
                Cell::from(Line::from(badge_span(&s.status))),
                Cell::from(Span::styled(s.last_updated.as_str(), dim())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(30),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(17),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Data Sources ")
            .borders(Borders::ALL),
    );
    f.render_widget(table, area);
}

fn render_quality(f: &mut Frame, area: Rect, vm: &DataViewModel) {
    let block = Block::default()
        .title(" Data Quality Metrics ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = inner.width.saturating_sub(22);
    let lines: Vec<Line> = vm
        .quality_metrics
        .iter()
        .map(|m| {
            let mut spans = vec![Span::raw(format!("{} {:<13}", m.icon.glyph(), m.metric))];
            spans.extend(bar_spans(m.width_pct, columns, Color::Green));
            spans.push(Span::raw(format!(" {}", format_pct(m.score_pct))));
            Line::from(spans)
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_tasks(f: &mut Frame, area: Rect, vm: &DataViewModel) {
    let rows: Vec<Row> = vm
        .recent_processing
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(t.task.as_str()),
                Cell::from(Span::styled(
                    format!("{} records", format_thousands(t.records)),
                    dim(),
                )),
                Cell::from(t.duration.as_str()),
                Cell::from(Line::from(badge_span(&t.status))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(14),
            Constraint::Length(6),
            Constraint::Length(12),
        ],
    )
    .block(
        Block::default()
            .title(" Recent Processing Tasks ")
            .borders(Borders::ALL),
    );
    f.render_widget(table, area);
}
