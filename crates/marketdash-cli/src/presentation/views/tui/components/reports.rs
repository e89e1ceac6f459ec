//! Reports page: insight cards, initiatives, automation impact and report list

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::presentation::formatters::format_pct;
use crate::presentation::view_models::ReportsViewModel;
use crate::presentation::views::tui::widgets::bar_spans;
use crate::presentation::views::tui::{HeaderView, badge_span, bold, dim};

#[derive(Default)]
pub struct ReportsComponent;

impl ReportsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame, area: Rect, vm: &ReportsViewModel) {
        let [header, insights, middle, reports] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Min(6),
        ])
        .areas(area);

        f.render_widget(HeaderView::new(&vm.header), header);

        let slots = Layout::horizontal(vec![Constraint::Ratio(1, 3); 3]).split(insights);
        for (insight, slot) in vm.insights.iter().zip(slots.iter()) {
            let mut lines = vec![
                Line::from(vec![
                    badge_span(&insight.category),
                    Span::raw(" "),
                    badge_span(&insight.impact_badge),
                ]),
                Line::from(insight.description.as_str()),
            ];
            if let Some(rec) = &insight.recommendation {
                lines.push(Line::from(vec![
                    Span::styled("→ ", Style::default().fg(Color::Green)),
                    Span::styled(rec.as_str(), Style::default().fg(Color::Green)),
                ]));
            }
            let block = Block::default()
                .title(format!(" {} {} ", insight.icon.glyph(), insight.title))
                .borders(Borders::ALL);
            f.render_widget(
                Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
                *slot,
            );
        }

        let [initiatives, automation] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(middle);
        render_initiatives(f, initiatives, vm);
        render_automation(f, automation, vm);
        render_reports(f, reports, vm);
    }
}

fn render_initiatives(f: &mut Frame, area: Rect, vm: &ReportsViewModel) {
    let block = Block::default()
        .title(" Strategic Initiatives Informed by Analytics ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for i in &vm.initiatives {
        lines.push(Line::from(vec![
            Span::styled(i.title.as_str(), bold()),
            Span::raw("  "),
            badge_span(&i.status),
        ]));
        lines.push(Line::from(Span::styled(
            format!("{} · {}", i.timeline, i.projected_impact),
            dim(),
        )));
        let mut confidence = vec![Span::raw("Confidence ")];
        confidence.extend(bar_spans(i.confidence_width_pct, 16, Color::Cyan));
        confidence.push(Span::raw(format!(" {}", format_pct(i.confidence_pct))));
        lines.push(Line::from(confidence));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_automation(f: &mut Frame, area: Rect, vm: &ReportsViewModel) {
    let rows: Vec<Row> = vm
        .automation
        .iter()
        .map(|m| {
            Row::new(vec![
                Cell::from(m.metric.as_str()),
                Cell::from(Span::styled(m.before.as_str(), dim())),
                Cell::from("→"),
                Cell::from(Span::styled(m.after.as_str(), bold())),
                Cell::from(Span::styled(
                    format!("{} improvement", m.improvement),
                    Style::default().fg(Color::Green),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(22),
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Length(16),
        ],
    )
    .block(
        Block::default()
            .title(" Automation Impact Metrics ")
            .borders(Borders::ALL),
    );
    f.render_widget(table, area);
}

fn render_reports(f: &mut Frame, area: Rect, vm: &ReportsViewModel) {
    let rows: Vec<Row> = vm
        .reports
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(Span::styled(r.title.as_str(), bold())),
                Cell::from(Span::styled(r.generated.as_str(), dim())),
                Cell::from(format!("{} pages", r.pages)),
                Cell::from(format!("{} insights", r.insights)),
                Cell::from(Line::from(badge_span(&r.cadence))),
                Cell::from(Span::styled("[ Download ]", dim())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(36),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(12),
        ],
    )
    .block(
        Block::default()
            .title(" Generated Reports ")
            .borders(Borders::ALL),
    );
    f.render_widget(table, area);
}
