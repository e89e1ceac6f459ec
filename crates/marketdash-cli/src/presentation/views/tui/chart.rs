//! Forecast line chart and residual scatter

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use super::{badge_color, dim};
use crate::presentation::view_models::ForecastChartViewModel;
use marketdash_engine::BadgeStyle;
use marketdash_types::ResidualPoint;

pub struct ForecastChartView<'a> {
    model: &'a ForecastChartViewModel,
}

impl<'a> ForecastChartView<'a> {
    pub fn new(model: &'a ForecastChartViewModel) -> Self {
        Self { model }
    }

    fn boundary_line(&self, y_min: f64, y_max: f64) -> Vec<(f64, f64)> {
        match self.model.chart.boundary {
            Some(idx) => {
                let x = idx as f64;
                vec![(x, y_min), (x, y_max)]
            }
            None => Vec::new(),
        }
    }
}

impl<'a> Widget for ForecastChartView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chart = &self.model.chart;

        let mut title = vec![Span::raw(format!(" {} ", self.model.title))];
        if let Some(badge) = &self.model.badge {
            title.push(Span::styled(
                format!(" {} ", badge),
                Style::default()
                    .fg(Color::Black)
                    .bg(badge_color(BadgeStyle::Primary)),
            ));
        }
        let block = Block::default()
            .title(Line::from(title))
            .title_bottom(Line::from(Span::styled(
                format!(" {} ", self.model.description),
                dim(),
            )))
            .borders(Borders::ALL);

        let (y_min, y_max) = chart.y_range.unwrap_or((0.0, 1.0));
        let pad = ((y_max - y_min) * 0.05).max(1.0);
        let (y_lo, y_hi) = (y_min - pad, y_max + pad);
        let x_max = chart.periods.len().saturating_sub(1).max(1) as f64;

        let boundary = self.boundary_line(y_lo, y_hi);

        let mut datasets = Vec::new();
        if chart.has_band() {
            datasets.push(
                Dataset::default()
                    .name("Upper Bound")
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(Color::DarkGray))
                    .data(&chart.upper),
            );
            datasets.push(
                Dataset::default()
                    .name("Lower Bound")
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(Color::DarkGray))
                    .data(&chart.lower),
            );
        }
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Magenta))
                .data(&boundary),
        );
        datasets.push(
            Dataset::default()
                .name(self.model.predicted_label.as_str())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(&chart.predicted),
        );
        datasets.push(
            Dataset::default()
                .name("Actual")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&chart.actual),
        );

        let x_labels: Vec<Span> = match (chart.periods.first(), chart.periods.last()) {
            (Some(first), Some(last)) => {
                let mut labels = vec![Span::styled(first.as_str(), dim())];
                if let Some(mid) = chart.boundary_period() {
                    labels.push(Span::styled(mid, dim()));
                }
                labels.push(Span::styled(last.as_str(), dim()));
                labels
            }
            _ => Vec::new(),
        };
        let y_labels = vec![
            Span::styled(format!("{:.0}", y_lo), dim()),
            Span::styled(format!("{:.0}", y_hi), dim()),
        ];

        Chart::new(datasets)
            .block(block)
            .x_axis(Axis::default().bounds([0.0, x_max]).labels(x_labels))
            .y_axis(Axis::default().bounds([y_lo, y_hi]).labels(y_labels))
            .render(area, buf);
    }
}

pub struct ResidualPlotView {
    points: Vec<(f64, f64)>,
}

impl ResidualPlotView {
    pub fn new(residuals: &[ResidualPoint]) -> Self {
        Self {
            points: residuals.iter().map(|p| (p.predicted, p.residual)).collect(),
        }
    }

    fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let fold = |pick: fn(&(f64, f64)) -> f64| {
            self.points
                .iter()
                .map(pick)
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(v), hi.max(v))
                })
        };
        let (x_lo, x_hi) = fold(|p| p.0);
        let (_, y_abs) = fold(|p| p.1.abs());
        if !x_lo.is_finite() {
            return ([0.0, 1.0], [-1.0, 1.0]);
        }
        let y = (y_abs * 1.2).max(1.0);
        ([x_lo - 50.0, x_hi + 50.0], [-y, y])
    }
}

impl Widget for ResidualPlotView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (x, y) = self.bounds();
        let zero = [(x[0], 0.0), (x[1], 0.0)];

        let block = Block::default()
            .title(" Residual Plot ")
            .title_bottom(Line::from(Span::styled(
                " Model prediction errors distribution ",
                dim(),
            )))
            .borders(Borders::ALL);

        let datasets = vec![
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&zero),
            Dataset::default()
                .name("Residual")
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Cyan))
                .data(&self.points),
        ];

        Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title("Predicted")
                    .bounds(x)
                    .labels(vec![
                        Span::styled(format!("{:.0}", x[0]), dim()),
                        Span::styled(format!("{:.0}", x[1]), dim()),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .bounds(y)
                    .labels(vec![
                        Span::styled(format!("{:.0}", y[0]), dim()),
                        Span::styled("0", dim()),
                        Span::styled(format!("{:.0}", y[1]), dim()),
                    ]),
            )
            .render(area, buf);
    }
}
