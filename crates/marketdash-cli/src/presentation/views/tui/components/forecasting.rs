//! Forecasting page with its three mutually exclusive tabs

use crossterm::event::{KeyCode, KeyEvent};
use marketdash_engine::{ForecastTab, TabState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::presentation::view_models::ForecastingViewModel;
use crate::presentation::views::tui::{
    BarListView, ForecastChartView, HeaderView, NotesView, ResidualPlotView, badge_span, bold,
    dim,
};

#[derive(Debug, Default)]
pub struct ForecastingComponent {
    tabs: TabState,
}

impl ForecastingComponent {
    pub fn new(tab: ForecastTab) -> Self {
        Self {
            tabs: TabState::new(tab),
        }
    }

    pub fn active_tab(&self) -> ForecastTab {
        self.tabs.active()
    }

    /// Returns true when the key changed the tab
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        let before = self.tabs.active();
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.tabs.next(),
            KeyCode::Left | KeyCode::Char('h') => self.tabs.previous(),
            KeyCode::Char('m') => self.tabs.select(ForecastTab::Models),
            KeyCode::Char('f') => self.tabs.select(ForecastTab::Features),
            KeyCode::Char('d') => self.tabs.select(ForecastTab::Diagnostics),
            _ => return false,
        }
        before != self.tabs.active()
    }

    pub fn render(&self, f: &mut Frame, area: Rect, vm: &ForecastingViewModel) {
        let [header, metrics, chart, tabs, body] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .areas(area);

        f.render_widget(HeaderView::new(&vm.header), header);

        let metric_areas = Layout::horizontal(vec![Constraint::Ratio(1, 4); 4]).split(metrics);
        for (m, slot) in vm.metrics.iter().zip(metric_areas.iter()) {
            let lines = vec![
                Line::from(Span::styled(format!("{}{}", m.value, m.unit), bold())),
                Line::from(Span::styled(format!("Target: {}{}", m.target, m.unit), dim())),
            ];
            let block = Block::default()
                .title(format!(" {} ", m.metric))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            f.render_widget(Paragraph::new(lines).block(block), *slot);
        }

        f.render_widget(ForecastChartView::new(&vm.forecast), chart);

        let titles: Vec<&str> = vm.tabs.iter().map(|t| t.title.as_str()).collect();
        let selected = vm
            .tabs
            .iter()
            .position(|t| self.tabs.is_active(t.tab))
            .unwrap_or(0);
        f.render_widget(
            Tabs::new(titles)
                .select(selected)
                .style(dim())
                .highlight_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            tabs,
        );

        match self.tabs.active() {
            ForecastTab::Models => render_models(f, body, vm),
            ForecastTab::Features => f.render_widget(
                BarListView::new("Feature Importance Analysis", &vm.features),
                body,
            ),
            ForecastTab::Diagnostics => {
                let [plot, notes] =
                    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .areas(body);
                f.render_widget(ResidualPlotView::new(&vm.diagnostics.residuals), plot);
                f.render_widget(
                    NotesView::new("Model Validation", &vm.diagnostics.validation),
                    notes,
                );
            }
        }
    }
}

fn render_models(f: &mut Frame, area: Rect, vm: &ForecastingViewModel) {
    let [top, bottom] =
        Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(area);
    let slots: Vec<Rect> = [top, bottom]
        .iter()
        .flat_map(|row| {
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(*row)
                .to_vec()
        })
        .collect();

    for (model, slot) in vm.models.iter().zip(slots) {
        let lines = vec![
            Line::from(vec![
                Span::styled(model.kind.as_str(), dim()),
                Span::raw("  "),
                badge_span(&model.status),
            ]),
            Line::from(format!(
                "Accuracy {}%  RMSE {}  MAPE {}%",
                model.accuracy_pct, model.rmse, model.mape_pct
            )),
            Line::from(Span::styled(
                format!("Last trained: {}", model.last_trained),
                dim(),
            )),
        ];
        let block = Block::default()
            .title(format!(" {} ", model.name))
            .borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_forecasting;
    use crate::presentation::views::tui::test_support::{buffer_lines, terminal};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn render(component: &ForecastingComponent) -> String {
        let vm = present_forecasting(component.active_tab()).content;
        let mut terminal = terminal(140, 40);
        terminal
            .draw(|f| component.render(f, f.area(), &vm))
            .unwrap();
        buffer_lines(terminal.backend().buffer()).join("\n")
    }

    #[test]
    fn test_tab_keys() {
        let mut c = ForecastingComponent::new(ForecastTab::Models);
        assert!(c.handle_input(key(KeyCode::Right)));
        assert_eq!(c.active_tab(), ForecastTab::Features);
        assert!(c.handle_input(key(KeyCode::Char('d'))));
        assert_eq!(c.active_tab(), ForecastTab::Diagnostics);
        assert!(c.handle_input(key(KeyCode::Char('l'))));
        assert_eq!(c.active_tab(), ForecastTab::Models);
        assert!(!c.handle_input(key(KeyCode::Char('m'))));
        assert!(!c.handle_input(key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_features_tab_is_exclusive() {
        let text = render(&ForecastingComponent::new(ForecastTab::Features));
        assert!(text.contains("Feature Importance Analysis"));
        assert!(!text.contains("Residual Plot"));
        assert!(!text.contains("Model Validation"));
        assert!(!text.contains("Last trained"));
    }

    #[test]
    fn test_diagnostics_tab_is_exclusive() {
        let text = render(&ForecastingComponent::new(ForecastTab::Diagnostics));
        assert!(text.contains("Residual Plot"));
        assert!(text.contains("Model Validation"));
        assert!(!text.contains("Feature Importance Analysis"));
        assert!(!text.contains("Last trained"));
    }

    #[test]
    fn test_models_tab_is_exclusive() {
        let text = render(&ForecastingComponent::new(ForecastTab::Models));
        assert!(text.contains("Last trained: 1 hour ago"));
        assert!(!text.contains("Feature Importance Analysis"));
        assert!(!text.contains("Residual Plot"));
    }
}
