//! Overview page: KPI cards, demand chart, drivers, benchmarks and insights

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::presentation::view_models::OverviewViewModel;
use crate::presentation::views::tui::{
    BarListView, BenchmarkListView, ForecastChartView, HeaderView, KpiCardView, NotesView,
};

#[derive(Default)]
pub struct OverviewComponent;

impl OverviewComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame, area: Rect, vm: &OverviewViewModel) {
        let [header, cards, middle, bottom] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(8),
        ])
        .areas(area);

        f.render_widget(HeaderView::new(&vm.header), header);

        let card_areas = Layout::horizontal(vec![Constraint::Ratio(1, 4); 4]).split(cards);
        for (kpi, slot) in vm.kpis.iter().zip(card_areas.iter()) {
            f.render_widget(KpiCardView::new(kpi), *slot);
        }

        let [chart, drivers] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(middle);
        f.render_widget(ForecastChartView::new(&vm.demand_forecast), chart);
        f.render_widget(BarListView::new("Top Market Drivers", &vm.market_drivers), drivers);

        let [metrics, insights] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(bottom);
        f.render_widget(
            BenchmarkListView::new("Model Performance Metrics", &vm.model_performance),
            metrics,
        );
        f.render_widget(NotesView::new("Key Insights", &vm.key_insights), insights);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_overview;
    use crate::presentation::views::tui::test_support::{buffer_lines, terminal};

    #[test]
    fn test_overview_page_buffer() {
        let vm = present_overview().content;
        let mut terminal = terminal(160, 40);
        terminal
            .draw(|f| OverviewComponent::new().render(f, f.area(), &vm))
            .unwrap();

        let text = buffer_lines(terminal.backend().buffer()).join("\n");
        assert!(text.contains("Market Research Dashboard"));
        assert!(text.contains("94.2% ▲ +20%"));
        assert!(text.contains("Top Market Drivers"));
        assert!(text.contains("Model Performance Metrics"));
    }
}
