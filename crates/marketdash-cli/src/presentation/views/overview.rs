use std::fmt;

use owo_colors::OwoColorize;

use super::Theme;
use super::shared::{write_benchmarks, write_bar_items, write_forecast_table, write_header, write_notes, write_section};
use crate::presentation::view_models::{CreateView, KpiCardViewModel, OverviewViewModel};

impl CreateView for OverviewViewModel {
    fn create_view<'a>(&'a self, theme: Theme) -> Box<dyn fmt::Display + 'a> {
        Box::new(OverviewView { data: self, theme })
    }
}

struct OverviewView<'a> {
    data: &'a OverviewViewModel,
    theme: Theme,
}

impl<'a> fmt::Display for OverviewView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let theme = self.theme;
        write_header(f, &self.data.header, theme)?;

        writeln!(f)?;
        for kpi in &self.data.kpis {
            write!(f, "{}", KpiCardView { data: kpi, theme })?;
        }

        let chart = &self.data.demand_forecast;
        write_section(f, &chart.title, &chart.description, theme)?;
        write_forecast_table(f, chart, theme)?;

        write_section(f, "Top Market Drivers", "Impact score on demand (0-100)", theme)?;
        write_bar_items(f, &self.data.market_drivers, theme)?;

        write_section(f, "Model Performance Metrics", "Current vs target benchmarks", theme)?;
        write_benchmarks(f, &self.data.model_performance, theme)?;

        write_section(f, "Key Insights", "Strategic recommendations", theme)?;
        write_notes(f, &self.data.key_insights, theme)?;

        Ok(())
    }
}

pub(crate) struct KpiCardView<'a> {
    pub data: &'a KpiCardViewModel,
    pub theme: Theme,
}

impl<'a> fmt::Display for KpiCardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kpi = self.data;
        let trend = format!("{} {}", kpi.indicator.glyph, kpi.change);
        writeln!(
            f,
            "  {} {:<24} {:>8}  {}  {}",
            kpi.icon.glyph(),
            kpi.title,
            kpi.value.style(self.theme.title()),
            trend.style(self.theme.tone(kpi.indicator.tone)),
            kpi.description.style(self.theme.muted())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_overview;

    #[test]
    fn test_forecast_accuracy_line() {
        let result = present_overview();
        let text = result.content.create_view(Theme::plain()).to_string();
        let line = text
            .lines()
            .find(|l| l.contains("Forecast Accuracy"))
            .unwrap();
        assert!(line.contains("94.2%"));
        assert!(line.contains("▲ +20%"));
    }

    #[test]
    fn test_horizon_rows_show_dash() {
        let result = present_overview();
        let text = result.content.create_view(Theme::plain()).to_string();
        let jul = text.lines().find(|l| l.trim_start().starts_with("Jul")).unwrap();
        assert!(jul.contains(" - "));
        assert!(jul.contains("6100"));
        let jun = text.lines().find(|l| l.trim_start().starts_with("Jun")).unwrap();
        assert!(jun.contains("last actual"));
    }

    #[test]
    fn test_sections_present() {
        let result = present_overview();
        let text = result.content.create_view(Theme::plain()).to_string();
        for title in [
            "Market Research Dashboard",
            "Demand Forecast vs Actual",
            "Top Market Drivers",
            "Model Performance Metrics",
            "Key Insights",
        ] {
            assert!(text.contains(title), "{title}");
        }
    }
}
