use std::fmt;

use marketdash_engine::ForecastTab;
use owo_colors::OwoColorize;

use super::Theme;
use super::shared::{badge, write_bar_items, write_forecast_table, write_header, write_notes, write_section};
use crate::presentation::view_models::{CreateView, ForecastingViewModel};

impl CreateView for ForecastingViewModel {
    fn create_view<'a>(&'a self, theme: Theme) -> Box<dyn fmt::Display + 'a> {
        Box::new(ForecastingView { data: self, theme })
    }
}

struct ForecastingView<'a> {
    data: &'a ForecastingViewModel,
    theme: Theme,
}

impl<'a> ForecastingView<'a> {
    fn write_tab_strip(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        let mut strip = Vec::new();
        for tab in &self.data.tabs {
            let label = format!(" {} ", tab.title);
            if tab.tab == self.data.active_tab {
                strip.push(format!("[{}]", label).style(self.theme.highlight()).to_string());
            } else {
                strip.push(label.style(self.theme.muted()).to_string());
            }
        }
        writeln!(f, "  {}", strip.join(" "))
    }

    fn write_models(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let theme = self.theme;
        for m in &self.data.models {
            writeln!(f)?;
            writeln!(
                f,
                "  {} {}  {}",
                m.name.style(theme.title()),
                m.kind.style(theme.muted()),
                badge(&m.status, theme)
            )?;
            writeln!(
                f,
                "    Accuracy {}%  RMSE {}  MAPE {}%",
                m.accuracy_pct, m.rmse, m.mape_pct
            )?;
            writeln!(f, "    {}", format!("Last trained: {}", m.last_trained).style(theme.muted()))?;
        }
        Ok(())
    }

    fn write_diagnostics(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let theme = self.theme;
        write_section(f, "Residual Plot", "Model prediction errors distribution", theme)?;
        writeln!(
            f,
            "{}",
            format!("  {:>10} {:>9}", "Predicted", "Residual").style(theme.muted())
        )?;
        for point in &self.data.diagnostics.residuals {
            writeln!(f, "  {:>10} {:>+9}", point.predicted, point.residual)?;
        }

        write_section(f, "Model Validation", "Cross-validation and testing results", theme)?;
        write_notes(f, &self.data.diagnostics.validation, theme)
    }
}

impl<'a> fmt::Display for ForecastingView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let theme = self.theme;
        write_header(f, &self.data.header, theme)?;

        writeln!(f)?;
        for m in &self.data.metrics {
            writeln!(
                f,
                "  {:<10} {:>8}  {}",
                m.metric,
                format!("{}{}", m.value, m.unit).style(theme.title()),
                format!("Target: {}{}", m.target, m.unit).style(theme.muted())
            )?;
        }

        let chart = &self.data.forecast;
        write_section(f, &chart.title, &chart.description, theme)?;
        if let Some(model) = &chart.badge {
            writeln!(f, "  Model: {}", model.style(theme.badge(marketdash_engine::BadgeStyle::Primary)))?;
        }
        write_forecast_table(f, chart, theme)?;

        self.write_tab_strip(f)?;
        match self.data.active_tab {
            ForecastTab::Models => self.write_models(f)?,
            ForecastTab::Features => {
                write_section(
                    f,
                    "Feature Importance Analysis",
                    "Impact of each feature on model predictions",
                    theme,
                )?;
                write_bar_items(f, &self.data.features, theme)?;
            }
            ForecastTab::Diagnostics => self.write_diagnostics(f)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_forecasting;

    fn render(tab: ForecastTab) -> String {
        present_forecasting(tab)
            .content
            .create_view(Theme::plain())
            .to_string()
    }

    #[test]
    fn test_models_tab_only() {
        let text = render(ForecastTab::Models);
        assert!(text.contains("Last trained: 1 hour ago"));
        assert!(!text.contains("Feature Importance Analysis"));
        assert!(!text.contains("Residual Plot"));
    }

    #[test]
    fn test_features_tab_only() {
        let text = render(ForecastTab::Features);
        assert!(text.contains("Feature Importance Analysis"));
        assert!(text.contains("35.0"));
        assert!(!text.contains("Last trained"));
        assert!(!text.contains("Residual Plot"));
        assert!(!text.contains("Model Validation"));
    }

    #[test]
    fn test_diagnostics_tab_only() {
        let text = render(ForecastTab::Diagnostics);
        assert!(text.contains("Residual Plot"));
        assert!(text.contains("Model Validation"));
        assert!(text.contains("No Overfitting Detected"));
        assert!(!text.contains("Feature Importance Analysis"));
        assert!(!text.contains("Last trained"));
    }

    #[test]
    fn test_band_columns_and_model_badge() {
        let text = render(ForecastTab::Models);
        assert!(text.contains("Lower"));
        assert!(text.contains("Model: Random Forest"));
        assert!(text.contains("[ Run Model ]"));
    }
}
