use marketdash_engine::{BadgeContext, ForecastTab, confidence_band, dataset::forecasting};
use marketdash_types::Scale;

use super::{bar_item, benchmark, note};
use crate::presentation::view_models::{
    BadgeViewModel, CommandResultViewModel, DiagnosticsViewModel, ForecastChartViewModel,
    ForecastingViewModel, Guidance, ModelCardViewModel, TabViewModel,
};

pub fn present_forecasting(tab: ForecastTab) -> CommandResultViewModel<ForecastingViewModel> {
    let content = ForecastingViewModel {
        header: forecasting::header().into(),
        metrics: forecasting::performance_metrics()
            .into_iter()
            .map(benchmark)
            .collect(),
        forecast: ForecastChartViewModel {
            title: "Demand Forecast with Confidence Intervals".to_string(),
            description: "Historical data + 4-month prediction (95% CI)".to_string(),
            badge: Some(forecasting::SELECTED_MODEL.to_string()),
            predicted_label: "Predicted".to_string(),
            chart: confidence_band(&forecasting::demand_forecast()),
        },
        active_tab: tab,
        tabs: ForecastTab::ALL
            .iter()
            .map(|&t| TabViewModel {
                tab: t,
                title: t.title().to_string(),
            })
            .collect(),
        models: forecasting::models()
            .into_iter()
            .map(|m| ModelCardViewModel {
                status: BadgeViewModel::for_status(&m.status, BadgeContext::Model.style(&m.status)),
                name: m.name,
                kind: m.kind,
                accuracy_pct: m.accuracy_pct,
                rmse: m.rmse,
                mape_pct: m.mape_pct,
                last_trained: m.last_trained,
            })
            .collect(),
        features: forecasting::feature_importance()
            .into_iter()
            .map(|driver| bar_item(driver, Scale::Unit))
            .collect(),
        diagnostics: DiagnosticsViewModel {
            residuals: forecasting::residuals(),
            validation: forecasting::validation_notes()
                .into_iter()
                .map(note)
                .collect(),
        },
    };

    let mut result = CommandResultViewModel::new(content);
    for other in ForecastTab::ALL.iter().filter(|&&t| t != tab) {
        result = result.with_suggestion(
            Guidance::new(format!("Show {}", other.title()))
                .with_command(format!("marketdash forecasting --tab {}", other.name())),
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketdash_engine::BadgeStyle;

    #[test]
    fn test_r2_score_bar_is_clamped() {
        let result = present_forecasting(ForecastTab::Models);
        let r2 = &result.content.metrics[0];
        assert_eq!(r2.metric, "R² Score");
        assert_eq!(r2.width_pct, 100.0);
    }

    #[test]
    fn test_band_and_reference_line() {
        let result = present_forecasting(ForecastTab::Models);
        let chart = &result.content.forecast.chart;
        assert_eq!(chart.periods.len(), 10);
        assert_eq!(chart.actual.len(), 6);
        assert_eq!(chart.upper.len(), 10);
        assert_eq!(chart.boundary_period(), Some("Jun"));
        assert_eq!(result.content.forecast.badge.as_deref(), Some("Random Forest"));
    }

    #[test]
    fn test_active_models_use_accent() {
        let result = present_forecasting(ForecastTab::Models);
        let styles: Vec<BadgeStyle> = result.content.models.iter().map(|m| m.status.style).collect();
        assert_eq!(
            styles,
            vec![
                BadgeStyle::Accent,
                BadgeStyle::Accent,
                BadgeStyle::Accent,
                BadgeStyle::Secondary
            ]
        );
    }

    #[test]
    fn test_feature_importance_as_percent() {
        let result = present_forecasting(ForecastTab::Features);
        let price = &result.content.features[0];
        assert_eq!(price.label, "Price");
        assert!((price.score_pct - 35.0).abs() < 1e-9);
        assert_eq!(result.content.active_tab, ForecastTab::Features);
    }

    #[test]
    fn test_suggests_the_other_tabs() {
        let result = present_forecasting(ForecastTab::Diagnostics);
        let commands: Vec<&str> = result
            .suggestions
            .iter()
            .filter_map(|s| s.command.as_deref())
            .collect();
        assert_eq!(
            commands,
            vec![
                "marketdash forecasting --tab models",
                "marketdash forecasting --tab features"
            ]
        );
    }
}
