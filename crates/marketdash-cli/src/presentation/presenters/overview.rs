use marketdash_engine::{TrendIndicator, confidence_band, dataset::overview};
use marketdash_types::{Kpi, Scale};

use super::{bar_item, benchmark, note};
use crate::presentation::view_models::{
    CommandResultViewModel, ForecastChartViewModel, Guidance, KpiCardViewModel, OverviewViewModel,
};

pub fn present_overview() -> CommandResultViewModel<OverviewViewModel> {
    let content = OverviewViewModel {
        header: overview::header().into(),
        kpis: overview::kpis().into_iter().map(kpi_card).collect(),
        demand_forecast: ForecastChartViewModel {
            title: "Demand Forecast vs Actual".to_string(),
            description: "6-month historical + 3-month forecast".to_string(),
            badge: None,
            predicted_label: "Forecast".to_string(),
            chart: confidence_band(&overview::demand_forecast()),
        },
        market_drivers: overview::market_drivers()
            .into_iter()
            .map(|driver| bar_item(driver, Scale::Percent))
            .collect(),
        model_performance: overview::model_performance()
            .into_iter()
            .map(benchmark)
            .collect(),
        key_insights: overview::key_insights().into_iter().map(note).collect(),
    };

    CommandResultViewModel::new(content).with_suggestion(
        Guidance::new("Inspect forecasting models and diagnostics")
            .with_command("marketdash forecasting --tab diagnostics"),
    )
}

pub(crate) fn kpi_card(kpi: Kpi) -> KpiCardViewModel {
    KpiCardViewModel {
        indicator: TrendIndicator::for_trend(kpi.trend),
        title: kpi.title,
        value: kpi.value,
        change: kpi.change,
        trend: kpi.trend,
        description: kpi.description,
        icon: kpi.icon,
    }
}
