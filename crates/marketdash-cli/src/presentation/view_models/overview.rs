use marketdash_engine::TrendIndicator;
use marketdash_types::{Icon, Trend};
use serde::Serialize;

use super::common::{
    BarItemViewModel, BenchmarkViewModel, ForecastChartViewModel, HeaderViewModel, NoteViewModel,
};

#[derive(Debug, Clone, Serialize)]
pub struct OverviewViewModel {
    pub header: HeaderViewModel,
    pub kpis: Vec<KpiCardViewModel>,
    pub demand_forecast: ForecastChartViewModel,
    pub market_drivers: Vec<BarItemViewModel>,
    pub model_performance: Vec<BenchmarkViewModel>,
    pub key_insights: Vec<NoteViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KpiCardViewModel {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub indicator: TrendIndicator,
    pub description: String,
    pub icon: Icon,
}
