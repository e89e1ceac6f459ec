use marketdash_engine::ForecastTab;
use marketdash_types::ResidualPoint;
use serde::Serialize;

use super::common::{
    BadgeViewModel, BarItemViewModel, BenchmarkViewModel, ForecastChartViewModel,
    HeaderViewModel, NoteViewModel,
};

/// Forecasting page.
///
/// Carries the content of every tab; `active_tab` decides which one a view
/// shows.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastingViewModel {
    pub header: HeaderViewModel,
    pub metrics: Vec<BenchmarkViewModel>,
    pub forecast: ForecastChartViewModel,
    pub active_tab: ForecastTab,
    pub tabs: Vec<TabViewModel>,
    pub models: Vec<ModelCardViewModel>,
    pub features: Vec<BarItemViewModel>,
    pub diagnostics: DiagnosticsViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabViewModel {
    pub tab: ForecastTab,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelCardViewModel {
    pub name: String,
    pub kind: String,
    pub accuracy_pct: f64,
    pub rmse: f64,
    pub mape_pct: f64,
    pub status: BadgeViewModel,
    pub last_trained: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsViewModel {
    pub residuals: Vec<ResidualPoint>,
    pub validation: Vec<NoteViewModel>,
}
