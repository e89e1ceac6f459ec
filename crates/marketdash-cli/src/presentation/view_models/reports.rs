use marketdash_types::{AutomationMetric, Icon, ImpactLevel};
use serde::Serialize;

use super::common::{BadgeViewModel, HeaderViewModel};

#[derive(Debug, Clone, Serialize)]
pub struct ReportsViewModel {
    pub header: HeaderViewModel,
    pub insights: Vec<InsightCardViewModel>,
    pub initiatives: Vec<InitiativeViewModel>,
    pub automation: Vec<AutomationMetric>,
    pub reports: Vec<ReportRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightCardViewModel {
    pub title: String,
    pub category: BadgeViewModel,
    pub impact: ImpactLevel,
    pub impact_badge: BadgeViewModel,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    pub icon: Icon,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitiativeViewModel {
    pub title: String,
    pub timeline: String,
    pub status: BadgeViewModel,
    pub projected_impact: String,
    pub confidence_pct: f64,
    pub confidence_width_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRowViewModel {
    pub title: String,
    pub generated: String,
    pub pages: u32,
    pub insights: u32,
    pub cadence: BadgeViewModel,
}
