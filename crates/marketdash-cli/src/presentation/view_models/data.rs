use marketdash_types::{Icon, QualityGrade, StatCard};
use serde::Serialize;

use super::common::{BadgeViewModel, HeaderViewModel};

#[derive(Debug, Clone, Serialize)]
pub struct DataViewModel {
    pub header: HeaderViewModel,
    pub stat_cards: Vec<StatCard>,
    pub search: SearchViewModel,
    pub sources: Vec<SourceRowViewModel>,
    pub quality_metrics: Vec<QualityRowViewModel>,
    pub recent_processing: Vec<TaskViewModel>,
}

/// State of the data-source search box
#[derive(Debug, Clone, Serialize)]
pub struct SearchViewModel {
    pub query: String,
    /// Whether the query narrowed the table (false when filtering is disabled)
    pub applied: bool,
    pub shown: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceRowViewModel {
    pub id: u32,
    pub name: String,
    pub source_type: String,
    pub records: u64,
    pub quality_pct: f64,
    pub quality_width_pct: f64,
    pub status: BadgeViewModel,
    pub last_updated: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualityRowViewModel {
    pub metric: String,
    pub score_pct: f64,
    pub width_pct: f64,
    pub grade: QualityGrade,
    pub icon: Icon,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskViewModel {
    pub task: String,
    pub records: u64,
    pub duration: String,
    pub status: BadgeViewModel,
}
