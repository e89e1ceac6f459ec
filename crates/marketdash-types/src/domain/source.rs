use serde::Serialize;

use crate::{Icon, Status};

/// Connected data source row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSource {
    pub id: u32,
    pub name: String,
    pub source_type: String,
    pub records: u64,
    pub last_updated: String,
    pub status: Status,
    pub quality_pct: f64,
}

/// Coarse grade attached to a quality metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityGrade {
    Excellent,
    Good,
}

impl QualityGrade {
    pub fn icon(self) -> Icon {
        match self {
            QualityGrade::Excellent => Icon::CheckCircle,
            QualityGrade::Good => Icon::AlertCircle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityMetric {
    pub metric: String,
    pub score_pct: f64,
    pub grade: QualityGrade,
}

/// Preprocessing pipeline task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingTask {
    pub task: String,
    pub status: Status,
    pub duration: String,
    pub records: u64,
}

/// Literal summary card (title, headline value, caption)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub caption: String,
    pub icon: Icon,
}

impl StatCard {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        caption: impl Into<String>,
        icon: Icon,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            caption: caption.into(),
            icon,
        }
    }
}
