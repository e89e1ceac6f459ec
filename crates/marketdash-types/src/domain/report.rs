use serde::Serialize;
use std::fmt;

use crate::{Icon, Status};

/// Generated report entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub id: u32,
    pub title: String,
    /// Report category, e.g. "Quarterly"
    pub cadence: String,
    pub generated: String,
    pub pages: u32,
    pub status: Status,
    pub insights: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImpactLevel::High => "High",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Strategic insight with analysis and an optional recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub title: String,
    pub category: String,
    pub impact: ImpactLevel,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    pub icon: Icon,
}

/// Initiative driven by the analytics, with a confidence level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Initiative {
    pub title: String,
    pub status: Status,
    pub projected_impact: String,
    pub timeline: String,
    pub confidence_pct: f64,
}

/// Before/after comparison of an automated workflow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutomationMetric {
    pub metric: String,
    pub before: String,
    pub after: String,
    pub improvement: String,
}

impl AutomationMetric {
    pub fn new(
        metric: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
        improvement: impl Into<String>,
    ) -> Self {
        Self {
            metric: metric.into(),
            before: before.into(),
            after: after.into(),
            improvement: improvement.into(),
        }
    }
}
