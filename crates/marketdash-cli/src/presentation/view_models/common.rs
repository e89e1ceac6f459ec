use marketdash_engine::{BadgeStyle, ForecastChart, dataset::PageHeader};
use marketdash_types::{Icon, Status};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<crate::types::OutputFormat> for OutputFormat {
    fn from(format: crate::types::OutputFormat) -> Self {
        match format {
            crate::types::OutputFormat::Plain => Self::Text,
            crate::types::OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn info(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            label: label.into(),
        }
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            label: label.into(),
        }
    }

    pub fn icon(&self) -> &str {
        match self.level {
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    pub command: Option<String>,
}

impl Guidance {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

/// Page title block with its inert action buttons
#[derive(Debug, Clone, Serialize)]
pub struct HeaderViewModel {
    pub title: String,
    pub subtitle: String,
    pub actions: Vec<String>,
}

impl From<PageHeader> for HeaderViewModel {
    fn from(header: PageHeader) -> Self {
        Self {
            title: header.title.to_string(),
            subtitle: header.subtitle.to_string(),
            actions: header.actions.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Status label plus the style decision already made
#[derive(Debug, Clone, Serialize)]
pub struct BadgeViewModel {
    pub label: String,
    pub style: BadgeStyle,
}

impl BadgeViewModel {
    pub fn new(label: impl Into<String>, style: BadgeStyle) -> Self {
        Self {
            label: label.into(),
            style,
        }
    }

    pub fn for_status(status: &Status, style: BadgeStyle) -> Self {
        Self::new(status.label(), style)
    }
}

/// Labelled horizontal bar (driver impact, feature importance, quality, confidence)
#[derive(Debug, Clone, Serialize)]
pub struct BarItemViewModel {
    pub label: String,
    /// Raw score as stored in the dataset
    pub score: f64,
    /// Score expressed as a percentage for display
    pub score_pct: f64,
    /// Clamped bar fill, 0-100
    pub width_pct: f64,
}

/// Value compared against a target benchmark
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkViewModel {
    pub metric: String,
    pub value: f64,
    pub target: f64,
    pub unit: String,
    /// `min(value / target * 100, 100)`
    pub width_pct: f64,
}

/// Titled note (insight bullet, validation result)
#[derive(Debug, Clone, Serialize)]
pub struct NoteViewModel {
    pub title: String,
    pub detail: String,
    pub icon: Icon,
}

/// Line chart of a forecast series
#[derive(Debug, Clone, Serialize)]
pub struct ForecastChartViewModel {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Name shown in the legend for the predicted series
    pub predicted_label: String,
    pub chart: ForecastChart,
}
