use serde::Serialize;

/// Glyph attached to a card, insight, note or nav item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    BarChart,
    Database,
    TrendingUp,
    TrendingDown,
    FileText,
    Target,
    Activity,
    Zap,
    CheckCircle,
    AlertCircle,
    AlertTriangle,
    RefreshCw,
    Calendar,
    Brain,
    DollarSign,
    Users,
    Lightbulb,
    ArrowUpRight,
    Spreadsheet,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::BarChart => "📊",
            Icon::Database => "🗄",
            Icon::TrendingUp => "📈",
            Icon::TrendingDown => "📉",
            Icon::FileText => "📄",
            Icon::Target => "🎯",
            Icon::Activity => "〰",
            Icon::Zap => "⚡",
            Icon::CheckCircle => "✔",
            Icon::AlertCircle => "●",
            Icon::AlertTriangle => "⚠",
            Icon::RefreshCw => "↻",
            Icon::Calendar => "📅",
            Icon::Brain => "🧠",
            Icon::DollarSign => "$",
            Icon::Users => "👥",
            Icon::Lightbulb => "💡",
            Icon::ArrowUpRight => "↗",
            Icon::Spreadsheet => "▦",
        }
    }
}
