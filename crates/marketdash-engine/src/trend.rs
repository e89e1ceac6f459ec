use marketdash_types::Trend;
use serde::Serialize;

/// Colour intent of a trend indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
}

/// Glyph and tone shown next to a KPI change.
///
/// Chosen from the `trend` field alone. The change text is never inspected,
/// so callers are responsible for keeping the two consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendIndicator {
    pub glyph: &'static str,
    pub tone: Tone,
}

impl TrendIndicator {
    pub const UP: TrendIndicator = TrendIndicator {
        glyph: "▲",
        tone: Tone::Positive,
    };
    pub const DOWN: TrendIndicator = TrendIndicator {
        glyph: "▼",
        tone: Tone::Negative,
    };

    pub fn for_trend(trend: Trend) -> Self {
        match trend {
            Trend::Up => Self::UP,
            Trend::Down => Self::DOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_follows_trend_only() {
        assert_eq!(TrendIndicator::for_trend(Trend::Up).glyph, "▲");
        assert_eq!(TrendIndicator::for_trend(Trend::Down).glyph, "▼");
        assert_eq!(TrendIndicator::for_trend(Trend::Down).tone, Tone::Negative);
    }
}
