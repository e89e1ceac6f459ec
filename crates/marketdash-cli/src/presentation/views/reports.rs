use std::fmt;

use owo_colors::OwoColorize;

use super::Theme;
use super::shared::{badge, bar, write_header, write_section};
use crate::presentation::formatters::format_pct;
use crate::presentation::view_models::{CreateView, ReportsViewModel};

impl CreateView for ReportsViewModel {
    fn create_view<'a>(&'a self, theme: Theme) -> Box<dyn fmt::Display + 'a> {
        Box::new(ReportsView { data: self, theme })
    }
}

struct ReportsView<'a> {
    data: &'a ReportsViewModel,
    theme: Theme,
}

impl<'a> fmt::Display for ReportsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let theme = self.theme;
        write_header(f, &self.data.header, theme)?;

        for insight in &self.data.insights {
            writeln!(f)?;
            writeln!(
                f,
                "  {} {}  {} {}",
                insight.icon.glyph(),
                insight.title.style(theme.title()),
                badge(&insight.category, theme),
                badge(&insight.impact_badge, theme)
            )?;
            writeln!(f, "    Analysis: {}", insight.description)?;
            if let Some(rec) = &insight.recommendation {
                writeln!(f, "    Recommendation: {}", rec.style(theme.highlight()))?;
            }
        }

        write_section(
            f,
            "Strategic Initiatives Informed by Analytics",
            "Data-backed recommendations driving business decisions",
            theme,
        )?;
        for i in &self.data.initiatives {
            writeln!(
                f,
                "  {}  {}  {}",
                i.title.style(theme.title()),
                i.timeline.style(theme.muted()),
                badge(&i.status, theme)
            )?;
            writeln!(
                f,
                "    Projected impact: {}  Confidence: {} {}",
                i.projected_impact,
                bar(i.confidence_width_pct, theme),
                format_pct(i.confidence_pct)
            )?;
        }

        write_section(
            f,
            "Automation Impact Metrics",
            "Time savings and efficiency improvements from automated reporting",
            theme,
        )?;
        for m in &self.data.automation {
            writeln!(
                f,
                "  {:<24} {:>8} → {:<8} {}",
                m.metric,
                m.before.style(theme.muted()),
                m.after.style(theme.title()),
                format!("[{} improvement]", m.improvement).style(theme.highlight())
            )?;
        }

        write_section(
            f,
            "Generated Reports",
            "Automated executive summaries and presentations",
            theme,
        )?;
        for r in &self.data.reports {
            writeln!(
                f,
                "  {:<40} {}  {}",
                r.title.style(theme.title()),
                badge(&r.cadence, theme),
                "[ Download ]".style(theme.muted())
            )?;
            writeln!(
                f,
                "    {}",
                format!("{} · {} pages · {} insights", r.generated, r.pages, r.insights)
                    .style(theme.muted())
            )?;
        }

        Ok(())
    }
}
