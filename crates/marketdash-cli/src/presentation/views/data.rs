use std::fmt;

use owo_colors::OwoColorize;

use super::Theme;
use super::shared::{badge, bar, write_header, write_section};
use crate::presentation::formatters::{format_pct, format_thousands, truncate};
use crate::presentation::view_models::{CreateView, DataViewModel};

impl CreateView for DataViewModel {
    fn create_view<'a>(&'a self, theme: Theme) -> Box<dyn fmt::Display + 'a> {
        Box::new(DataView { data: self, theme })
    }
}

struct DataView<'a> {
    data: &'a DataViewModel,
    theme: Theme,
}

impl<'a> DataView<'a> {
    fn write_sources(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let theme = self.theme;
        let search = &self.data.search;

        let query = if search.query.is_empty() {
            "Search sources...".style(theme.muted()).to_string()
        } else {
            search.query.clone()
        };
        writeln!(f, "  Search: {}  {}", query, "[ Filter ]".style(theme.muted()))?;
        if !search.query.is_empty() {
            let summary = if search.applied {
                format!("showing {} of {}", search.shown, search.total)
            } else {
                format!("filter not applied, showing all {}", search.total)
            };
            writeln!(f, "  {}", summary.style(theme.muted()))?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "{}",
            format!(
                "  {:<32} {:<16} {:>8}  {:<28} {:<12} {}",
                "Source", "Type", "Records", "Quality", "Status", "Last Updated"
            )
            .style(theme.muted())
        )?;
        for row in &self.data.sources {
            writeln!(
                f,
                "  {:<32} {:<16} {:>8}  {} {:>6} {:<12} {}",
                truncate(&row.name, 32),
                row.source_type,
                format_thousands(row.records),
                bar(row.quality_width_pct, theme),
                format_pct(row.quality_pct),
                badge(&row.status, theme),
                row.last_updated.style(theme.muted())
            )?;
        }
        if self.data.sources.is_empty() {
            writeln!(f, "  {}", "No data sources match the search.".style(theme.muted()))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for DataView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let theme = self.theme;
        write_header(f, &self.data.header, theme)?;

        writeln!(f)?;
        for card in &self.data.stat_cards {
            writeln!(
                f,
                "  {} {:<16} {:>8}  {}",
                card.icon.glyph(),
                card.title,
                card.value.style(theme.title()),
                card.caption.style(theme.muted())
            )?;
        }

        write_section(
            f,
            "Data Sources",
            "Manage and monitor all connected data sources",
            theme,
        )?;
        self.write_sources(f)?;

        write_section(f, "Data Quality Metrics", "Real-time quality assessment", theme)?;
        for m in &self.data.quality_metrics {
            writeln!(
                f,
                "  {} {:<12} {}  {}",
                m.icon.glyph(),
                m.metric,
                bar(m.width_pct, theme),
                format_pct(m.score_pct)
            )?;
        }

        write_section(
            f,
            "Recent Processing Tasks",
            "Data preprocessing pipeline activity",
            theme,
        )?;
        for t in &self.data.recent_processing {
            writeln!(
                f,
                "  {:<36} {:>6} records  {:>5}  {}",
                t.task,
                format_thousands(t.records),
                t.duration,
                badge(&t.status, theme)
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_data;

    fn render(query: &str, apply: bool) -> String {
        present_data(query, apply)
            .content
            .create_view(Theme::plain())
            .to_string()
    }

    #[test]
    fn test_records_are_thousands_separated() {
        let text = render("", true);
        assert!(text.contains("12,847"));
        assert!(text.contains("[processing]"));
        assert!(text.contains("Search sources..."));
    }

    #[test]
    fn test_filtered_table() {
        let text = render("sales", true);
        assert!(text.contains("Sales Transactions Q1-Q2 2025"));
        assert!(!text.contains("Customer Demographics"));
        assert!(text.contains("showing 1 of 5"));
    }

    #[test]
    fn test_disabled_filter_shows_all() {
        let text = render("sales", false);
        assert!(text.contains("Customer Demographics"));
        assert!(text.contains("filter not applied"));
    }
}
