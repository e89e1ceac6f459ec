use marketdash_engine::{BadgeContext, dataset::data, fill_width, filter_sources};
use marketdash_types::DataSource;

use crate::presentation::view_models::{
    BadgeViewModel, CommandResultViewModel, DataViewModel, Guidance, QualityRowViewModel,
    SearchViewModel, SourceRowViewModel, StatusBadge, TaskViewModel,
};

/// Build the data page for the given search text.
///
/// With `apply_filter` off the query is only echoed back and every source is
/// listed.
pub fn present_data(query: &str, apply_filter: bool) -> CommandResultViewModel<DataViewModel> {
    let sources = data::sources();
    let total = sources.len();
    let applied = apply_filter && !query.trim().is_empty();

    let rows: Vec<SourceRowViewModel> = if applied {
        filter_sources(&sources, query)
            .into_iter()
            .map(source_row)
            .collect()
    } else {
        sources.iter().map(source_row).collect()
    };

    let search = SearchViewModel {
        query: query.to_string(),
        applied,
        shown: rows.len(),
        total,
    };

    let content = DataViewModel {
        header: data::header().into(),
        stat_cards: data::stat_cards(),
        search,
        sources: rows,
        quality_metrics: data::quality_metrics()
            .into_iter()
            .map(|m| QualityRowViewModel {
                width_pct: fill_width(m.score_pct),
                icon: m.grade.icon(),
                metric: m.metric,
                score_pct: m.score_pct,
                grade: m.grade,
            })
            .collect(),
        recent_processing: data::recent_processing()
            .into_iter()
            .map(|t| TaskViewModel {
                status: BadgeViewModel::for_status(&t.status, BadgeContext::Task.style(&t.status)),
                task: t.task,
                records: t.records,
                duration: t.duration,
            })
            .collect(),
    };

    let mut result = CommandResultViewModel::new(content);

    if applied {
        let shown = result.content.search.shown;
        if shown == 0 {
            result = result
                .with_badge(StatusBadge::warning(format!(
                    "No data sources match \"{}\"",
                    query.trim()
                )))
                .with_suggestion(
                    Guidance::new("List every source").with_command("marketdash data"),
                );
        } else {
            result = result.with_badge(StatusBadge::info(format!(
                "{} of {} data sources match \"{}\"",
                shown,
                total,
                query.trim()
            )));
        }
    } else if !query.trim().is_empty() {
        result = result.with_badge(StatusBadge::info(
            "Search filter disabled (apply_search_filter = false)",
        ));
    }

    result
}

fn source_row(source: &DataSource) -> SourceRowViewModel {
    SourceRowViewModel {
        id: source.id,
        name: source.name.clone(),
        source_type: source.source_type.clone(),
        records: source.records,
        quality_pct: source.quality_pct,
        quality_width_pct: fill_width(source.quality_pct),
        status: BadgeViewModel::for_status(
            &source.status,
            BadgeContext::DataSource.style(&source.status),
        ),
        last_updated: source.last_updated.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketdash_engine::BadgeStyle;

    fn names(result: &CommandResultViewModel<DataViewModel>) -> Vec<&str> {
        result
            .content
            .sources
            .iter()
            .map(|s| s.name.as_str())
            .collect()
    }

    #[test]
    fn test_empty_query_lists_everything() {
        let result = present_data("", true);
        assert_eq!(result.content.sources.len(), 5);
        assert!(!result.content.search.applied);
        assert!(result.badge.is_none());
    }

    #[test]
    fn test_query_filters_case_insensitively() {
        let result = present_data("SALES", true);
        assert_eq!(names(&result), vec!["Sales Transactions Q1-Q2 2025"]);
        assert!(result.content.search.applied);
        assert_eq!(result.content.search.shown, 1);
        assert_eq!(result.content.search.total, 5);
    }

    #[test]
    fn test_no_match_warns() {
        let result = present_data("sql", true);
        assert!(result.content.sources.is_empty());
        assert!(result.badge.is_some());
        assert!(!result.suggestions.is_empty());
    }

    #[test]
    fn test_disabled_filter_keeps_query_but_lists_all() {
        let result = present_data("sales", false);
        assert_eq!(result.content.search.query, "sales");
        assert!(!result.content.search.applied);
        assert_eq!(result.content.sources.len(), 5);
    }

    #[test]
    fn test_status_badges() {
        let result = present_data("", true);
        let demographics = &result.content.sources[3];
        assert_eq!(demographics.status.label, "processing");
        assert_eq!(demographics.status.style, BadgeStyle::Secondary);
        assert_eq!(result.content.sources[0].status.style, BadgeStyle::Primary);

        let running = &result.content.recent_processing[3];
        assert_eq!(running.status.label, "running");
        assert_eq!(running.status.style, BadgeStyle::Primary);
    }
}
