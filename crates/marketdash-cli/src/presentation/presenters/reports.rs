use marketdash_engine::{BadgeContext, BadgeStyle, badge_style, dataset::reports, fill_width};
use marketdash_types::ImpactLevel;

use crate::presentation::view_models::{
    BadgeViewModel, CommandResultViewModel, InitiativeViewModel, InsightCardViewModel,
    ReportRowViewModel, ReportsViewModel,
};

pub fn present_reports() -> CommandResultViewModel<ReportsViewModel> {
    let content = ReportsViewModel {
        header: reports::header().into(),
        insights: reports::key_insights()
            .into_iter()
            .map(|i| InsightCardViewModel {
                impact_badge: BadgeViewModel::new(
                    format!("{} Impact", i.impact),
                    impact_style(i.impact),
                ),
                title: i.title,
                category: BadgeViewModel::new(i.category, BadgeStyle::Outline),
                impact: i.impact,
                description: i.description,
                recommendation: i.recommendation,
                icon: i.icon,
            })
            .collect(),
        initiatives: reports::initiatives()
            .into_iter()
            .map(|i| InitiativeViewModel {
                status: BadgeViewModel::for_status(
                    &i.status,
                    BadgeContext::Initiative.style(&i.status),
                ),
                confidence_width_pct: fill_width(i.confidence_pct),
                title: i.title,
                timeline: i.timeline,
                projected_impact: i.projected_impact,
                confidence_pct: i.confidence_pct,
            })
            .collect(),
        automation: reports::automation_metrics(),
        reports: reports::reports()
            .into_iter()
            .map(|r| ReportRowViewModel {
                cadence: BadgeViewModel::new(r.cadence, badge_style(&r.status)),
                title: r.title,
                generated: r.generated,
                pages: r.pages,
                insights: r.insights,
            })
            .collect(),
    };

    CommandResultViewModel::new(content)
}

fn impact_style(impact: ImpactLevel) -> BadgeStyle {
    match impact {
        ImpactLevel::High => BadgeStyle::Primary,
        ImpactLevel::Medium | ImpactLevel::Low => BadgeStyle::Secondary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_badges() {
        let result = present_reports();
        let badges: Vec<(&str, BadgeStyle)> = result
            .content
            .insights
            .iter()
            .map(|i| (i.impact_badge.label.as_str(), i.impact_badge.style))
            .collect();
        assert_eq!(
            badges,
            vec![
                ("High Impact", BadgeStyle::Primary),
                ("High Impact", BadgeStyle::Primary),
                ("Medium Impact", BadgeStyle::Secondary),
            ]
        );
    }

    #[test]
    fn test_category_is_outlined() {
        let result = present_reports();
        let first = &result.content.insights[0].category;
        assert_eq!(first.label, "Growth Driver");
        assert!(
            result
                .content
                .insights
                .iter()
                .all(|i| i.category.style == BadgeStyle::Outline)
        );
    }

    #[test]
    fn test_initiative_badges_and_confidence() {
        let result = present_reports();
        let first = &result.content.initiatives[0];
        assert_eq!(first.status.label, "In Progress");
        assert_eq!(first.status.style, BadgeStyle::Primary);
        assert_eq!(first.confidence_width_pct, 92.0);
        assert_eq!(result.content.initiatives[1].status.style, BadgeStyle::Secondary);
    }

    #[test]
    fn test_report_cadence_badges() {
        let result = present_reports();
        assert_eq!(result.content.reports.len(), 4);
        assert!(
            result
                .content
                .reports
                .iter()
                .all(|r| r.cadence.style == BadgeStyle::Accent)
        );
        assert_eq!(result.content.reports[3].cadence.label, "Ad-hoc");
    }
}
