use marketdash_types::{
    AutomationMetric, Icon, ImpactLevel, Initiative, Insight, Report, Status,
};

use super::PageHeader;

pub fn header() -> PageHeader {
    PageHeader {
        title: "Reports & Insights",
        subtitle: "Automated reporting and strategic recommendations for leadership",
        actions: vec!["Generate Report"],
    }
}

pub fn reports() -> Vec<Report> {
    let report = |id: u32, title: &str, cadence: &str, generated: &str, pages: u32, insights: u32| {
        Report {
            id,
            title: title.to_string(),
            cadence: cadence.to_string(),
            generated: generated.to_string(),
            pages,
            status: Status::Ready,
            insights,
        }
    };
    vec![
        report(1, "Q2 2025 Market Analysis Report", "Quarterly", "2 hours ago", 24, 8),
        report(2, "Demand Forecasting Executive Summary", "Monthly", "1 day ago", 12, 5),
        report(3, "Competitive Analysis Dashboard", "Weekly", "3 days ago", 18, 6),
        report(4, "Price Optimization Study", "Ad-hoc", "5 days ago", 32, 12),
    ]
}

pub fn key_insights() -> Vec<Insight> {
    vec![
        Insight {
            title: "Price Elasticity Impact".to_string(),
            category: "Growth Driver".to_string(),
            impact: ImpactLevel::High,
            description: "Price changes show 85% correlation with demand fluctuations. \
                          A 5% price reduction could increase volume by 12-15%."
                .to_string(),
            recommendation: Some(
                "Implement dynamic pricing strategy for Q3 to capture seasonal demand surge."
                    .to_string(),
            ),
            icon: Icon::DollarSign,
        },
        Insight {
            title: "Seasonal Demand Pattern".to_string(),
            category: "Market Trend".to_string(),
            impact: ImpactLevel::High,
            description: "Q3 historically shows 18% growth opportunity. \
                          Current forecast predicts 6,800 units by September."
                .to_string(),
            recommendation: Some(
                "Increase inventory by 20% ahead of Q3 peak season to avoid stockouts."
                    .to_string(),
            ),
            icon: Icon::TrendingUp,
        },
        Insight {
            title: "Market Segment Expansion".to_string(),
            category: "Opportunity".to_string(),
            impact: ImpactLevel::Medium,
            description: "Two untapped customer segments identified with combined TAM of \
                          $2.4M annually."
                .to_string(),
            recommendation: Some(
                "Launch targeted marketing campaign for segments A and B in Q3.".to_string(),
            ),
            icon: Icon::Users,
        },
    ]
}

pub fn initiatives() -> Vec<Initiative> {
    vec![
        Initiative {
            title: "Dynamic Pricing Implementation".to_string(),
            status: Status::InProgress,
            projected_impact: "$1.2M revenue increase".to_string(),
            timeline: "Q3 2025".to_string(),
            confidence_pct: 92.0,
        },
        Initiative {
            title: "Market Segment Expansion".to_string(),
            status: Status::Planned,
            projected_impact: "$2.4M TAM capture".to_string(),
            timeline: "Q3-Q4 2025".to_string(),
            confidence_pct: 85.0,
        },
    ]
}

pub fn automation_metrics() -> Vec<AutomationMetric> {
    vec![
        AutomationMetric::new("Report Generation Time", "13 min", "8.5 min", "35%"),
        AutomationMetric::new("Data Processing Speed", "12.6s", "8.2s", "35%"),
        AutomationMetric::new("Forecast Accuracy", "78.5%", "94.2%", "20%"),
        AutomationMetric::new("Manual Tasks Eliminated", "24/week", "8/week", "67%"),
    ]
}
