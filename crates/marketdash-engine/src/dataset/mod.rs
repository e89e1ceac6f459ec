//! Literal records behind each dashboard page.
//!
//! Nothing here is computed: every metric is the constant the page displays.

pub mod data;
pub mod forecasting;
pub mod overview;
pub mod reports;

use marketdash_types::{Result, Scale, check_driver_scale, check_forecast_horizon};
use serde::Serialize;

/// Page title, subtitle and the (inert) action buttons in its header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageHeader {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub actions: Vec<&'static str>,
}

/// Label shown next to the navigation bar
pub const LAST_UPDATED: &str = "Last updated: 2 min ago";

/// Application brand shown in the navigation bar
pub const BRAND: &str = "MarketAnalytics";

/// Check the documented invariants of every shipped dataset.
pub fn check_all() -> Result<()> {
    for kpi in overview::kpis() {
        kpi.check()?;
    }
    check_forecast_horizon(&overview::demand_forecast())?;
    check_forecast_horizon(&forecasting::demand_forecast())?;
    check_driver_scale(&overview::market_drivers(), Scale::Percent)?;
    check_driver_scale(&forecasting::feature_importance(), Scale::Unit)?;
    Ok(())
}
