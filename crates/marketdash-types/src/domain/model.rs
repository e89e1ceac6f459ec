use serde::Serialize;

use crate::{Icon, Status};

/// Forecasting model card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastModel {
    pub name: String,
    /// Model family, e.g. "Ensemble"
    pub kind: String,
    pub accuracy_pct: f64,
    pub rmse: f64,
    pub mape_pct: f64,
    pub status: Status,
    pub last_trained: String,
}

/// Short titled note: an overview insight bullet or a validation result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub title: String,
    pub detail: String,
    pub icon: Icon,
}

impl Note {
    pub fn new(title: impl Into<String>, detail: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            icon,
        }
    }
}
