use serde::Serialize;
use std::fmt;

/// Analysis tabs on the Forecasting page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastTab {
    #[default]
    Models,
    Features,
    Diagnostics,
}

impl ForecastTab {
    pub const ALL: [ForecastTab; 3] = [
        ForecastTab::Models,
        ForecastTab::Features,
        ForecastTab::Diagnostics,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ForecastTab::Models => "models",
            ForecastTab::Features => "features",
            ForecastTab::Diagnostics => "diagnostics",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ForecastTab::Models => "Active Models",
            ForecastTab::Features => "Feature Importance",
            ForecastTab::Diagnostics => "Model Diagnostics",
        }
    }

    pub fn parse(name: &str) -> Option<ForecastTab> {
        ForecastTab::ALL.into_iter().find(|tab| tab.name() == name)
    }

    fn index(self) -> usize {
        match self {
            ForecastTab::Models => 0,
            ForecastTab::Features => 1,
            ForecastTab::Diagnostics => 2,
        }
    }
}

impl fmt::Display for ForecastTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exactly one active tab at a time, `models` by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState {
    active: ForecastTab,
}

impl TabState {
    pub fn new(active: ForecastTab) -> Self {
        Self { active }
    }

    pub fn active(&self) -> ForecastTab {
        self.active
    }

    pub fn is_active(&self, tab: ForecastTab) -> bool {
        self.active == tab
    }

    pub fn select(&mut self, tab: ForecastTab) {
        self.active = tab;
    }

    pub fn next(&mut self) {
        let idx = (self.active.index() + 1) % ForecastTab::ALL.len();
        self.active = ForecastTab::ALL[idx];
    }

    pub fn previous(&mut self) {
        let len = ForecastTab::ALL.len();
        let idx = (self.active.index() + len - 1) % len;
        self.active = ForecastTab::ALL[idx];
    }
}
